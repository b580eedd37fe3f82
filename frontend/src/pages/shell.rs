use crate::{
    router::routes::{self, RouteDescriptor, ROUTES},
    state::{auth, session::use_session},
};
use leptos::*;
use leptos_meta::Title;

pub fn shell_layout(route: &'static RouteDescriptor, page: View) -> View {
    view! { <ShellLayout route=route content=page/> }.into_view()
}

/// Chrome around every authenticated section: menu, title bar, logout.
#[component]
pub fn ShellLayout(route: &'static RouteDescriptor, content: View) -> impl IntoView {
    let session = use_session();
    let title = route.title().unwrap_or_default();

    let on_logout = move |_| {
        auth::logout(&session);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(routes::LOGIN_PATH);
        }
    };

    view! {
        <Title text=format!("{} | Enterprise HR", title)/>
        <div class="min-h-screen flex bg-gray-50">
            <aside class="w-56 bg-gray-900 text-gray-100">
                <div class="h-16 flex items-center px-4 text-lg font-semibold">"Enterprise HR"</div>
                <nav class="px-2 space-y-1">
                    {menu_links(route)}
                </nav>
            </aside>
            <div class="flex-1 flex flex-col">
                <header class="h-16 flex items-center justify-between px-6 bg-white border-b border-gray-200">
                    <h1 class="text-xl font-semibold text-gray-900">{title}</h1>
                    <button
                        on:click=on_logout
                        class="text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium"
                    >
                        "Log out"
                    </button>
                </header>
                <main class="flex-1 p-6">{content}</main>
            </div>
        </div>
    }
}

fn menu_links(active: &'static RouteDescriptor) -> View {
    let Some(shell) = ROUTES.iter().find(|r| r.children.contains(active)) else {
        return ().into_view();
    };
    routes::shell_routes()
        .iter()
        .map(|child| {
            let class = if std::ptr::eq(child, active) {
                "block px-3 py-2 rounded-md text-sm font-medium bg-gray-700 text-white"
            } else {
                "block px-3 py-2 rounded-md text-sm font-medium text-gray-300 hover:bg-gray-700"
            };
            view! {
                <a href=routes::full_path(shell, child) class=class>
                    {child.title().unwrap_or(child.path)}
                </a>
            }
        })
        .collect_view()
}
