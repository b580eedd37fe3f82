use crate::{
    api::LoginRequest,
    router::routes::RouteDescriptor,
    state::auth::{self, use_login_action},
};
use leptos::*;

pub fn login_view(_route: &'static RouteDescriptor) -> View {
    view! { <LoginPage/> }.into_view()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let login_action = use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/dashboard");
                    }
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let uname = username.get_untracked();
        let pword = password.get_untracked();
        if let Err(msg) = auth::validate_credentials(&uname, &pword) {
            error.set(Some(msg));
            return;
        }
        error.set(None);
        login_action.dispatch(LoginRequest {
            username: uname.trim().to_string(),
            password: pword,
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                    "Enterprise HR"
                </h2>
                <form class="mt-8 space-y-6" on:submit=handle_submit>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="username" class="sr-only">"Username"</label>
                            <input
                                id="username"
                                name="username"
                                type="text"
                                required
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 rounded-t-md sm:text-sm"
                                placeholder="Username"
                                prop:value=username
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                required
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 rounded-b-md sm:text-sm"
                                placeholder="Password"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <Show when=move || error.get().is_some()>
                        <p class="text-sm text-red-600" role="alert">
                            {move || error.get().unwrap_or_default()}
                        </p>
                    </Show>

                    <button
                        type="submit"
                        disabled=pending
                        class="group relative w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
