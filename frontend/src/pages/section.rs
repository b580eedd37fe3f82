use crate::router::routes::RouteDescriptor;
use leptos::*;

pub fn section_view(route: &'static RouteDescriptor) -> View {
    view! { <SectionPage route=route/> }.into_view()
}

/// Placeholder body for a domain section; the embedding application
/// registers its own view for the same id to replace it.
#[component]
pub fn SectionPage(route: &'static RouteDescriptor) -> impl IntoView {
    let title = route.title().unwrap_or(route.path);
    view! {
        <section class="bg-white shadow rounded-lg p-6" data-section=route.path>
            <h2 class="text-lg font-medium text-gray-900">{title}</h2>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::router::routes::shell_routes;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn section_shows_route_title() {
        let route = &shell_routes()[0];
        let html = render_to_string(move || section_view(route));
        assert!(html.contains("Dashboard"));
        assert!(html.contains("data-section=\"dashboard\""));
    }
}
