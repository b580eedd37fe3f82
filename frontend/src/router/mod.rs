pub mod registry;
pub mod routes;

pub use registry::{LayoutFactory, ViewFactory, ViewRegistry};
pub use routes::{resolve, Resolution, RouteDescriptor, RouteMeta, ViewId, LOGIN_PATH, ROUTES};

use crate::{
    api::{provide_api_client, ApiClient},
    components::guard::GuardedOutlet,
    pages::{login::login_view, section::section_view, shell::shell_layout},
    state::session::{provide_session, Session},
};
use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::{Route, Router, Routes};

/// Views shipped with the crate, one per entry in [`ROUTES`].
pub fn default_registry() -> ViewRegistry {
    ViewRegistry::new()
        .view(ViewId::Login, login_view)
        .view(ViewId::Dashboard, section_view)
        .view(ViewId::Employees, section_view)
        .view(ViewId::Attendance, section_view)
        .view(ViewId::Salary, section_view)
        .view(ViewId::Leave, section_view)
        .view(ViewId::Ai, section_view)
        .layout(ViewId::Shell, shell_layout)
}

#[component]
fn AppOutlet() -> impl IntoView {
    let registry = use_context::<ViewRegistry>().unwrap_or_else(default_registry);
    view! { <GuardedOutlet registry=registry/> }
}

/// Provides the session, API client and view registry, then hands every
/// location to the guarded outlet.
#[component]
pub fn App(session: Session, #[prop(optional)] registry: Option<ViewRegistry>) -> impl IntoView {
    provide_meta_context();
    provide_api_client(ApiClient::new(session.clone()));
    provide_session(session);
    provide_context(registry.unwrap_or_else(default_registry));

    view! {
        <Router>
            <Routes>
                <Route path="/" view=AppOutlet/>
                <Route path="/*any" view=AppOutlet/>
            </Routes>
        </Router>
    }
}

pub fn mount_app() {
    mount_to_body(|| view! { <App session=Session::browser()/> });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_covers_every_route() {
        let registry = default_registry();
        for route in ROUTES {
            assert!(registry.contains(route.view), "{:?} unregistered", route.view);
            for child in route.children {
                assert!(registry.contains(child.view), "{:?} unregistered", child.view);
            }
        }
    }
}
