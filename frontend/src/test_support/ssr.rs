use std::{cell::RefCell, rc::Rc};

use leptos::*;
use leptos_router::{provide_server_redirect, RouterIntegrationContext, ServerIntegration};

use crate::{
    api::{provide_api_client, ApiClient},
    router::App,
    state::session::{provide_session, Session},
};

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders `view` with a meta context so `<Title>` has somewhere to go.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| {
        leptos_meta::provide_meta_context();
        view().into_view().render_to_string().to_string()
    });
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Like [`render_to_string`], with `session` and an API client pointed at an
/// unreachable host in context.
pub fn render_with_session<F, N>(session: Session, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        provide_api_client(ApiClient::new_with_base_url(
            session.clone(),
            "http://127.0.0.1:1/api",
        ));
        provide_session(session);
        view()
    })
}

/// Renders the whole app at `path`. Returns the markup and the redirect
/// target the router was asked for, if any.
pub fn render_app_at(path: &str, session: Session) -> (String, Option<String>) {
    let redirected = Rc::new(RefCell::new(None::<String>));
    let sink = Rc::clone(&redirected);
    let url = format!("http://localhost{}", path);
    let html = render_to_string(move || {
        provide_context(RouterIntegrationContext::new(ServerIntegration { path: url }));
        provide_server_redirect(move |target: &str| {
            sink.borrow_mut().get_or_insert_with(|| target.to_string());
        });
        view! { <App session=session/> }
    });
    let target = redirected.borrow().clone();
    (html, target)
}
