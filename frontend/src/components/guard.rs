use leptos::*;
use leptos_router::{use_location, NavigateOptions, Redirect};

use crate::{
    router::{
        registry::ViewRegistry,
        routes::{self, Resolution, LOGIN_PATH},
    },
    state::session::{use_session, Session},
};

/// Derived from the session at every navigation; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Unauthenticated,
    Authenticated,
}

impl AuthStatus {
    pub fn of(session: &Session) -> Self {
        if session.is_authenticated() {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(&'static str),
}

/// Runs before every navigation to `target`.
pub fn before_each(target: &str, status: AuthStatus) -> Navigation {
    if target == LOGIN_PATH {
        return Navigation::Proceed;
    }
    match status {
        AuthStatus::Unauthenticated => Navigation::Redirect(LOGIN_PATH),
        AuthStatus::Authenticated => Navigation::Proceed,
    }
}

/// What the outlet does for a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Render(Resolution),
    Redirect(String),
}

/// Resolves route redirects first, then applies the guard to the final target.
pub fn transition(path: &str, session: &Session) -> Transition {
    let status = AuthStatus::of(session);
    match routes::resolve(path) {
        Resolution::Redirect(target) => match before_each(target, status) {
            Navigation::Proceed => Transition::Redirect(target.to_string()),
            Navigation::Redirect(login) => Transition::Redirect(login.to_string()),
        },
        resolution => match before_each(path, status) {
            Navigation::Proceed => Transition::Render(resolution),
            Navigation::Redirect(login) => {
                log::debug!("no session, redirecting {} to {}", path, login);
                Transition::Redirect(login.to_string())
            }
        },
    }
}

/// Single mount point for every route. Re-evaluates the guard whenever the
/// location changes and either mounts the registered view or redirects.
#[component]
pub fn GuardedOutlet(registry: ViewRegistry) -> impl IntoView {
    let session = use_session();
    let location = use_location();

    let current = create_memo(move |_| transition(&location.pathname.get(), &session));

    move || match current.get() {
        Transition::Render(Resolution::Matched { route, shell }) => registry.render(route, shell),
        Transition::Render(_) => ().into_view(),
        Transition::Redirect(target) => view! {
            <Redirect
                path=target
                options=NavigateOptions {
                    replace: true,
                    ..Default::default()
                }
            />
        }
        .into_view(),
    }
}
