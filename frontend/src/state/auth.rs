use crate::{
    api::{use_api_client, ApiClient, ApiError, LoginRequest, User},
    state::session::{use_session, Session},
};
use leptos::*;

pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Please enter your username".into());
    }
    if password.is_empty() {
        return Err("Please enter your password".into());
    }
    Ok(())
}

/// Signs in and starts the session. The session is untouched on failure.
pub async fn login_request(
    request: LoginRequest,
    api: &ApiClient,
    session: &Session,
) -> Result<User, ApiError> {
    let response = api.login(&request).await?;
    session.begin(&response.token).map_err(ApiError::Storage)?;
    log::info!("signed in as {}", response.user.username);
    Ok(response.user)
}

/// Drops the token; the next navigation lands on the login page.
pub fn logout(session: &Session) {
    session.end();
}

pub fn use_login_action() -> Action<LoginRequest, Result<User, ApiError>> {
    let api = use_api_client();
    let session = use_session();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        let session = session.clone();
        async move { login_request(payload, &api, &session).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::{MockTransport, POST};
    use serde_json::json;

    fn credentials() -> LoginRequest {
        LoginRequest {
            username: "admin".into(),
            password: "admin123".into(),
        }
    }

    #[tokio::test]
    async fn login_starts_session_and_logout_ends_it() {
        let transport = MockTransport::new();
        transport.mock(|when, then| {
            when.method(POST).path("/auth/login");
            then.data(json!({
                "token": "jwt-admin",
                "user": { "id": 1, "username": "admin", "role": "ADMIN" }
            }));
        });
        let session = Session::in_memory();

        let user = login_request(credentials(), &transport.client(), &session)
            .await
            .unwrap();
        assert_eq!(user.username, "admin");
        assert_eq!(session.token().as_deref(), Some("jwt-admin"));

        logout(&session);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn failed_login_leaves_session_signed_out() {
        let transport = MockTransport::new();
        transport.mock(|when, then| {
            when.method(POST).path("/auth/login");
            then.fail(ApiError::Rejected {
                code: 500,
                message: "Wrong password".into(),
            });
        });
        let session = Session::in_memory();

        let err = login_request(credentials(), &transport.client(), &session)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Wrong password");
        assert!(!session.is_authenticated());
    }
}
