use std::rc::Rc;

use leptos::*;
use serde::de::DeserializeOwned;

use super::{
    error::ApiError,
    request::ApiRequest,
    transport::{HttpTransport, Transport},
};
use crate::state::session::{use_session, Session};

/// Facade over the HR backend. Each operation builds one [`ApiRequest`] and
/// hands it to the transport; clones share the transport.
#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn Transport>,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self::with_transport(HttpTransport::new(session))
    }

    pub fn new_with_base_url(session: Session, base_url: impl Into<String>) -> Self {
        Self::with_transport(HttpTransport::new_with_base_url(session, base_url))
    }

    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Rc::new(transport),
        }
    }

    pub(crate) async fn call<T>(&self, request: ApiRequest) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let data = self.transport.send(request).await?;
        serde_json::from_value(data).map_err(|e| ApiError::decode(e.to_string()))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}

pub fn provide_api_client(client: ApiClient) {
    provide_context(client);
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(use_session()))
}
