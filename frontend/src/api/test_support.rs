#[cfg(test)]
pub mod mock {
    use crate::api::{ApiClient, ApiError, ApiRequest, Transport};
    use async_trait::async_trait;
    use reqwest::Method;
    use serde_json::Value;
    use std::cell::RefCell;
    use std::rc::Rc;

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const PUT: Method = Method::PUT;
    pub const DELETE: Method = Method::DELETE;

    /// In-process transport that records every request and answers from
    /// registered routes, so facade calls can be checked without a server.
    #[derive(Clone, Default)]
    pub struct MockTransport {
        inner: Rc<RefCell<Inner>>,
    }

    #[derive(Default)]
    struct Inner {
        routes: Vec<Route>,
        fallback: Option<ApiError>,
        sent: Vec<ApiRequest>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        response: Result<Value, ApiError>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn client(&self) -> ApiClient {
            ApiClient::with_transport(self.clone())
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let response = match then.error {
                Some(error) => Err(error),
                None => Ok(then.data.unwrap_or(Value::Null)),
            };

            self.inner.borrow_mut().routes.push(Route {
                method,
                path,
                response,
            });
        }

        /// Answers every request without a matching route with `error`.
        pub fn fail_all(&self, error: ApiError) {
            self.inner.borrow_mut().fallback = Some(error);
        }

        pub fn sent(&self) -> Vec<ApiRequest> {
            self.inner.borrow().sent.clone()
        }

        pub fn last(&self) -> ApiRequest {
            self.inner
                .borrow()
                .sent
                .last()
                .cloned()
                .expect("no request was sent")
        }
    }

    #[async_trait(?Send)]
    impl Transport for MockTransport {
        async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
            let mut inner = self.inner.borrow_mut();
            let route = inner
                .routes
                .iter()
                .rev()
                .find(|route| route.method == request.method && route.path == request.path)
                .cloned();
            let fallback = inner.fallback.clone();
            let response = route.map(|route| route.response).unwrap_or_else(|| {
                Err(fallback.unwrap_or_else(|| {
                    ApiError::network(format!("No mock for {} {}", request.method, request.path))
                }))
            });
            inner.sent.push(request);
            response
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        data: Option<Value>,
        error: Option<ApiError>,
    }

    impl Then {
        /// Unwrapped `data` the transport resolves to.
        pub fn data(&mut self, data: Value) -> &mut Self {
            self.data = Some(data);
            self
        }

        pub fn fail(&mut self, error: ApiError) -> &mut Self {
            self.error = Some(error);
            self
        }
    }
}
