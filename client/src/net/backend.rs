//! `gloo-net` implementation of the core `HttpBackend`.
//!
//! Client-side (hydrate): real `fetch` calls raced against the request
//! timeout. Server-side (SSR): every call fails, since the lending service is
//! only reached from the browser.

use async_trait::async_trait;
use lending_portal::PortalError;
use lending_portal::transport::{ApiRequest, ApiResponse, HttpBackend};

/// Browser `fetch` backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchBackend;

#[async_trait(?Send)]
impl HttpBackend for FetchBackend {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, PortalError> {
        #[cfg(feature = "hydrate")]
        {
            fetch(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(PortalError::Network("not available on server".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
async fn fetch(request: ApiRequest) -> Result<ApiResponse, PortalError> {
    use futures::future::{Either, select};
    use gloo_net::http::Request;
    use lending_portal::transport::Method;

    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Put => Request::put(&request.url),
        Method::Delete => Request::delete(&request.url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let prepared = match request.body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(|e| PortalError::Network(e.to_string()))?;

    let send = Box::pin(prepared.send());
    let deadline = Box::pin(gloo_timers::future::sleep(request.timeout));
    match select(send, deadline).await {
        Either::Left((result, _)) => {
            let response = result.map_err(|e| PortalError::Network(e.to_string()))?;
            let status = response.status();
            let body = response.text().await.map_err(|e| PortalError::Network(e.to_string()))?;
            Ok(ApiResponse::new(status, body))
        }
        Either::Right(_) => Err(PortalError::Timeout),
    }
}
