//! Health check handler
//!
//! Always reports OK; used by load balancers and deployment checks.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::config::HttpConfig;
use crate::http;

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
}

/// Handle `GET /healthcheck`. No parameters, no failure modes.
pub fn handle_health(http_config: &HttpConfig) -> Response<Full<Bytes>> {
    http::json_response(StatusCode::OK, &HealthStatus { status: "OK" }, http_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_health_body() {
        let cfg = HttpConfig {
            server_name: "test".to_string(),
            enable_cors: false,
        };
        let resp = handle_health(&cfg);
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], br#"{"status":"OK"}"#);
    }
}
