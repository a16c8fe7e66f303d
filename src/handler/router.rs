//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method validation,
//! path matching and dispatching to the health and BMI handlers.

use crate::config::{Config, HttpConfig};
use crate::handler::{bmi, health};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<Config>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);

    let response = match check_http_method(&method, config.http.enable_cors) {
        Some(resp) => resp,
        None => route_request(&path, query.as_deref(), &config.http),
    };

    if config.logging.access_log {
        let mut entry = AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path);
        entry.query = query;
        entry.status = response.status().as_u16();
        entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
        entry.request_time_us =
            u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &config.logging.access_log_format);
    }

    Ok(response)
}

/// Route a request by exact path match. Pure function of its inputs.
pub fn route_request(
    path: &str,
    query: Option<&str>,
    http_config: &HttpConfig,
) -> Response<Full<Bytes>> {
    match path {
        "/healthcheck" => health::handle_health(http_config),
        "/bmi-calculator" => bmi::handle_bmi(query, http_config),
        _ => http::not_found(http_config),
    }
}

/// Check HTTP method and return a response for anything other than GET
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}
