use std::env;
use std::net::SocketAddr;

use axum::{extract::ConnectInfo, http::HeaderMap, response::Html};
use chrono::Local;
use tracing::info;

pub const APP_VERSION: &str = "1.0.0";

pub async fn home_handler(
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Html<String> {
    let visitor_ip = visitor_ip(&headers, peer);
    info!("Request received from IP: {}", visitor_ip);

    let hostname = env::var("HOSTNAME").unwrap_or_else(|_| "unknown".to_string());
    let now = Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p");

    Html(format!(
        "<h1>Hello from Kubernetes!</h1>
            <p>This is a simple app deployed via GitHub Actions CI/CD.</p>
            <p>Your IP: {visitor_ip}</p>
            <p>Container Hostname: {hostname}</p>
            <p>Application Version: {APP_VERSION}</p>
            <p>Current Time: {now}</p>"
    ))
}

/// `x-forwarded-for` as sent, otherwise the peer's IP.
pub fn visitor_ip(headers: &HeaderMap, peer: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| peer.ip().to_string())
}
