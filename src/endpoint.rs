/// HTTP endpoint exposing the gauge registry to the scraper.
///
/// Endpoints:
/// - GET /metrics - Prometheus text exposition of the two gauges
/// - GET /health - Service health check
///
/// Requests are served sequentially from the thread that calls `serve`;
/// each scrape reads the gauges' current values concurrently with the
/// poller's writes, which is safe because the gauges are atomic.

use crate::metrics::ExporterMetrics;
use std::sync::Arc;
use tracing::{error, info};

/// Bound listener for the scrape endpoint. Binding is separated from
/// serving so startup can fail fast on a port clash (a fatal error) and so
/// tests can bind port 0 and discover the assigned port.
pub struct EndpointServer {
    server: tiny_http::Server,
}

impl EndpointServer {
    /// Binds the listener. Failure here is the only fatal runtime error in
    /// the exporter.
    pub fn bind(addr: &str) -> Result<Self, String> {
        let server = tiny_http::Server::http(addr)
            .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;
        Ok(Self { server })
    }

    /// Port the listener actually bound.
    pub fn local_port(&self) -> Option<u16> {
        self.server.server_addr().to_ip().map(|addr| addr.port())
    }

    /// Serves scrape requests until the process is terminated.
    pub fn serve(&self, metrics: Arc<ExporterMetrics>) {
        info!("serving /metrics and /health");

        for request in self.server.incoming_requests() {
            let response = match request.url() {
                "/metrics" => handle_metrics(&metrics),
                "/health" => handle_health(),
                _ => json_response(
                    404,
                    serde_json::json!({
                        "error": "Not found",
                        "available_endpoints": ["/metrics", "/health"]
                    }),
                ),
            };

            if let Err(e) = request.respond(response) {
                error!("failed to send response: {}", e);
            }
        }
    }
}

/// Handle /metrics endpoint
fn handle_metrics(metrics: &ExporterMetrics) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    match metrics.render() {
        Ok(body) => text_response(200, body),
        Err(e) => {
            error!("metrics encoding failed: {}", e);
            text_response(500, format!("metrics encoding failed: {}\n", e))
        }
    }
}

/// Handle /health endpoint
fn handle_health() -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    json_response(
        200,
        serde_json::json!({
            "status": "ok",
            "service": "riverlevel_exporter",
            "version": env!("CARGO_PKG_VERSION")
        }),
    )
}

/// Create HTTP response in the Prometheus text exposition content type
fn text_response(status_code: u16, body: String) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    tiny_http::Response::from_data(body.into_bytes())
        .with_status_code(tiny_http::StatusCode::from(status_code))
        .with_header(
            tiny_http::Header::from_bytes(
                &b"Content-Type"[..],
                &b"text/plain; version=0.0.4; charset=utf-8"[..],
            )
            .unwrap(),
        )
}

/// Create HTTP response with JSON body
fn json_response(
    status_code: u16,
    json: serde_json::Value,
) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let body = serde_json::to_string_pretty(&json).unwrap();

    tiny_http::Response::from_data(body.into_bytes())
        .with_status_code(tiny_http::StatusCode::from(status_code))
        .with_header(
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
        )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_loopback_assigns_port() {
        let server = EndpointServer::bind("127.0.0.1:0").expect("loopback bind should succeed");
        let port = server.local_port().expect("bound listener should have a port");
        assert_ne!(port, 0);
    }

    #[test]
    fn test_bind_same_port_twice_fails() {
        let first = EndpointServer::bind("127.0.0.1:0").expect("first bind should succeed");
        let port = first.local_port().expect("port");

        let second = EndpointServer::bind(&format!("127.0.0.1:{}", port));
        assert!(second.is_err(), "port clash must be reported, not ignored");
    }

    // End-to-end scrape behavior is covered in tests/endpoint_http.rs.
}
