//! Metrics instrumentation and Prometheus exporter.

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Initialize the Prometheus metrics exporter.
///
/// Starts an HTTP server on the given address to expose metrics.
pub fn init_prometheus(listen: &str) -> Result<(), String> {
    let addr: SocketAddr = listen
        .parse()
        .map_err(|e| format!("invalid metrics listen address: {}", e))?;

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("failed to install prometheus exporter: {}", e))?;

    Ok(())
}

/// Total number of view bundles rendered.
pub const PAGES_RENDERED_TOTAL: &str = "silo_pages_rendered_total";
/// Total number of redirect responses.
pub const REDIRECTS_TOTAL: &str = "silo_redirects_total";
/// Total number of requests rejected by a lifecycle gate.
pub const FORBIDDEN_TOTAL: &str = "silo_forbidden_total";
/// Total number of renders aborted by a store or registry failure.
pub const RENDER_ERRORS_TOTAL: &str = "silo_render_errors_total";
