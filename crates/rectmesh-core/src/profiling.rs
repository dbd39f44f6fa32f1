//! Profiling utilities based on the `puffin` crate.
//!
//! Scopes are free when profiling is off; call [`set_enabled`] to start
//! collecting. With the `profiling-server` feature, [`start_server`] exposes the
//! data to `puffin_viewer`.

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

/// Turn puffin scope collection on or off.
pub fn set_enabled(enabled: bool) {
    puffin::set_scopes_on(enabled);
}

/// Mark the start of a new frame for profiling.
///
/// Call this once per frame, after the host has pulled the mesh.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(feature = "profiling-server")]
static PROFILING_SERVER: std::sync::OnceLock<puffin_http::Server> = std::sync::OnceLock::new();

/// Start the puffin HTTP server on `addr` (for example `"0.0.0.0:8585"`).
///
/// Enables scope collection. Failures are logged, not returned.
#[cfg(feature = "profiling-server")]
pub fn start_server(addr: &str) {
    puffin::set_scopes_on(true);
    match puffin_http::Server::new(addr) {
        Ok(server) => {
            tracing::info!("Puffin profiler server started on http://{}", addr);
            let _ = PROFILING_SERVER.set(server);
        }
        Err(e) => {
            tracing::error!("Failed to start puffin server: {}", e);
        }
    }
}
