//! Navigation capability.

/// Performs the full-page navigation analog on login success.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}

/// Opens the URL with the system browser/handler.
///
/// A launch failure is logged, not surfaced: a full-page navigation has
/// no failure channel to report into.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) {
        if let Err(e) = open::that(url) {
            tracing::warn!(error = %e, %url, "failed to open browser");
        }
    }
}
