//! Router collaborator boundary.

/// Performs navigation on behalf of the core.
///
/// Implementations must be idempotent: being instructed to navigate to the
/// path already being navigated to is a no-op, never an error. Both logout
/// and the navigation gate's consumers issue instructions through this
/// seam, possibly for the same target.
pub trait Router: Send + Sync {
    /// Navigates the active view to `path`. Fire-and-forget: there is no
    /// confirmation and no cancellation.
    fn navigate(&self, path: &str);
}

/// Router that ignores every instruction, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRouter;

impl Router for NoopRouter {
    fn navigate(&self, _path: &str) {}
}
