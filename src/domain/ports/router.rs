//! Router Port
//!
//! The host's location provider. Navigation is fire-and-forget: the new
//! location arrives later as a separate path-changed notification.

/// Location provider consumed by the navigation synchronizer
pub trait Router {
    /// Path component of the current location
    fn current_path(&self) -> String;

    /// Request navigation to `path`; does not block and reports nothing
    fn navigate(&self, path: &str);
}

impl<R: Router + ?Sized> Router for &R {
    fn current_path(&self) -> String {
        (**self).current_path()
    }

    fn navigate(&self, path: &str) {
        (**self).navigate(path)
    }
}
