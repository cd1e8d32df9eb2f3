//! Injected notification capability for form acknowledgements.
//!
//! The contact form reports validation notices and submission confirmations
//! through a [`Notifier`] handle provided via context, so the blocking
//! browser dialog can be swapped for a toast (or a recording sink in tests)
//! without touching form logic.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::sync::Arc;

/// Cloneable handle around a synchronous user-facing notification sink.
#[derive(Clone)]
pub struct Notifier(Arc<dyn Fn(&str) + Send + Sync>);

impl Notifier {
    /// Wrap an arbitrary notification sink.
    pub fn new(sink: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self(Arc::new(sink))
    }

    /// Blocking browser alert dialog. Outside a browser this degrades to a
    /// no-op, matching how other browser-only helpers behave off-wasm.
    pub fn alert() -> Self {
        Self::new(|text| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(text);
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = text;
            }
        })
    }

    /// Show a notice to the user.
    pub fn notify(&self, text: &str) {
        (self.0)(text);
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Notifier")
    }
}
