//! Press handler storage.
//!
//! Widgets register their press closure here while they are built. The host
//! delivers a user activation by dispatching the element id it hit. Disabled
//! widgets never register, so dispatching to them is a no-op.
//!
//! Each [`clear`](HandlerRegistry::clear) starts a new render pass. Two
//! registrations of the same pair within one pass mean two controls were
//! given the same element id; the later one wins and a warning is logged.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use log::{debug, trace, warn};

/// A press callback.
pub type Handler = Arc<dyn Fn() + Send + Sync>;

/// Event name used for control activation.
pub const ON_PRESS: &str = "on_press";

/// Registry for widget event handlers.
///
/// Maps (element_id, event_type) to handler closures. Clear it before each
/// render so handlers from controls that are gone don't persist.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<Handlers>>,
}

#[derive(Default)]
struct Handlers {
    /// Bumped by every `clear`.
    pass: u64,
    /// Duplicate registrations in the current pass.
    collisions: usize,
    entries: HashMap<(String, String), (u64, Handler)>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event.
    ///
    /// Replaces any handler already registered for the same pair.
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            trace!("[handlers] register {element_id}/{event}");
            let pass = handlers.pass;
            let key = (element_id.to_string(), event.to_string());
            let replaced = handlers.entries.insert(key, (pass, handler));
            if let Some((previous, _)) = replaced
                && previous == pass
            {
                handlers.collisions += 1;
                warn!("[handlers] {element_id}/{event} registered twice in one render, keeping the last");
            }
        }
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .entries
            .get(&(element_id.to_string(), event.to_string()))
            .map(|(_, handler)| Arc::clone(handler))
    }

    /// Run the handler for an element event.
    ///
    /// Returns false if nothing was registered. The lock is released before
    /// the handler runs, so handlers may register or dispatch themselves.
    pub fn dispatch(&self, element_id: &str, event: &str) -> bool {
        match self.get(element_id, event) {
            Some(handler) => {
                debug!("[handlers] dispatch {element_id}/{event}");
                handler();
                true
            }
            None => {
                trace!("[handlers] no handler for {element_id}/{event}");
                false
            }
        }
    }

    /// Deliver a press to a control.
    pub fn press(&self, element_id: &str) -> bool {
        self.dispatch(element_id, ON_PRESS)
    }

    /// Clear all handlers and start a new render pass.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.entries.clear();
            handlers.collisions = 0;
            handlers.pass += 1;
        }
    }

    /// Number of registrations since the last [`clear`](Self::clear) that
    /// replaced a handler registered in the same render pass.
    pub fn collisions(&self) -> usize {
        self.handlers.read().map(|h| h.collisions).unwrap_or(0)
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers
            .read()
            .map(|h| h.entries.is_empty())
            .unwrap_or(true)
    }

    /// Get the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.entries.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &count)
            .finish()
    }
}
