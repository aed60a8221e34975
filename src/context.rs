//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Version-counter observable for a remote collection.
///
/// The publisher calls `notify` after a confirmed mutation; observers read
/// `watch` inside their load effect so the effect re-runs on every bump.
/// Subscriptions are visible at the call site instead of going through a
/// global event broadcast.
#[derive(Clone, Copy)]
pub struct ChangeNotifier {
    version: RwSignal<u32>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self { version: RwSignal::new(0) }
    }

    /// Announce that the collection changed on the backend
    pub fn notify(&self) {
        self.version.update(|v| *v += 1);
    }

    /// Subscribe: reading inside an effect re-runs it on each notify
    pub fn watch(&self) -> u32 {
        self.version.get()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// App-wide notifiers provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Fires when the lead collection changed remotely (confirmed writes)
    pub leads_changed: ChangeNotifier,
    /// Fires when the costing collection changed remotely
    pub costings_changed: ChangeNotifier,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            leads_changed: ChangeNotifier::new(),
            costings_changed: ChangeNotifier::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_bumps_version_per_notify() {
        let notifier = ChangeNotifier::new();
        assert_eq!(notifier.watch(), 0);
        notifier.notify();
        notifier.notify();
        assert_eq!(notifier.watch(), 2);
    }
}
