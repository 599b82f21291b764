//! Preview references for selected images.
//!
//! A handle plays the role of a locally generated display URL: the widget
//! keys its preview texture on it and reloads when it changes. Handles are
//! scoped, so the previous one must be revoked before a new one is created.

use std::collections::HashSet;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewHandle(Uuid);

impl PreviewHandle {
    pub fn id(&self) -> Uuid {
        self.0
    }
}

/// Tracks which preview handles are live
#[derive(Debug, Default)]
pub struct PreviewRegistry {
    live: HashSet<PreviewHandle>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self) -> PreviewHandle {
        let handle = PreviewHandle(Uuid::now_v7());
        self.live.insert(handle);
        handle
    }

    /// Returns false if the handle was already revoked.
    pub fn revoke(&mut self, handle: PreviewHandle) -> bool {
        self.live.remove(&handle)
    }

    pub fn is_live(&self, handle: PreviewHandle) -> bool {
        self.live.contains(&handle)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_revoke() {
        let mut registry = PreviewRegistry::new();
        let a = registry.create();
        let b = registry.create();
        assert_ne!(a, b);
        assert_eq!(registry.live_count(), 2);

        assert!(registry.revoke(a));
        assert!(!registry.revoke(a));
        assert!(!registry.is_live(a));
        assert!(registry.is_live(b));
        assert_eq!(registry.live_count(), 1);
    }
}
