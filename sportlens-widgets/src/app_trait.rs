//! # LensApp Trait - Screen Plug-in Interface
//!
//! Screens are separate crates that implement `LensApp`. The shell imports and
//! registers them via `live_design(cx)` calls, after which their widget types
//! can be used in the shell's `live_design!` block.
//!
//! Each screen connects to the shell through 4 touch points:
//! 1. Import: `use sportlens_predict::PredictApp;`
//! 2. Live Register: `<PredictApp as LensApp>::live_design(cx);`
//! 3. Metadata: `PredictApp::info()` for the registry and router
//! 4. UI Definition: `<PredictScreen> {}` in live_design!
//!
//! ```rust,ignore
//! impl LensApp for PredictApp {
//!     fn info() -> AppInfo {
//!         AppInfo {
//!             name: "Predict",
//!             id: "sportlens-predict",
//!             description: "Upload an image and predict its class",
//!             page_id: live_id!(predict_page),
//!         }
//!     }
//!
//!     fn live_design(cx: &mut Cx) {
//!         crate::screen::design::live_design(cx);
//!     }
//! }
//! ```

use makepad_widgets::{Cx, LiveId};

/// Metadata about a registered screen
#[derive(Clone, Debug)]
pub struct AppInfo {
    /// Display name shown in UI
    pub name: &'static str,
    /// Unique identifier
    pub id: &'static str,
    pub description: &'static str,
    /// Page LiveId for navigation
    pub page_id: LiveId,
}

/// Trait for screens that integrate with the shell
pub trait LensApp {
    /// Returns metadata about this screen
    fn info() -> AppInfo where Self: Sized;

    /// Register this screen's widgets with Makepad
    fn live_design(cx: &mut Cx);
}

/// Registry of all installed screens
pub struct AppRegistry {
    apps: Vec<AppInfo>,
}

impl AppRegistry {
    pub const fn new() -> Self {
        Self { apps: Vec::new() }
    }

    /// Register a screen. Registering the same id twice keeps the first entry.
    pub fn register(&mut self, info: AppInfo) {
        if self.find_by_id(info.id).is_some() {
            log::warn!("App {} registered twice, ignoring", info.id);
            return;
        }
        self.apps.push(info);
    }

    pub fn find_by_id(&self, id: &str) -> Option<&AppInfo> {
        self.apps.iter().find(|app| app.id == id)
    }

    /// Page ids of all registered screens, in registration order
    pub fn page_ids(&self) -> Vec<LiveId> {
        self.apps.iter().map(|app| app.page_id).collect()
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(id: &'static str, page: &str) -> AppInfo {
        AppInfo {
            name: id,
            id,
            description: "",
            page_id: LiveId::from_str_with_lut(page).unwrap(),
        }
    }

    #[test]
    fn test_register_and_find() {
        let mut registry = AppRegistry::new();
        assert!(registry.is_empty());

        registry.register(info("predict", "predict_page"));
        registry.register(info("predict", "other_page"));

        assert_eq!(registry.len(), 1);
        let found = registry.find_by_id("predict").unwrap();
        assert_eq!(found.page_id, LiveId::from_str_with_lut("predict_page").unwrap());
        assert!(registry.find_by_id("missing").is_none());
        assert_eq!(registry.page_ids(), vec![found.page_id]);
    }
}
