use std::sync::Arc;

use crate::classifier_client::{Classifier, ClassifierClient};
use crate::preferences::Preferences;

/// Central state container for the application
///
/// The Store is loaded once by the shell and passed down to screens via
/// Makepad's Scope mechanism.
///
/// # Usage
///
/// In App's handle_event:
/// ```rust,ignore
/// let scope = &mut Scope::with_data(&mut self.store);
/// self.ui.handle_event(cx, event, scope);
/// ```
///
/// In child widgets:
/// ```rust,ignore
/// if let Some(store) = scope.data.get::<Store>() {
///     let classifier = store.classifier();
/// }
/// ```
pub struct Store {
    /// User preferences (persisted to disk)
    pub preferences: Preferences,

    /// Client for the configured classification endpoint
    pub client: ClassifierClient,
}

impl Default for Store {
    fn default() -> Self {
        // Defaults only; use Store::load() to pick up the preferences file
        Self::from_preferences(Preferences::default())
    }
}

impl Store {
    /// Create a new Store by loading preferences from disk
    pub fn load() -> Self {
        Self::from_preferences(Preferences::load())
    }

    pub fn from_preferences(preferences: Preferences) -> Self {
        let client = ClassifierClient::new(preferences.classifier_config());
        log::info!("Classifier endpoint: {}", client.endpoint());
        Self { preferences, client }
    }

    /// Shared handle to the classifier, for upload sessions
    pub fn classifier(&self) -> Arc<dyn Classifier> {
        Arc::new(self.client.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_uses_preferences_endpoint() {
        let store = Store::from_preferences(Preferences {
            endpoint: "https://sports.example.com/predict".into(),
            request_timeout_secs: None,
        });
        assert_eq!(store.client.endpoint().as_str(), "https://sports.example.com/predict");
    }

    #[test]
    fn test_default_store() {
        let store = Store::default();
        assert_eq!(store.client.endpoint().as_str(), crate::preferences::DEFAULT_ENDPOINT);
    }
}
