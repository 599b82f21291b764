pub mod theme;
pub mod components;
pub mod app_trait;
pub mod page_router;

pub use app_trait::{LensApp, AppInfo, AppRegistry};
pub use page_router::PageRouter;

use makepad_widgets::Cx;

/// Register all shared widgets with Makepad.
///
/// Call this from `LiveRegister::live_register`, before any app crate.
///
/// **Important**: Theme is registered first as the shared components use its font and color definitions.
pub fn live_design(cx: &mut Cx) {
    theme::live_design(cx);
    components::live_design(cx);
}
