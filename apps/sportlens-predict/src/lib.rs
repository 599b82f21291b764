pub mod screen;

use makepad_widgets::{Cx, live_id, LiveId};
use sportlens_widgets::{LensApp, AppInfo};

pub use screen::{PredictScreen, PredictScreenRef};

pub struct PredictApp;

impl LensApp for PredictApp {
    fn info() -> AppInfo {
        AppInfo {
            name: "Predict",
            id: "sportlens-predict",
            description: "Upload an image and predict its class",
            page_id: live_id!(predict_page),
        }
    }

    fn live_design(cx: &mut Cx) {
        crate::screen::design::live_design(cx);
    }
}
