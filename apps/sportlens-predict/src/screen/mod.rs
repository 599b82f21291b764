pub mod design;

use makepad_widgets::*;
use sportlens_data::{ImageKind, PreviewHandle, Store, UploadPhase, UploadSession, IMAGE_EXTENSIONS};
use std::path::Path;

live_design! {
    use link::theme::*;
    use link::widgets::*;
    use crate::screen::design::*;
}

// ── Widget ────────────────────────────────────────────────────────────────────

/// Upload widget: click-to-browse or drop an image, preview it, show the
/// predicted class.
#[derive(Live, LiveHook, Widget)]
pub struct PredictScreen {
    #[deref]
    pub view: View,

    #[rust]
    session: Option<UploadSession>,

    // Set when the background runtime could not be started
    #[rust]
    session_failed: bool,

    /// Preview currently uploaded to the image widget
    #[rust]
    shown_preview: Option<PreviewHandle>,

    #[rust]
    drag_hover: bool,
}

impl Widget for PredictScreen {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        if self.session.is_none() && !self.session_failed {
            self.init_session(scope);
        }

        // ── Drag and drop ─────────────────────────────────────────────────
        self.handle_drag_and_drop(cx, event);

        let actions = cx.capture_actions(|cx| {
            self.view.handle_event(cx, event, scope);
        });

        // ── Browse / remove ───────────────────────────────────────────────
        if self.view.button(ids!(browse_btn)).clicked(&actions) {
            self.browse(cx);
        }

        if self.view.button(ids!(remove_btn)).clicked(&actions) {
            if let Some(session) = &mut self.session {
                session.remove();
                ::log::info!("Image removed");
            }
            self.view.redraw(cx);
        }

        // ── Poll background requests ──────────────────────────────────────
        if let Some(session) = &mut self.session {
            if session.poll() {
                self.view.redraw(cx);
            }
            if session.is_busy() {
                cx.new_next_frame();
            }
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.update_upload_ui(cx);
        self.view.draw_walk(cx, scope, walk)
    }
}

impl PredictScreen {
    fn init_session(&mut self, scope: &mut Scope) {
        let classifier = match scope.data.get::<Store>() {
            Some(store) => store.classifier(),
            None => {
                ::log::warn!("No Store in scope, using default classifier endpoint");
                Store::default().classifier()
            }
        };

        match UploadSession::new(classifier) {
            Ok(session) => self.session = Some(session),
            Err(e) => {
                ::log::error!("Failed to start classification runtime: {}", e);
                self.session_failed = true;
            }
        }
    }

    fn phase(&self) -> UploadPhase {
        self.session
            .as_ref()
            .map(|s| s.state().phase())
            .unwrap_or(UploadPhase::Empty)
    }

    // ── Input ────────────────────────────────────────────────────────────────

    fn browse(&mut self, cx: &mut Cx) {
        let picked = rfd::FileDialog::new()
            .set_title("Select an image")
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file();

        if let Some(path) = picked {
            self.select_path(cx, &path);
        }
    }

    fn handle_drag_and_drop(&mut self, cx: &mut Cx, event: &Event) {
        let area = self.view.widget(ids!(drop_zone)).area();
        match event.drag_hits(cx, area) {
            DragHit::Drag(drag) => {
                let hover = match drag.state {
                    DragState::In | DragState::Over => {
                        drag.response.set(DragResponse::Copy);
                        true
                    }
                    DragState::Out => false,
                };
                if hover != self.drag_hover {
                    self.drag_hover = hover;
                    self.view.redraw(cx);
                }
            }
            DragHit::Drop(drop) => {
                self.drag_hover = false;
                let dropped = drop.items.iter().find_map(|item| match item {
                    DragItem::FilePath { path, .. } => Some(path.clone()),
                    _ => None,
                });
                match dropped {
                    Some(path) => self.select_path(cx, Path::new(&path)),
                    None => {
                        ::log::debug!("Ignoring drop without a file path");
                        self.view.redraw(cx);
                    }
                }
            }
            _ => {}
        }
    }

    fn select_path(&mut self, cx: &mut Cx, path: &Path) {
        let Some(session) = self.session.as_mut() else {
            ::log::warn!("Upload session unavailable, ignoring {:?}", path);
            return;
        };

        match session.select_path(path) {
            Ok(ticket) => {
                ::log::info!("Uploading {:?} (request #{})", path, ticket.sequence());
                cx.new_next_frame();
            }
            Err(e) => ::log::warn!("{:#}", e),
        }
        self.view.redraw(cx);
    }

    // ── Drawing ──────────────────────────────────────────────────────────────

    fn update_upload_ui(&mut self, cx: &mut Cx2d) {
        let hover = if self.drag_hover { 1.0_f64 } else { 0.0_f64 };
        self.view.view(ids!(drop_zone)).apply_over(cx, live! {
            draw_bg: { hover: (hover) }
        });

        let phase = self.phase();
        let has_image = phase != UploadPhase::Empty;

        self.view.view(ids!(upload_prompt)).set_visible(cx, !has_image);
        self.view.view(ids!(preview_section)).set_visible(cx, has_image);
        self.view.widget(ids!(remove_btn)).set_visible(cx, has_image);

        self.update_preview(cx);

        let status = if phase == UploadPhase::Classifying { "Classifying…" } else { "" };
        self.view.label(ids!(status_label)).set_text(cx, status);

        let label = self
            .session
            .as_ref()
            .and_then(|s| s.state().label())
            .map(|label| format!("Predicted Class: {}", label));
        self.view.widget(ids!(prediction_label)).set_visible(cx, label.is_some());
        self.view.label(ids!(prediction_label)).set_text(cx, label.as_deref().unwrap_or(""));
    }

    /// Reload the preview texture when the selected image changed.
    fn update_preview(&mut self, cx: &mut Cx2d) {
        let selected = self.session.as_ref().and_then(|s| s.state().selected());
        let current = selected.map(|s| s.preview);
        if current == self.shown_preview {
            return;
        }
        self.shown_preview = current;

        let Some(selected) = selected else { return };
        let payload = &selected.payload;
        self.view.label(ids!(preview_name)).set_text(cx, &payload.file_name);

        let image = self.view.image(ids!(preview_image));
        let loaded = match payload.kind {
            ImageKind::Png => image.load_png_from_data(cx, &payload.bytes).map_err(|e| format!("{:?}", e)),
            ImageKind::Jpeg => image.load_jpg_from_data(cx, &payload.bytes).map_err(|e| format!("{:?}", e)),
            other => Err(format!("no preview decoder for {:?}", other)),
        };

        let has_preview = match loaded {
            Ok(()) => true,
            Err(e) => {
                ::log::warn!("Cannot preview {}: {}", payload.file_name, e);
                false
            }
        };
        self.view.widget(ids!(preview_image)).set_visible(cx, has_preview);
        self.view.widget(ids!(preview_placeholder)).set_visible(cx, !has_preview);
    }
}
