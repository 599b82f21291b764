//! Upload widget state, independent of any UI toolkit.
//!
//! Holds at most one selected image and at most one prediction. Every
//! selection hands out a fresh [`UploadTicket`]; only the outcome carrying the
//! current ticket may change what is displayed, so a slow response for an
//! image the user already replaced or removed is dropped.

use crate::classifier_client::PredictionResult;
use crate::error::ClassifyError;
use crate::image::{ImagePayload, SelectedImage};
use crate::preview::{PreviewHandle, PreviewRegistry};

/// Sequence number of one classification request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UploadTicket(u64);

impl UploadTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// What the widget should currently render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    /// Nothing selected: show the upload affordance
    Empty,
    /// Preview shown, request outstanding
    Classifying,
    /// Preview and label shown
    Classified,
    /// Preview shown, request failed: no label
    Unclassified,
}

/// Result of feeding a response back into the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Failed,
    Stale,
}

#[derive(Debug, Default)]
pub struct UploadState {
    selected: Option<SelectedImage>,
    prediction: Option<PredictionResult>,
    pending: Option<UploadTicket>,
    last_ticket: u64,
    previews: PreviewRegistry,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current image, clear the prediction and open a new request.
    pub fn select(&mut self, payload: ImagePayload) -> UploadTicket {
        self.release_preview();
        let preview = self.previews.create();

        self.prediction = None;
        self.last_ticket += 1;
        let ticket = UploadTicket(self.last_ticket);
        self.pending = Some(ticket);

        log::debug!(
            "Selected {} as request #{}",
            payload.file_name,
            ticket.sequence()
        );
        self.selected = Some(SelectedImage { payload, preview });
        ticket
    }

    /// Clear preview and prediction and restore the empty upload affordance.
    pub fn remove(&mut self) {
        self.release_preview();
        self.prediction = None;
        self.pending = None;
    }

    /// Apply the outcome of the request identified by `ticket`.
    pub fn resolve(
        &mut self,
        ticket: UploadTicket,
        outcome: Result<PredictionResult, ClassifyError>,
    ) -> Resolution {
        if self.pending != Some(ticket) {
            log::debug!("Discarding response for superseded request #{}", ticket.sequence());
            return Resolution::Stale;
        }
        self.pending = None;

        match outcome {
            Ok(prediction) => {
                self.prediction = Some(prediction);
                Resolution::Applied
            }
            Err(e) => {
                log::warn!(
                    "Error predicting (request #{}): {:#}",
                    ticket.sequence(),
                    anyhow::Error::from(e)
                );
                self.prediction = None;
                Resolution::Failed
            }
        }
    }

    pub fn phase(&self) -> UploadPhase {
        match (&self.selected, &self.prediction, self.pending) {
            (None, _, _) => UploadPhase::Empty,
            (Some(_), _, Some(_)) => UploadPhase::Classifying,
            (Some(_), Some(_), None) => UploadPhase::Classified,
            (Some(_), None, None) => UploadPhase::Unclassified,
        }
    }

    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> Option<PreviewHandle> {
        self.selected.as_ref().map(|s| s.preview)
    }

    pub fn prediction(&self) -> Option<&PredictionResult> {
        self.prediction.as_ref()
    }

    pub fn label(&self) -> Option<&str> {
        self.prediction.as_ref().map(|p| p.label.as_str())
    }

    pub fn pending(&self) -> Option<UploadTicket> {
        self.pending
    }

    pub fn live_previews(&self) -> usize {
        self.previews.live_count()
    }

    fn release_preview(&mut self) {
        if let Some(previous) = self.selected.take() {
            self.previews.revoke(previous.preview);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServerFailure;

    fn payload(name: &str) -> ImagePayload {
        ImagePayload::new(name, vec![0xFF, 0xD8, 0xFF, 0xE0])
    }

    fn server_error() -> ClassifyError {
        ClassifyError::Server {
            url: "http://localhost:5000/predict".into(),
            failure: ServerFailure::MissingLabel,
        }
    }

    #[test]
    fn test_select_shows_preview_before_response() {
        let mut state = UploadState::new();
        assert_eq!(state.phase(), UploadPhase::Empty);

        let ticket = state.select(payload("a.jpg"));
        assert_eq!(state.phase(), UploadPhase::Classifying);
        assert!(state.preview().is_some());
        assert_eq!(state.label(), None);
        assert_eq!(state.pending(), Some(ticket));
    }

    #[test]
    fn test_new_selection_clears_label_immediately() {
        let mut state = UploadState::new();
        let first = state.select(payload("a.jpg"));
        assert_eq!(state.resolve(first, Ok(PredictionResult::new("football"))), Resolution::Applied);
        assert_eq!(state.label(), Some("football"));

        state.select(payload("b.jpg"));
        assert_eq!(state.label(), None);
        assert_eq!(state.phase(), UploadPhase::Classifying);
    }

    #[test]
    fn test_failure_leaves_no_prediction() {
        let mut state = UploadState::new();
        let ticket = state.select(payload("a.jpg"));
        assert_eq!(state.resolve(ticket, Err(server_error())), Resolution::Failed);
        assert_eq!(state.phase(), UploadPhase::Unclassified);
        assert_eq!(state.label(), None);
        assert!(state.preview().is_some());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = UploadState::new();
        let first = state.select(payload("a.jpg"));
        let second = state.select(payload("b.jpg"));
        assert!(second > first);

        assert_eq!(state.resolve(first, Ok(PredictionResult::new("cricket"))), Resolution::Stale);
        assert_eq!(state.label(), None);
        assert_eq!(state.phase(), UploadPhase::Classifying);

        assert_eq!(state.resolve(second, Ok(PredictionResult::new("rugby"))), Resolution::Applied);
        assert_eq!(state.label(), Some("rugby"));

        // A duplicate delivery for an already resolved ticket changes nothing
        assert_eq!(state.resolve(second, Err(server_error())), Resolution::Stale);
        assert_eq!(state.label(), Some("rugby"));
    }

    #[test]
    fn test_remove_from_any_state() {
        let mut state = UploadState::new();
        state.remove();
        assert_eq!(state.phase(), UploadPhase::Empty);

        // While pending
        let pending = state.select(payload("a.jpg"));
        state.remove();
        assert_eq!(state.phase(), UploadPhase::Empty);
        assert_eq!(state.resolve(pending, Ok(PredictionResult::new("boxing"))), Resolution::Stale);
        assert_eq!(state.label(), None);

        // After a label
        let ticket = state.select(payload("b.jpg"));
        state.resolve(ticket, Ok(PredictionResult::new("boxing")));
        state.remove();
        assert_eq!(state.phase(), UploadPhase::Empty);
        assert!(state.selected().is_none());
        assert_eq!(state.prediction(), None);
        assert_eq!(state.live_previews(), 0);
    }

    #[test]
    fn test_previews_do_not_accumulate() {
        let mut state = UploadState::new();
        let mut seen = Vec::new();
        for i in 0..50 {
            state.select(payload(&format!("{i}.jpg")));
            assert_eq!(state.live_previews(), 1);
            seen.push(state.preview().unwrap());
        }
        seen.dedup();
        assert_eq!(seen.len(), 50);
    }
}
