//! Upload session: [`UploadState`] wired to a classifier and a [`Dispatcher`].
//!
//! This is everything the upload widget does, minus drawing. The widget calls
//! [`UploadSession::select`] / [`UploadSession::remove`] from user input and
//! [`UploadSession::poll`] on every event.

use std::path::Path;
use std::sync::Arc;

use crate::classifier_client::Classifier;
use crate::dispatcher::Dispatcher;
use crate::image::ImagePayload;
use crate::upload::{Resolution, UploadState, UploadTicket};

pub struct UploadSession {
    state: UploadState,
    classifier: Arc<dyn Classifier>,
    dispatcher: Dispatcher,
}

impl UploadSession {
    pub fn new(classifier: Arc<dyn Classifier>) -> std::io::Result<Self> {
        Ok(Self {
            state: UploadState::new(),
            classifier,
            dispatcher: Dispatcher::new()?,
        })
    }

    /// Show `image` immediately and start classifying it in the background.
    pub fn select(&mut self, image: ImagePayload) -> UploadTicket {
        let ticket = self.state.select(image.clone());
        self.dispatcher.submit(&self.classifier, ticket, image);
        ticket
    }

    pub fn select_path(&mut self, path: &Path) -> anyhow::Result<UploadTicket> {
        let image = ImagePayload::from_path(path)?;
        Ok(self.select(image))
    }

    pub fn remove(&mut self) {
        self.state.remove();
    }

    /// Drain finished requests. Returns true if what should be displayed changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Some(completion) = self.dispatcher.try_next() {
            match self.state.resolve(completion.ticket, completion.outcome) {
                Resolution::Applied | Resolution::Failed => changed = true,
                Resolution::Stale => {}
            }
        }
        changed
    }

    /// Whether the UI should keep polling
    pub fn is_busy(&self) -> bool {
        self.state.pending().is_some()
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }
}

impl std::fmt::Debug for UploadSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadSession")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
