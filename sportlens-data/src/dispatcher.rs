//! Runs classification requests off the UI thread.
//!
//! Requests execute on a small private tokio runtime; their outcomes are
//! queued on an mpsc channel that the UI drains with [`Dispatcher::try_next`]
//! from its event loop. Nothing is ever cancelled: a request that never
//! finishes simply never produces a completion.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;

use crate::classifier_client::{Classifier, PredictionResult};
use crate::error::ClassifyError;
use crate::image::ImagePayload;
use crate::upload::UploadTicket;

/// Outcome of one request, tagged with the ticket it was submitted under
#[derive(Debug)]
pub struct Completion {
    pub ticket: UploadTicket,
    pub outcome: Result<PredictionResult, ClassifyError>,
}

pub struct Dispatcher {
    runtime: tokio::runtime::Runtime,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
}

impl Dispatcher {
    pub fn new() -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("sportlens-classify")
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::channel();
        Ok(Self { runtime, tx, rx })
    }

    pub fn submit(&self, classifier: &Arc<dyn Classifier>, ticket: UploadTicket, image: ImagePayload) {
        let tx = self.tx.clone();
        let request = classifier.classify(image);
        self.runtime.spawn(async move {
            let outcome = request.await;
            // Fails only once the dispatcher itself is gone
            let _ = tx.send(Completion { ticket, outcome });
        });
    }

    /// Next finished request, if any. Never blocks.
    pub fn try_next(&self) -> Option<Completion> {
        match self.rx.try_recv() {
            Ok(completion) => Some(completion),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}
