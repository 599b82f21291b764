pub mod classifier_client;
pub mod dispatcher;
pub mod error;
pub mod image;
pub mod preferences;
pub mod preview;
pub mod session;
pub mod store;
pub mod upload;

pub use classifier_client::{Classifier, ClassifierClient, ClassifierConfig, PredictionResult};
pub use dispatcher::{Completion, Dispatcher};
pub use error::{ClassifyError, ServerFailure};
pub use image::{ImageKind, ImagePayload, SelectedImage, IMAGE_EXTENSIONS};
pub use preferences::{Preferences, DEFAULT_ENDPOINT, ENDPOINT_ENV_VAR};
pub use preview::{PreviewHandle, PreviewRegistry};
pub use session::UploadSession;
pub use store::Store;
pub use upload::{Resolution, UploadPhase, UploadState, UploadTicket};
