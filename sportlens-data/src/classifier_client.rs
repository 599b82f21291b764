//! Remote classifier client.
//!
//! Sends one image to the classification service and reads back a label:
//!
//!   POST <endpoint>   multipart/form-data, single part `image`
//!   200 { "predicted_class": "football" }
//!
//! The service answers its own failures with `{ "error": "..." }`, sometimes
//! under a 200 status, so the body is inspected regardless of status.

use futures::future::BoxFuture;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use url::Url;

use crate::error::{ClassifyError, ServerFailure};
use crate::image::ImagePayload;

/// Name of the multipart field carrying the image bytes.
pub const IMAGE_FIELD: &str = "image";

/// Label returned by the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionResult {
    pub label: String,
}

impl PredictionResult {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    pub endpoint: Url,
    pub timeout: Option<Duration>,
}

/// Anything that can turn an image into a label.
///
/// Object safe so the upload session can hold `Arc<dyn Classifier>` and be
/// driven by a test double.
pub trait Classifier: Send + Sync {
    fn classify(&self, image: ImagePayload) -> BoxFuture<'static, Result<PredictionResult, ClassifyError>>;
}

/// HTTP client for the classification endpoint
#[derive(Debug, Clone)]
pub struct ClassifierClient {
    endpoint: Url,
    client: reqwest::Client,
}

impl ClassifierClient {
    pub fn new(config: ClassifierConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            log::warn!("Failed to build configured HTTP client, using defaults: {}", e);
            reqwest::Client::new()
        });

        Self {
            endpoint: config.endpoint,
            client,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Upload `image` and return the predicted label.
    pub async fn predict(&self, image: ImagePayload) -> Result<PredictionResult, ClassifyError> {
        let url = self.endpoint.to_string();
        log::debug!(
            "Classifying {} ({} bytes, {}) at {}",
            image.file_name,
            image.len(),
            image.mime(),
            url
        );

        let form = Form::new().part(IMAGE_FIELD, image_part(&image));

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|source| ClassifyError::Network { url: url.clone(), source })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|source| ClassifyError::Network { url: url.clone(), source })?;

        if !status.is_success() {
            return Err(ClassifyError::Server {
                url,
                failure: ServerFailure::Status {
                    status,
                    body: snippet(&text),
                },
            });
        }

        let prediction = parse_prediction(&text).map_err(|failure| ClassifyError::Server {
            url: url.clone(),
            failure,
        })?;
        log::info!("Prediction for {}: {}", image.file_name, prediction.label);
        Ok(prediction)
    }
}

impl Classifier for ClassifierClient {
    fn classify(&self, image: ImagePayload) -> BoxFuture<'static, Result<PredictionResult, ClassifyError>> {
        let client = self.clone();
        Box::pin(async move { client.predict(image).await })
    }
}

fn image_part(image: &ImagePayload) -> Part {
    let part = Part::bytes(image.bytes.to_vec()).file_name(image.file_name.clone());
    match part.mime_str(image.mime()) {
        Ok(part) => part,
        Err(e) => {
            log::warn!("Invalid MIME type {} for {}: {}", image.mime(), image.file_name, e);
            Part::bytes(image.bytes.to_vec()).file_name(image.file_name.clone())
        }
    }
}

/// Extract the label from a response body.
pub fn parse_prediction(body: &str) -> Result<PredictionResult, ServerFailure> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|_| ServerFailure::InvalidJson {
        snippet: snippet(body),
    })?;

    if let Some(label) = value.get("predicted_class").and_then(|v| v.as_str()) {
        let label = label.trim();
        if !label.is_empty() {
            return Ok(PredictionResult::new(label));
        }
    }

    match value.get("error").and_then(|v| v.as_str()) {
        Some(message) => Err(ServerFailure::Rejected {
            message: message.to_string(),
        }),
        None => Err(ServerFailure::MissingLabel),
    }
}

fn snippet(text: &str) -> String {
    text.chars().take(200).collect()
}
