use reporter_core::RepositoryModel;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode repository list: {message}")]
    InvalidJson { message: String },
}

/// Turns a response body into repository records.
pub trait RepositoryDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<Vec<RepositoryModel>, DecodeError>;
}

/// Decodes a JSON array of repository objects.
///
/// Wire keys are snake_case and map one-to-one onto the model's field names.
/// Unknown keys are ignored; a missing or mistyped field fails the whole body.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl RepositoryDecoder for JsonDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Vec<RepositoryModel>, DecodeError> {
        serde_json::from_slice(bytes).map_err(|err| DecodeError::InvalidJson {
            message: err.to_string(),
        })
    }
}
