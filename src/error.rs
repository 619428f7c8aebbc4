use thiserror::Error;

/// The uploaded bytes could not be decoded as an image. Surfaced to the
/// caller as-is; there is nothing to retry.
#[derive(Debug, Error)]
#[error("could not decode uploaded image: {0}")]
pub struct DecodeError(#[from] pub image::ImageError);

/// The model artifact could not be loaded or prepared. Fatal at startup:
/// without a model no request can be served.
#[derive(Debug, Error)]
#[error("failed to load food model from {path}: {reason}")]
pub struct ModelLoadError {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The normalized image does not match the model's input, or the model
    /// produced an output vector of the wrong length. Either way this is an
    /// internal bug, fatal to the call.
    #[error("shape mismatch: model expects {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },
    #[error("forward pass failed: {0}")]
    Inference(String),
}

/// A classification-half failure. Nutrition failures never appear here:
/// the resolver recovers locally with an estimated record.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

/// A single nutrition lookup went wrong. Logged and answered with an
/// estimated record, never surfaced to the pipeline caller.
#[derive(Debug, Error)]
pub enum NutritionLookupError {
    #[error("nutrition request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("nutrition provider returned status {0}")]
    Status(u16),
    #[error("could not parse nutrition response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("nutrition response contained no foods")]
    Empty,
}

/// The resolver itself could not be built. Distinct from lookup failures:
/// a bad credential or client configuration is a programming/config error
/// and must surface at startup instead of being swallowed by the fallback.
#[derive(Debug, Error)]
pub enum NutritionConfigError {
    #[error("credential is not a valid header value")]
    InvalidCredential(#[from] reqwest::header::InvalidHeaderValue),
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}
