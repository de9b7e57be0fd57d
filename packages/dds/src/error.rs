use thiserror::Error;

/// Faults the binding can surface. Engine status codes are passed through
/// uninterpreted; what they mean is between the caller and the engine's
/// own documentation.
#[derive(Debug, Error)]
pub enum DdsError {
    #[error("engine returned status {code}")]
    Engine { code: i32 },
    #[error("could not decode engine result: {detail}")]
    Decode { detail: String },
    #[error("engine library unavailable: {0}")]
    Library(#[from] libloading::Error),
}

impl DdsError {
    pub fn engine(code: i32) -> Self {
        Self::Engine { code }
    }

    pub fn decode(detail: impl Into<String>) -> Self {
        Self::Decode {
            detail: detail.into(),
        }
    }
}
