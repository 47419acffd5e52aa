use thiserror::Error;

#[derive(Debug, Error)]
pub enum FreeThrowError {
    /// The shooter height lies outside the range the closed-form shot covers.
    #[error("invalid shooter height {height_ft} ft: {reason}")]
    InvalidInput { height_ft: f64, reason: String },

    #[error("invalid court: {0}")]
    InvalidCourt(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not draw chart: {0}")]
    Chart(String),
}
