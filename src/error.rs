use thiserror::Error;

use crate::types::Band;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A required named event was absent from the input mapping, e.g. the
    /// oracle reported no dawn at this depression on this date/latitude.
    #[error("missing event '{label}' for the {band} band")]
    MissingEvent { label: String, band: Band },

    /// Input outside its valid domain; a caller bug, not recoverable.
    #[error("{what} {value} is out of range")]
    InvalidRange { what: &'static str, value: f64 },

    /// The solar-time oracle failed for one depression angle.
    #[error("solar oracle failed at {depression}° depression: {message}")]
    Oracle { depression: f64, message: String },
}

impl Error {
    pub fn missing_event(label: &str, band: Band) -> Self {
        Self::MissingEvent {
            label: label.to_string(),
            band,
        }
    }

    pub fn invalid_range(what: &'static str, value: f64) -> Self {
        Self::InvalidRange { what, value }
    }

    pub fn oracle(depression: f64, message: impl Into<String>) -> Self {
        Self::Oracle {
            depression,
            message: message.into(),
        }
    }
}
