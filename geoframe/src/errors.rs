use thiserror::Error;

pub type TransformResult<T> = Result<T, TransformError>;

/// Failures surfaced by the conversion pipeline.
///
/// Every variant is fatal to the whole batch: a request that references an
/// unknown frame or carries a malformed row produces no partial output.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("unknown reference frame: {frame}")]
    UnknownFrame { frame: String },

    #[error("input table is missing required columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("row {}: missing required fields: {}", .row, .fields.join(", "))]
    MissingField { row: usize, fields: Vec<String> },

    #[error("row {row}: field {field} is not a finite number")]
    NonFiniteInput { row: usize, field: String },

    #[error("parse error: {message}")]
    Parse { message: String },

    #[error("parameter table must not contain the central frame {frame}")]
    CentralFrameInTable { frame: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl TransformError {
    pub fn unknown_frame(frame: impl Into<String>) -> Self {
        Self::UnknownFrame {
            frame: frame.into(),
        }
    }

    pub fn missing_columns(columns: Vec<String>) -> Self {
        Self::MissingColumns { columns }
    }

    pub fn missing_field(row: usize, fields: Vec<String>) -> Self {
        Self::MissingField { row, fields }
    }

    pub fn non_finite(row: usize, field: impl Into<String>) -> Self {
        Self::NonFiniteInput {
            row,
            field: field.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}
