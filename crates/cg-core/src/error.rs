use thiserror::Error;

pub type CgResult<T> = Result<T, CgError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CgError {
    #[error("Not found: {what}")]
    NotFound { what: String },

    #[error("Out of range: {what}")]
    OutOfRange { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
