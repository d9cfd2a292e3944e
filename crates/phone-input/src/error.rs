//! Phone input errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhoneError {
    /// No usable region was selected and the number carries no
    /// international prefix.
    #[error("invalid country code")]
    UnknownRegion,

    #[error("{0}")]
    Parse(phonenumber::error::Parse),

    /// The parser panicked on this input.
    #[error("not a viable phone number")]
    Malformed,
}
