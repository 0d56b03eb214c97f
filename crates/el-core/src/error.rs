use thiserror::Error;

pub type ElResult<T> = Result<T, ElError>;

#[derive(Error, Debug)]
pub enum ElError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
