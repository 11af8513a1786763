use thiserror::Error;

/// Calculator failure. The message is meant to be shown to users verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("{0}")]
    InvalidArgument(String),
}
