use thiserror::Error;

pub type UcResult<T> = Result<T, UcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UcError {
    #[error("unit \"{input}\" not found")]
    NotFound { input: String },

    #[error("no conversion path from \"{from}\" to \"{to}\"")]
    NoConversionPath { from: String, to: String },

    #[error("unit id {id} is not registered")]
    UnknownUnit { id: u32 },

    #[error("Invalid unit registration: {0}")]
    Registration(String),
}

impl UcError {
    pub fn not_found(input: impl Into<String>) -> Self {
        Self::NotFound {
            input: input.into(),
        }
    }

    /// True for the errors a caller can act on at runtime (bad input),
    /// as opposed to corrupt registration data.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Registration(_))
    }
}
