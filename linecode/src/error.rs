use thiserror::Error;

pub type LinecodeResult<T> = Result<T, LinecodeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinecodeError {
    #[error("Please select an encoding technique.")]
    NoSchemeSelected,
    #[error("Please enter binary data.")]
    EmptyInput,
    #[error("Please enter a valid binary sequence (only 0s and 1s): found '{symbol}' at position {position}.")]
    InvalidInput { symbol: char, position: usize },
    #[error("unknown encoding scheme \"{}\"", _0)]
    UnknownScheme(String),
}
