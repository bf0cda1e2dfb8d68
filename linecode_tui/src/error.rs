use linecode::LinecodeError;
use thiserror::Error;

pub type LinecodeTuiResult<T> = Result<T, LinecodeTuiError>;

#[derive(Error, Debug)]
pub enum LinecodeTuiError {
    #[error("IO error: {}", _0)]
    Io(std::io::Error),
    #[error("{}", _0)]
    Linecode(LinecodeError),
    #[error("logging: {}", _0)]
    Logging(String),
}

impl From<std::io::Error> for LinecodeTuiError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<LinecodeError> for LinecodeTuiError {
    fn from(error: LinecodeError) -> Self {
        Self::Linecode(error)
    }
}
