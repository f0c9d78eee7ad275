use thiserror;

/// The Result type for the terminal layer.
pub(crate) type Result<T> = std::result::Result<T, TuiError>;

pub struct TuiError {
    bt: std::backtrace::Backtrace,
    pub(crate) inner: InnerError,
}

impl std::fmt::Debug for TuiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0:?}\n{1}", self.inner, self.bt)
    }
}

impl std::fmt::Display for TuiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}", self.inner)
    }
}

impl std::error::Error for TuiError {}

impl From<std::io::Error> for TuiError {
    fn from(inner: std::io::Error) -> TuiError {
        InnerError::StdIOError(inner).into()
    }
}

impl From<InnerError> for TuiError {
    fn from(inner: InnerError) -> Self {
        Self {
            bt: std::backtrace::Backtrace::capture(),
            inner,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum InnerError {
    #[error("input stream closed")]
    InputClosed,

    #[error("io error: {0}")]
    StdIOError(#[from] std::io::Error),
}
