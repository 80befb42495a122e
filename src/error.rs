use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevCircleError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No team found")]
    TeamNotFound,

    #[error("Member not found: {0}")]
    MemberNotFound(String),

    #[error("Backend error: {0}")]
    BackendError(String),

    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type DevCircleResult<T> = Result<T, DevCircleError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> DevCircleResult<T>;
    fn with_context<F>(self, f: F) -> DevCircleResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> DevCircleResult<T> {
        self.map_err(|e| DevCircleError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> DevCircleResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| DevCircleError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> DevCircleResult<T> {
        self.ok_or_else(|| DevCircleError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> DevCircleResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| DevCircleError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! devcircle_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::DevCircleError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::DevCircleError::$error_type(format!($fmt, $($arg)*))
    };
}
