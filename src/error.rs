use std::fmt;

/// Central error types for the shop app
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (e.g. unknown product id)
    NotFound(String),
    /// General error
    #[allow(dead_code)]
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// User-friendly error messages for UI
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound(msg) => format!("{} was not found.", msg),
            AppError::Other(msg) => msg.clone(),
        }
    }
}
