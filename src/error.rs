use std::fmt;
use thiserror::Error;

/// How many elements a destructuring pattern needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Fixed-size pattern such as `(a, b, c)`.
    Exactly(usize),
    /// Pattern with a variadic middle such as head/rest/tail.
    AtLeast(usize),
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("invalid argument '{value}': {reason}")]
    InvalidArgument { value: String, reason: String },

    #[error("shape mismatch: pattern needs {expected} element(s), sequence has {actual}")]
    ShapeMismatch { expected: Arity, actual: usize },

    #[error("failed to write demo output")]
    Io(#[from] std::io::Error),
}

impl DemoError {
    pub fn invalid_argument(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn shape_mismatch(expected: Arity, actual: usize) -> Self {
        Self::ShapeMismatch { expected, actual }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let error = DemoError::shape_mismatch(Arity::Exactly(3), 2);
        let display = format!("{}", error);
        assert!(display.contains("exactly 3"));
        assert!(display.contains("has 2"));

        let error = DemoError::shape_mismatch(Arity::AtLeast(2), 1);
        assert!(format!("{}", error).contains("at least 2"));
    }

    #[test]
    fn test_invalid_argument_display() {
        let error = DemoError::invalid_argument("abc", "not an integer");
        assert_eq!(
            format!("{}", error),
            "invalid argument 'abc': not an integer"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let error: DemoError = io.into();
        assert!(matches!(error, DemoError::Io(_)));
    }
}
