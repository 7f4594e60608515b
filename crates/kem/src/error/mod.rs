//! Error handling for KEM operations

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;

use lattikem_algorithms::error::Error as PrimitiveError;
use lattikem_api::error::Error as CoreError;

/// Error type for KEM operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error raised by a ring or symmetric primitive
    Primitive(PrimitiveError),

    /// Key generation could not complete
    KeyGeneration {
        /// Algorithm name, e.g. "Kyber-768"
        algorithm: &'static str,
        /// What failed
        details: &'static str,
    },

    /// Encapsulation could not complete
    Encapsulation {
        /// Algorithm name
        algorithm: &'static str,
        /// What failed
        details: &'static str,
    },

    /// Invalid key format
    InvalidKey {
        /// Which key, e.g. "Kyber-512 public key"
        key_type: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Invalid ciphertext format
    InvalidCiphertext {
        /// Algorithm name
        algorithm: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// A byte buffer does not have the length the parameter set requires
    InvalidLength {
        /// Which buffer
        context: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// A security level name that is not "kyber512", "kyber768" or "kyber1024"
    UnknownLevel(String),
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::KeyGeneration { algorithm, details } => {
                write!(f, "Key generation error for {}: {}", algorithm, details)
            }
            Error::Encapsulation { algorithm, details } => {
                write!(f, "Encapsulation error for {}: {}", algorithm, details)
            }
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {}: {}", key_type, reason)
            }
            Error::InvalidCiphertext { algorithm, reason } => {
                write!(f, "Invalid {} ciphertext: {}", algorithm, reason)
            }
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Invalid length for {}: expected {}, got {}",
                context, expected, actual
            ),
            Error::UnknownLevel(name) => write!(
                f,
                "Unknown Kyber level '{}': expected kyber512, kyber768 or kyber1024",
                name
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        match err {
            PrimitiveError::Length {
                context,
                expected,
                actual,
            } => Error::InvalidLength {
                context,
                expected,
                actual,
            },
            other => Error::Primitive(other),
        }
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::KeyGeneration { algorithm, details } => CoreError::Other {
                context: algorithm,
                message: format!("key generation failed: {}", details),
            },
            Error::Encapsulation { algorithm, details } => CoreError::Other {
                context: algorithm,
                message: format!("encapsulation failed: {}", details),
            },
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                message: reason.to_string(),
            },
            Error::InvalidCiphertext { algorithm, reason } => CoreError::InvalidCiphertext {
                context: algorithm,
                message: reason.to_string(),
            },
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::UnknownLevel(name) => CoreError::InvalidParameter {
                context: "Kyber level",
                message: name,
            },
        }
    }
}

// Include validation submodule
pub mod validate;

// Re-export core error handling traits
pub use lattikem_api::error::ResultExt;
