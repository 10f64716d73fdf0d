//! Errors from the trivia service client

use super::CategoryId;
use std::fmt;

/// Errors that can occur while building a board from the trivia service
///
/// `Network`, `Status` and `Decode` all mean the service could not be used;
/// the other variants mean it answered but with too little data for a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport failure (connect, timeout, TLS)
    Network(String),
    /// Non-success HTTP status
    Status { status: u16, url: String },
    /// Response body was not the expected JSON
    Decode(String),
    /// Category listing had fewer distinct ids than requested
    PoolTooSmall { available: usize, requested: usize },
    /// Category has fewer usable clues than a column needs
    InsufficientClues {
        category_id: CategoryId,
        available: usize,
        required: usize,
    },
}

impl ApiError {
    /// Whether this failure came from talking to the service rather than its data
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Status { .. } | Self::Decode(_)
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Status { status, url } => write!(f, "HTTP {} from {}", status, url),
            Self::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            Self::PoolTooSmall {
                available,
                requested,
            } => write!(
                f,
                "Only {} categories available, need {}",
                available, requested
            ),
            Self::InsufficientClues {
                category_id,
                available,
                required,
            } => write!(
                f,
                "Category {} has {} usable clues, need {}",
                category_id, available, required
            ),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_class() {
        assert!(ApiError::Network("refused".into()).is_network());
        assert!(ApiError::Status {
            status: 503,
            url: "http://x".into()
        }
        .is_network());
        assert!(ApiError::Decode("eof".into()).is_network());
        assert!(!ApiError::InsufficientClues {
            category_id: CategoryId(7),
            available: 3,
            required: 5
        }
        .is_network());
    }

    #[test]
    fn display_names_the_category() {
        let err = ApiError::InsufficientClues {
            category_id: CategoryId(11531),
            available: 3,
            required: 5,
        };
        assert_eq!(err.to_string(), "Category 11531 has 3 usable clues, need 5");
    }
}
