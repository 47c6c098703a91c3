//! Error types for the cluster application.
//!
//! [`StartupFault`] is fatal: `main` logs it and exits. [`TelemetryError`] is never fatal;
//! the frame loop keeps rendering the last known snapshot while the link is down.

use std::path::PathBuf;

use thiserror::Error;

/// Failure that prevents the cluster from starting.
#[derive(Debug, Error)]
pub enum StartupFault {
    #[error("cannot read trouble-code catalog {path}: {source}")]
    CatalogUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("trouble-code catalog {path} is malformed: {source}")]
    CatalogMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot start telemetry feed: {source}")]
    FeedSpawn {
        #[source]
        source: std::io::Error,
    },
}

/// Failure talking to the vehicle interface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TelemetryError {
    #[error("connection to vehicle interface lost: {reason}")]
    ConnectionLost { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = StartupFault::CatalogUnreadable {
            path: PathBuf::from("/nope/codes.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let text = err.to_string();
        assert!(text.contains("/nope/codes.json"), "{text}");
        assert!(text.contains("missing"), "{text}");
    }

    #[test]
    fn test_connection_lost_message() {
        let err = TelemetryError::ConnectionLost {
            reason: "adapter unplugged".to_string(),
        };
        assert_eq!(err.to_string(), "connection to vehicle interface lost: adapter unplugged");
    }
}
