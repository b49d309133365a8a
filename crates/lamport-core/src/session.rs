//! Session persistence.
//!
//! The CLI keeps the current process set in a JSON file so `generate`,
//! `send`, and `show` invocations compose. The TUI holds the set in
//! memory and never touches this.

use crate::process::ProcessSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk snapshot of the current process set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    /// The process set as of the last generate or send.
    pub set: ProcessSet,
}

impl Session {
    /// Load a session from a file.
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let content = std::fs::read_to_string(path).map_err(SessionError::Io)?;
        let session: Self = serde_json::from_str(&content).map_err(SessionError::Parse)?;
        if !session.set.is_well_formed() {
            return Err(SessionError::Corrupt(
                "process timelines must hold exactly 10 non-decreasing events",
            ));
        }
        Ok(session)
    }

    /// Save the session to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SessionError::Io)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(SessionError::Serialize)?;
        std::fs::write(path, content).map_err(SessionError::Io)
    }
}

/// Errors that can occur when working with session files.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Serialize error.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The file parsed but does not describe a valid process set.
    #[error("Corrupt session: {0}")]
    Corrupt(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("session.json");

        let session = Session {
            set: ProcessSet::generate(4, &mut StdRng::seed_from_u64(11)),
        };
        session.save(&path).unwrap();

        let loaded = Session::load(&path).unwrap();
        assert_eq!(loaded.set, session.set);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Session::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(SessionError::Io(_))));
    }

    #[test]
    fn test_corrupt_set_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(
            &path,
            r#"{"set":{"processes":[{"increment":2,"events":[0,2,4]}]}}"#,
        )
        .unwrap();

        let result = Session::load(&path);
        assert!(matches!(result, Err(SessionError::Corrupt(_))));
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(Session::load(&path), Err(SessionError::Parse(_))));
    }
}
