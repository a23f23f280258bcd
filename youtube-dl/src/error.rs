use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("youtube-dl executable not found: {0}")]
    BinaryNotFound(PathBuf),

    #[error("failed to launch youtube-dl: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("interrupted while waiting for youtube-dl: {0}")]
    Wait(#[source] std::io::Error),

    /// The process exited with a code greater than zero. Displays as the
    /// captured stderr text, unchanged.
    #[error("{stderr}")]
    CommandFailed { code: i32, stderr: String },

    #[error("unable to parse video information (line {line}, column {column})")]
    InvalidMetadata { line: usize, column: usize }
}

impl Error {
    pub(crate) fn launch(err: std::io::Error, binary: PathBuf) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Error::BinaryNotFound(binary)
        } else {
            Error::Spawn(err)
        }
    }

    pub(crate) fn metadata(err: &serde_json::Error) -> Self {
        Error::InvalidMetadata {
            line: err.line(),
            column: err.column()
        }
    }

    /// Exit code of the failed process, if the failure came from one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::CommandFailed { code, .. } => Some(*code),
            _ => None
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_displays_stderr_verbatim() {
        let err = Error::CommandFailed {
            code: 1,
            stderr: "ERROR: video unavailable".to_string()
        };
        assert_eq!(err.to_string(), "ERROR: video unavailable");
        assert_eq!(err.exit_code(), Some(1));
    }

    #[test]
    fn test_launch_not_found_maps_to_binary_not_found() {
        let io = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err = Error::launch(io, PathBuf::from("/nope/yt-dlp"));
        assert!(matches!(err, Error::BinaryNotFound(ref p) if p == &PathBuf::from("/nope/yt-dlp")));
        assert_eq!(err.exit_code(), None);
    }

    #[test]
    fn test_launch_other_error_maps_to_spawn() {
        let io = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let err = Error::launch(io, PathBuf::from("yt-dlp"));
        assert!(matches!(err, Error::Spawn(_)));
    }

    #[test]
    fn test_metadata_error_hides_decoder_message() {
        let decode = serde_json::from_str::<serde_json::Value>("{\"id\": ").unwrap_err();
        let err = Error::metadata(&decode);
        let message = err.to_string();
        assert!(message.starts_with("unable to parse video information"));
        assert!(!message.contains("EOF"));
    }
}
