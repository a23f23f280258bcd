use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Executable name used when nothing else is configured.
pub const DEFAULT_EXECUTABLE: &str = "yt-dlp";

/// Environment variable overriding the executable path.
pub const ENV_EXECUTABLE: &str = "YOUTUBE_DL_PATH";

/// Environment variable holding a directory to put in front of the child's `PATH`.
pub const ENV_PATH_PREPEND: &str = "YOUTUBE_DL_PATH_PREPEND";

/// Process-level settings shared by every invocation of a [`YoutubeDl`](crate::YoutubeDl).
///
/// Set once, hand to the runner at construction; the runner never mutates it.
#[derive(Debug, Clone)]
pub struct Config {
    executable: PathBuf,
    env_vars: HashMap<String, String>
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            env_vars: HashMap::new()
        }
    }

    /// Defaults overlaid with `YOUTUBE_DL_PATH` and `YOUTUBE_DL_PATH_PREPEND`.
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(path) = std::env::var(ENV_EXECUTABLE)
            && !path.is_empty()
        {
            config.executable = PathBuf::from(path);
        }

        if let Ok(prepend) = std::env::var(ENV_PATH_PREPEND)
            && !prepend.is_empty()
        {
            config.env_vars.insert("PATH_PREPEND".to_string(), prepend);
        }

        config
    }

    pub fn executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.executable = path.into();
        self
    }

    /// Extra variable for the child environment. The key `PATH_PREPEND` is
    /// special: its value is put in front of the inherited `PATH`.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    pub fn executable_path(&self) -> &Path {
        &self.executable
    }

    pub fn env_vars(&self) -> &HashMap<String, String> {
        &self.env_vars
    }
}
