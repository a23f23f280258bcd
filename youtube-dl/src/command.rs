use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Renders `url` followed by `--name [value]` for each option.
///
/// Tokens are joined with single spaces and nothing is quoted or escaped, so
/// values containing whitespace split into several arguments at launch.
pub fn render_options(url: Option<&str>, options: &BTreeMap<String, Option<String>>) -> String {
    let mut line = String::new();

    if let Some(url) = url {
        line.push_str(url);
        line.push(' ');
    }

    for (name, value) in options {
        let option = match value {
            Some(value) => format!("--{name} {value}"),
            None => format!("--{name}")
        };
        line.push_str(option.trim());
        line.push(' ');
    }

    line.trim().to_string()
}

pub struct CommandBuilder {
    binary: PathBuf,
    line: String,
    args: Vec<String>
}

impl CommandBuilder {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            line: String::new(),
            args: Vec::new()
        }
    }

    /// Sets the rendered option line. Arguments are its whitespace-separated tokens.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.line = line.into();
        self.args = self.line.split_whitespace().map(str::to_string).collect();
        self
    }

    /// The full command as it is reported back to callers.
    pub fn command_line(&self) -> String {
        format!("{} {}", self.binary.display(), self.line)
            .trim()
            .to_string()
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Command ready to spawn with both output streams piped and stdin closed.
    pub fn build(&self, env_vars: &HashMap<String, String>) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(path_prepend) = env_vars.get("PATH_PREPEND") {
            let current_path = std::env::var("PATH").unwrap_or_default();
            cmd.env("PATH", format!("{path_prepend}:{current_path}"));
        }

        for (key, value) in env_vars {
            if key != "PATH_PREPEND" {
                cmd.env(key, value);
            }
        }

        cmd
    }
}
