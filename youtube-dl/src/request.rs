use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::command::render_options;

/// Parameters of one invocation: target URL, working directory and options.
///
/// Option names are stored without the leading `--`. Setting a name twice
/// keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    url: Option<String>,
    directory: Option<PathBuf>,
    options: BTreeMap<String, Option<String>>
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_url_and_directory(url: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            url: Some(url.into()),
            directory: Some(directory.into()),
            options: BTreeMap::new()
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = Some(url.into());
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    pub fn set_directory(&mut self, directory: Option<PathBuf>) {
        self.directory = directory;
    }

    pub fn options(&self) -> &BTreeMap<String, Option<String>> {
        &self.options
    }

    /// Flag-only option, rendered as `--name`.
    pub fn set_option(&mut self, name: impl AsRef<str>) {
        self.options.insert(option_name(name.as_ref()), None);
    }

    /// Option rendered as `--name value`.
    pub fn set_option_value(&mut self, name: impl AsRef<str>, value: impl ToString) {
        self.options
            .insert(option_name(name.as_ref()), Some(value.to_string()));
    }

    pub fn remove_option(&mut self, name: impl AsRef<str>) -> Option<Option<String>> {
        self.options.remove(&option_name(name.as_ref()))
    }

    /// `None` when the option is not set, `Some(None)` for a flag-only option.
    pub fn option(&self, name: &str) -> Option<Option<&str>> {
        self.options
            .get(&option_name(name))
            .map(Option::as_deref)
    }

    pub fn option_flag(mut self, name: impl AsRef<str>) -> Self {
        self.set_option(name);
        self
    }

    pub fn option_value(mut self, name: impl AsRef<str>, value: impl ToString) -> Self {
        self.set_option_value(name, value);
        self
    }

    pub fn directory_path(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// URL and options as one space-separated line, without the executable.
    pub fn build_options(&self) -> String {
        render_options(self.url.as_deref(), &self.options)
    }
}

fn option_name(name: &str) -> String {
    name.trim().trim_start_matches("--").to_string()
}
