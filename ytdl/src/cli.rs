use std::path::PathBuf;

use clap::{Parser, Subcommand};
use youtube_dl::Request;

#[derive(Parser, Debug)]
#[command(name = "ytdl", version, about = "Run youtube-dl and report its output")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Executable to run instead of `yt-dlp` (or `$YOUTUBE_DL_PATH`).
    #[arg(long, global = true)]
    pub executable: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the executable's version.
    Version,

    /// Print full video metadata as JSON.
    Info { url: String },

    /// List the available formats: id, extension, contents, size.
    Formats {
        url: String,

        /// Print the full format records as JSON instead.
        #[arg(long)]
        json: bool
    },

    /// Print the thumbnails as JSON.
    Thumbnails {
        url: String,

        /// Print only the URL of the largest thumbnail.
        #[arg(long)]
        best: bool
    },

    /// Print the categories, one per line.
    Categories { url: String },

    /// Print the tags, one per line.
    Tags { url: String },

    /// Run the tool on a URL with arbitrary options, showing progress.
    Run {
        url: String,

        /// Working directory for the process.
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Option as `name` or `name=value`, without the leading `--`. Can be repeated.
        ///
        /// Examples:
        /// --option format=bestaudio
        /// --option newline
        #[arg(long = "option", short = 'o')]
        options: Vec<String>
    }
}

/// Builds the request for `run` from its URL, directory and `name[=value]` options.
pub fn run_request(url: &str, dir: Option<PathBuf>, options: &[String]) -> Request {
    let mut request = Request::with_url(url);
    request.set_directory(dir);

    for option in options {
        match option.split_once('=') {
            Some((name, value)) => request.set_option_value(name, value),
            None => request.set_option(option)
        }
    }

    request
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_request_options() {
        let options = vec![
            "format=bestaudio".to_string(),
            "newline".to_string(),
            "--retries=3".to_string()
        ];
        let request = run_request("http://x", Some(PathBuf::from("/tmp")), &options);

        assert_eq!(request.option("format"), Some(Some("bestaudio")));
        assert_eq!(request.option("newline"), Some(None));
        assert_eq!(request.option("retries"), Some(Some("3")));
        assert_eq!(request.build_options(), "http://x --format bestaudio --newline --retries 3");
        assert_eq!(request.directory(), Some(std::path::Path::new("/tmp")));
    }

    #[test]
    fn test_parse_run_command() {
        let cli = Cli::try_parse_from([
            "ytdl",
            "--executable",
            "/opt/yt-dlp",
            "run",
            "http://x",
            "-o",
            "format=best",
            "--option",
            "newline"
        ])
        .unwrap();

        assert_eq!(cli.executable, Some(PathBuf::from("/opt/yt-dlp")));
        match cli.command {
            Commands::Run { url, dir, options } => {
                assert_eq!(url, "http://x");
                assert!(dir.is_none());
                assert_eq!(options, vec!["format=best".to_string(), "newline".to_string()]);
            }
            other => panic!("unexpected command: {other:?}")
        }
    }

    #[test]
    fn test_parse_thumbnails_best() {
        let cli = Cli::try_parse_from(["ytdl", "thumbnails", "--best", "http://x"]).unwrap();
        assert!(matches!(cli.command, Commands::Thumbnails { ref url, best: true } if url == "http://x"));
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["ytdl"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
