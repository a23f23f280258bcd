use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata document printed by `--dump-json`.
///
/// Missing fields take their defaults; fields not modelled here are kept in
/// [`extra`](Self::extra).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoInfo {
    pub id: Option<String>,
    pub title: Option<String>,
    pub fulltitle: Option<String>,
    pub display_id: Option<String>,
    pub description: Option<String>,
    pub uploader: Option<String>,
    pub uploader_id: Option<String>,
    pub uploader_url: Option<String>,
    pub channel: Option<String>,
    pub duration: Option<f64>,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub upload_date: Option<String>,
    pub webpage_url: Option<String>,
    pub thumbnail: Option<String>,
    pub ext: Option<String>,
    pub format: Option<String>,
    pub format_id: Option<String>,
    pub age_limit: Option<u32>,
    pub formats: Vec<Format>,
    pub thumbnails: Vec<Thumbnail>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>
}

impl VideoInfo {
    /// URL of the largest listed thumbnail by pixel area, or the single
    /// `thumbnail` field when the list carries no dimensions.
    pub fn best_thumbnail(&self) -> Option<&str> {
        let largest = self
            .thumbnails
            .iter()
            .filter_map(|t| Some((t.area()?, t)))
            .max_by_key(|(area, _)| *area)
            .map(|(_, t)| t.url.as_str());

        largest
            .or(self.thumbnail.as_deref())
            .or_else(|| self.thumbnails.last().map(|t| t.url.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Format {
    pub format_id: String,
    pub format_note: Option<String>,
    pub format: Option<String>,
    pub ext: Option<String>,
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fps: Option<f64>,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
    pub abr: Option<f64>,
    pub tbr: Option<f64>,
    pub filesize: Option<u64>,
    pub filesize_approx: Option<u64>,
    pub protocol: Option<String>
}

impl Format {
    pub fn has_video(&self) -> bool {
        self.vcodec.as_ref().is_some_and(|v| v != "none")
    }

    pub fn has_audio(&self) -> bool {
        self.acodec.as_ref().is_some_and(|a| a != "none")
    }

    pub fn estimated_size(&self) -> Option<u64> {
        self.filesize.or(self.filesize_approx)
    }

    /// Short label for what the format carries: `audio+video`, `video only`,
    /// `audio only`, or `unknown` when neither codec is reported.
    pub fn kind(&self) -> &'static str {
        match (self.has_video(), self.has_audio()) {
            (true, true) => "audio+video",
            (true, false) => "video only",
            (false, true) => "audio only",
            (false, false) => "unknown"
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thumbnail {
    pub url: String,
    pub id: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>
}

impl Thumbnail {
    fn area(&self) -> Option<u64> {
        Some(u64::from(self.width?) * u64::from(self.height?))
    }
}
