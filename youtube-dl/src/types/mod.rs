mod progress;
mod video_info;

pub use progress::{ProgressCallback, ProgressSample};
pub use video_info::{Format, Thumbnail, VideoInfo};
