use youtube_dl::Format;

/// One tab-separated line per format: id, extension, contents, size.
pub fn format_row(format: &Format) -> String {
    let size = format
        .estimated_size()
        .map_or_else(|| "-".to_string(), format_bytes);

    format!(
        "{}\t{}\t{}\t{}",
        format.format_id,
        format.ext.as_deref().unwrap_or("-"),
        format.kind(),
        size
    )
}

#[allow(clippy::cast_precision_loss)]
fn format_bytes(bytes: u64) -> String {
    if bytes >= 1 << 30 {
        format!("{:.2}GiB", bytes as f64 / f64::from(1u32 << 30))
    } else if bytes >= 1 << 20 {
        format!("{:.2}MiB", bytes as f64 / f64::from(1u32 << 20))
    } else if bytes >= 1 << 10 {
        format!("{:.2}KiB", bytes as f64 / f64::from(1u32 << 10))
    } else {
        format!("{bytes}B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row() {
        let format = Format {
            format_id: "140".to_string(),
            ext: Some("m4a".to_string()),
            vcodec: Some("none".to_string()),
            acodec: Some("mp4a.40.2".to_string()),
            filesize_approx: Some(3 * 1024 * 1024),
            ..Format::default()
        };
        assert_eq!(format_row(&format), "140\tm4a\taudio only\t3.00MiB");
    }

    #[test]
    fn test_format_row_without_details() {
        let format = Format {
            format_id: "sb0".to_string(),
            ..Format::default()
        };
        assert_eq!(format_row(&format), "sb0\t-\tunknown\t-");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512B");
        assert_eq!(format_bytes(1536), "1.50KiB");
        assert_eq!(format_bytes(5 * (1 << 30)), "5.00GiB");
    }
}
