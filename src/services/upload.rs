use std::path::{Path, PathBuf};

use axum::body::Bytes;
use chrono::Utc;
use tokio::fs;

use crate::error::{AppError, AppResult};

/// Builds `<epoch millis>-<original basename>`. The basename is reduced to
/// its final path component so a crafted filename cannot escape the upload
/// directory; identically named files uploaded in the same millisecond still
/// collide, which is accepted at this scale.
pub fn unique_filename(original: &str) -> String {
    let base = Path::new(original)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("")
        .replace(['/', '\\'], "-");
    let base = if base.is_empty() {
        "image".to_string()
    } else {
        base
    };
    format!("{}-{}", Utc::now().timestamp_millis(), base)
}

/// Writes the uploaded bytes under `upload_dir` and returns the generated
/// filename (not the full path).
pub async fn store_image(upload_dir: &str, original: &str, data: Bytes) -> AppResult<String> {
    let filename = unique_filename(original);
    let path = PathBuf::from(upload_dir).join(&filename);
    fs::write(&path, &data)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to store upload: {e}")))?;
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_keeps_original_name_with_timestamp_prefix() {
        let name = unique_filename("sunset.png");
        let (prefix, rest) = name.split_once('-').expect("timestamp prefix");
        assert!(prefix.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(rest, "sunset.png");
    }

    #[test]
    fn path_components_are_stripped() {
        let name = unique_filename("../../etc/passwd");
        assert!(!name.contains('/'));
        assert!(name.ends_with("-passwd"));

        let name = unique_filename("..\\..\\boot.ini");
        assert!(!name.contains('\\'));
    }

    #[test]
    fn empty_name_falls_back() {
        let name = unique_filename("");
        assert!(name.ends_with("-image"));
    }
}
