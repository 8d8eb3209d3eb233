//! Tarot illustration lookup.
//!
//! Catalog entries reference images like `/tarot/2.jpg`, relative to the
//! asset root. Exported card scans frequently carry an upper-case `.JPG`
//! extension, so a miss on `.jpg` is retried once with `.JPG` before the
//! placeholder is shown.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TarotImage {
    Found(PathBuf),
    /// Neither the path nor its case variant exists.
    Unavailable {
        requested: String,
        attempts: Vec<PathBuf>,
    },
}

impl TarotImage {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

pub fn resolve_tarot_image(asset_root: &Path, requested: &str) -> TarotImage {
    let first = asset_root.join(requested.trim_start_matches('/'));
    if first.is_file() {
        return TarotImage::Found(first);
    }

    let mut attempts = vec![first];

    if let Some(stem) = requested.strip_suffix(".jpg") {
        let retry = asset_root.join(format!("{}.JPG", stem.trim_start_matches('/')));
        tracing::debug!(path = %retry.display(), "retrying tarot image with upper-case extension");
        if retry.is_file() {
            return TarotImage::Found(retry);
        }
        attempts.push(retry);
    }

    tracing::warn!(requested, "tarot image failed to load");
    TarotImage::Unavailable {
        requested: requested.to_string(),
        attempts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_image_at_requested_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("tarot")).unwrap();
        fs::write(dir.path().join("tarot/2.jpg"), b"jpeg").unwrap();

        let image = resolve_tarot_image(dir.path(), "/tarot/2.jpg");
        assert_eq!(image, TarotImage::Found(dir.path().join("tarot/2.jpg")));
    }

    #[test]
    fn retries_once_with_upper_case_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("tarot")).unwrap();
        fs::write(dir.path().join("tarot/7.JPG"), b"jpeg").unwrap();

        let image = resolve_tarot_image(dir.path(), "/tarot/7.jpg");
        assert!(image.is_found());
    }

    #[test]
    fn falls_back_to_placeholder_after_one_retry() {
        let dir = tempfile::tempdir().unwrap();

        let image = resolve_tarot_image(dir.path(), "/tarot/9.jpg");
        let TarotImage::Unavailable {
            requested,
            attempts,
        } = image
        else {
            panic!("expected placeholder");
        };
        assert_eq!(requested, "/tarot/9.jpg");
        assert_eq!(attempts.len(), 2);
        assert!(attempts[1].ends_with("tarot/9.JPG"));
    }

    #[test]
    fn non_jpg_paths_are_not_retried() {
        let dir = tempfile::tempdir().unwrap();

        let image = resolve_tarot_image(dir.path(), "tarot/9.png");
        let TarotImage::Unavailable { attempts, .. } = image else {
            panic!("expected placeholder");
        };
        assert_eq!(attempts.len(), 1);
    }
}
