//! Persists generated images to timestamped files on disk.

use crate::ai::GeneratedImage;
use crate::{Error, Result};
use chrono::Local;
use std::path::PathBuf;

pub struct ImageSaver {
    output_dir: PathBuf,
}

impl ImageSaver {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// `nanobanana_YYYYMMDD_HHMMSS.png`, timestamped at call time.
    fn timestamped_filename() -> String {
        format!("nanobanana_{}.png", Local::now().format("%Y%m%d_%H%M%S"))
    }

    /// Write the image bytes and return the absolute path of the file.
    ///
    /// Filesystem failures (permissions, disk space, bad directory) are
    /// reported as `Error::Save` rather than propagated raw.
    pub fn save(&self, image: &GeneratedImage) -> Result<PathBuf> {
        let path = self.output_dir.join(Self::timestamped_filename());

        std::fs::write(&path, &image.data)
            .map_err(|e| Error::Save(format!("{}: {}", path.display(), e)))?;

        // canonicalize only fails here in exotic cases (e.g. the directory
        // was removed mid-save); the relative path is still correct then.
        Ok(path.canonicalize().unwrap_or(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn png(data: Vec<u8>) -> GeneratedImage {
        GeneratedImage {
            data,
            mime_type: "image/png".to_string(),
            commentary: Vec::new(),
        }
    }

    fn assert_filename_matches_pattern(name: &str) {
        // nanobanana_\d{8}_\d{6}\.png
        let rest = name
            .strip_prefix("nanobanana_")
            .unwrap_or_else(|| panic!("bad prefix: {}", name));
        let rest = rest
            .strip_suffix(".png")
            .unwrap_or_else(|| panic!("bad suffix: {}", name));
        let (date, time) = rest.split_once('_').unwrap();
        assert_eq!(date.len(), 8);
        assert_eq!(time.len(), 6);
        assert!(date.chars().all(|c| c.is_ascii_digit()));
        assert!(time.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_save_writes_bytes_to_timestamped_file() {
        let dir = tempdir().unwrap();
        let saver = ImageSaver::new(dir.path());

        let before = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let path = saver.save(&png(vec![1, 2, 3, 4])).unwrap();
        let after = Local::now().format("%Y%m%d_%H%M%S").to_string();

        assert!(path.is_absolute());
        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3, 4]);

        let name = path.file_name().unwrap().to_str().unwrap();
        assert_filename_matches_pattern(name);

        // Timestamp must match the moment of save to within the second.
        let stamp = &name["nanobanana_".len()..name.len() - ".png".len()];
        assert!(stamp >= before.as_str() && stamp <= after.as_str());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let saver = ImageSaver::new(dir.path().join("does-not-exist"));

        let err = saver.save(&png(vec![0])).unwrap_err();
        assert!(matches!(err, Error::Save(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_save_into_unwritable_directory_fails() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let target = dir.path().join("readonly");
        std::fs::create_dir(&target).unwrap();
        std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o555)).unwrap();

        let saver = ImageSaver::new(&target);
        let err = saver.save(&png(vec![0])).unwrap_err();
        assert!(matches!(err, Error::Save(_)));

        // Restore so the tempdir can be cleaned up.
        std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
}
