//! Dismount the diary volume.

use crate::config::Config;
use crate::errors::AppResult;
use crate::volume;
use tracing::debug;

/// Dismounts the configured volume if the diary folder is currently present.
///
/// Returns whether the volume tool was run. Without a configured volume, or
/// with the folder already gone, this does nothing.
pub fn hide_diary(config: &Config) -> AppResult<bool> {
    match &config.volume {
        Some(volume) if config.diary_dir_exists() => {
            volume::dismount(volume)?;
            Ok(true)
        }
        _ => {
            debug!("Nothing to hide");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VolumeConfig;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_hide_without_volume_is_noop() {
        let temp_dir = tempdir().unwrap();
        let config = Config {
            diary_dir: temp_dir.path().to_path_buf(),
            ..Config::default()
        };
        assert!(!hide_diary(&config).unwrap());
    }

    #[test]
    fn test_hide_with_missing_folder_is_noop() {
        let temp_dir = tempdir().unwrap();
        let config = Config {
            diary_dir: temp_dir.path().join("unmounted"),
            volume: Some(VolumeConfig {
                binary: PathBuf::from("/nonexistent/truecrypt"),
                volume: "v".to_string(),
            }),
            ..Config::default()
        };
        assert!(!hide_diary(&config).unwrap());
    }
}
