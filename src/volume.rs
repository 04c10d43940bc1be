//! Mounting and dismounting the encrypted volume that holds the diary folder.
//!
//! The work is delegated to an external tool; this module only runs it.

use crate::config::VolumeConfig;
use crate::constants;
use crate::errors::{AppResult, VolumeError};
use std::process::Command;
use tracing::info;

/// Mounts the volume, waiting for the tool to finish.
pub fn mount(volume: &VolumeConfig) -> AppResult<()> {
    info!("Mounting diary volume");
    run_tool(volume, &[])
}

/// Dismounts the volume, waiting for the tool to finish.
pub fn dismount(volume: &VolumeConfig) -> AppResult<()> {
    info!("Dismounting diary volume");
    run_tool(volume, &[constants::VOLUME_DISMOUNT_FLAG])
}

fn run_tool(volume: &VolumeConfig, extra_args: &[&str]) -> AppResult<()> {
    let command = volume.binary.display().to_string();
    let status = Command::new(&volume.binary)
        .arg(&volume.volume)
        .args(extra_args)
        .status()
        .map_err(|source| VolumeError::ExecutionFailed {
            command: command.clone(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(VolumeError::NonZeroExit {
            command,
            status_code: status.code().unwrap_or(-1),
        }
        .into())
    }
}
