use clap::Parser;
use std::path::{Path, PathBuf};

use crate::config::StorageConfig;
use crate::utils::path_utils::expand_tilde;

/// Arguments for the upload tool.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "upload-to-s3",
    version,
    about = "Upload a backup file to the configured bucket"
)]
pub struct UploadArgs {
    /// Path to the local file to upload
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Config file path (defaults to ~/.config/s3-backup-mgr/config.ini)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print extra stuff (use -v -v for even more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the download tool.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "download-from-s3",
    version,
    about = "Download an object from the configured bucket into the backup directory"
)]
pub struct DownloadArgs {
    /// Name of the object to download
    #[arg(value_name = "OBJECT")]
    pub object: String,

    /// Config file path (defaults to ~/.config/s3-backup-mgr/config.ini)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print extra stuff (use -v -v for even more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl UploadArgs {
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        resolve_config_path(self.config.as_deref())
    }
}

impl DownloadArgs {
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        resolve_config_path(self.config.as_deref())
    }
}

fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => expand_tilde(path).unwrap_or_else(|_| path.to_path_buf()),
        None => StorageConfig::default_path(),
    }
}
