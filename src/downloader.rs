use std::path::{Path, PathBuf};

use crate::config::StorageConfig;
use crate::errors::TransferError;
use crate::interfaces::StorageClient;
use crate::s3::S3StorageClient;
use crate::utils::log_utils::Logger;

/// Destination used when the caller does not supply one: the configured
/// backup directory joined with the final path segment of the object name.
#[must_use]
pub fn derive_local_path(backup_dir: &Path, object_name: &str) -> PathBuf {
    let base = Path::new(object_name)
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(object_name));
    backup_dir.join(base)
}

/// Download an object from the configured bucket.
///
/// Returns `true` on confirmed transfer, `false` with a single status
/// line on any failure. An existing file at the destination is replaced
/// without confirmation.
pub fn download(
    config: &StorageConfig,
    object_name: &str,
    local_path: Option<&Path>,
    logger: &Logger,
) -> bool {
    match S3StorageClient::new(config, logger.verbosity()) {
        Ok(client) => download_with_client(&client, config, object_name, local_path, logger),
        Err(e) => {
            report_download_failure(&e, logger);
            false
        }
    }
}

/// Same contract as [`download`], with the storage client supplied by the
/// caller.
pub fn download_with_client(
    client: &dyn StorageClient,
    config: &StorageConfig,
    object_name: &str,
    local_path: Option<&Path>,
    logger: &Logger,
) -> bool {
    let destination = match local_path {
        Some(path) => path.to_path_buf(),
        None => match config.backup_dir() {
            Some(dir) => derive_local_path(dir, object_name),
            None => {
                // backup_dir is part of the required configuration; its
                // absence is reported like any other missing value.
                report_download_failure(&TransferError::Credentials, logger);
                return false;
            }
        },
    };

    match client.get_file(object_name, &destination) {
        Ok(()) => {
            logger.normal(&format!(
                "Download successful: {} from {} to {}",
                object_name,
                client.bucket(),
                destination.display()
            ));
            true
        }
        Err(e) => {
            report_download_failure(&e, logger);
            false
        }
    }
}

fn report_download_failure(err: &TransferError, logger: &Logger) {
    match err {
        TransferError::NotFound(name) => {
            logger.normal(&format!("The file was not found: {name}"));
        }
        TransferError::Credentials => logger.normal("Credentials not available"),
        TransferError::Transfer(description) => {
            logger.normal(&format!("Download failed: {description}"));
        }
    }
}
