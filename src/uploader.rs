use std::path::Path;

use crate::config::StorageConfig;
use crate::errors::TransferError;
use crate::interfaces::StorageClient;
use crate::s3::S3StorageClient;
use crate::utils::log_utils::Logger;

/// Remote object name used when the caller does not supply one: the final
/// path segment of the local file.
#[must_use]
pub fn derive_object_name(local_path: &Path) -> Option<String> {
    local_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

/// Upload a local file to the configured bucket.
///
/// Returns `true` on confirmed transfer. Every failure is reported as a
/// single status line and `false`; nothing propagates past this boundary.
pub fn upload(
    config: &StorageConfig,
    local_path: &Path,
    object_name: Option<&str>,
    logger: &Logger,
) -> bool {
    match S3StorageClient::new(config, logger.verbosity()) {
        Ok(client) => upload_with_client(&client, local_path, object_name, logger),
        Err(e) => {
            report_upload_failure(&e, logger);
            false
        }
    }
}

/// Same contract as [`upload`], with the storage client supplied by the
/// caller.
pub fn upload_with_client(
    client: &dyn StorageClient,
    local_path: &Path,
    object_name: Option<&str>,
    logger: &Logger,
) -> bool {
    let object_name = match object_name {
        Some(name) => name.to_string(),
        None => match derive_object_name(local_path) {
            Some(name) => name,
            None => {
                logger.normal(&format!("The file was not found: {}", local_path.display()));
                return false;
            }
        },
    };

    match client.put_file(local_path, &object_name) {
        Ok(()) => {
            logger.normal(&format!(
                "Upload successful: {} to {}/{}",
                local_path.display(),
                client.bucket(),
                object_name
            ));
            true
        }
        Err(e) => {
            report_upload_failure(&e, logger);
            false
        }
    }
}

fn report_upload_failure(err: &TransferError, logger: &Logger) {
    match err {
        TransferError::NotFound(name) => {
            logger.normal(&format!("The file was not found: {name}"));
        }
        TransferError::Credentials => logger.normal("Credentials not available"),
        TransferError::Transfer(description) => {
            logger.normal(&format!("Upload failed: {description}"));
        }
    }
}
