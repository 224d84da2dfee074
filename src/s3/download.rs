use aws_sdk_s3::error::ProvideErrorMetadata;
use std::io::ErrorKind;
use std::path::Path;

use crate::errors::{Result, TransferError};
use crate::s3::client::is_credentials_code;
use crate::s3::models::S3StorageClient;

impl S3StorageClient {
    /// Fetch `object_key` from the bucket and write it to `local_path`.
    ///
    /// An existing file at `local_path` is replaced without confirmation.
    pub fn get_file(&self, object_key: &str, local_path: &Path) -> Result<()> {
        let content = self.runtime.block_on(async {
            crate::utils::log_utils::debug(
                &format!(
                    "S3 get request: bucket {} key {}",
                    self.bucket_name, object_key
                ),
                self.verbose,
            );

            let resp = self
                .client
                .get_object()
                .bucket(&self.bucket_name)
                .key(object_key)
                .send()
                .await
                .map_err(|e| match e.code() {
                    Some("NoSuchKey") => TransferError::NotFound(object_key.to_string()),
                    Some(code) if is_credentials_code(code) => TransferError::Credentials,
                    _ => TransferError::Transfer(format!("Failed to download from storage: {e}")),
                })?;

            let bytes = resp
                .body
                .collect()
                .await
                .map_err(|e| TransferError::Transfer(format!("Failed to read response body: {e}")))?;

            Ok::<Vec<u8>, TransferError>(bytes.to_vec())
        })?;

        crate::utils::log_utils::debug(
            &format!("Downloaded {} bytes from storage", content.len()),
            self.verbose,
        );

        std::fs::write(local_path, content).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                TransferError::NotFound(local_path.display().to_string())
            } else {
                TransferError::Transfer(format!("Failed to write {}: {e}", local_path.display()))
            }
        })?;

        Ok(())
    }
}
