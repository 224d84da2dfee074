use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;

use crate::errors::{Result, TransferError};
use crate::s3::client::is_credentials_code;
use crate::s3::models::S3StorageClient;

impl S3StorageClient {
    /// Upload a local file to the bucket under `object_key`.
    pub fn put_file(&self, local_path: &Path, object_key: &str) -> Result<()> {
        // The entry point already checked existence; the file may still
        // have vanished in between.
        if !local_path.is_file() {
            return Err(TransferError::NotFound(local_path.display().to_string()));
        }

        self.runtime.block_on(async {
            // Stream straight from the file path, no loading into memory
            let body = ByteStream::from_path(local_path)
                .await
                .map_err(|_| TransferError::NotFound(local_path.display().to_string()))?;

            crate::utils::log_utils::debug(
                &format!(
                    "S3 put request: bucket {} key {}",
                    self.bucket_name, object_key
                ),
                self.verbose,
            );

            self.client
                .put_object()
                .bucket(&self.bucket_name)
                .key(object_key)
                .body(body)
                .send()
                .await
                .map_err(|e| match e.code() {
                    Some(code) if is_credentials_code(code) => TransferError::Credentials,
                    _ => TransferError::Transfer(format!("Failed to upload to storage: {e}")),
                })?;

            Ok(())
        })
    }
}
