use aws_config::retry::RetryConfig;
use aws_credential_types::Credentials;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Region};
use std::path::Path;

use crate::config::StorageConfig;
use crate::errors::{Result, TransferError};
use crate::interfaces::StorageClient;
use crate::s3::models::S3StorageClient;

const DEFAULT_REGION: &str = "us-east-1";

impl S3StorageClient {
    /// Create a client from the resolved configuration.
    ///
    /// Missing credentials or bucket are reported here, at call time, not
    /// when the config file was read.
    pub fn new(config: &StorageConfig, verbose: u8) -> Result<Self> {
        let (access_key, secret_key) = config.credentials().ok_or(TransferError::Credentials)?;
        let bucket = config.bucket().ok_or(TransferError::Credentials)?;

        let region = Region::new(config.region().unwrap_or(DEFAULT_REGION).to_string());

        if verbose >= 2 {
            crate::utils::log_utils::debug("Creating S3 client with these parameters:", verbose);
            crate::utils::log_utils::debug(&format!("Bucket: {bucket}"), verbose);
            crate::utils::log_utils::debug(&format!("Region: {region:?}"), verbose);
            if let Some(endpoint) = config.endpoint_url() {
                crate::utils::log_utils::debug(&format!("Endpoint: {endpoint}"), verbose);
            }
            crate::utils::log_utils::debug(
                &format!("Key ID: {}****", &access_key[..4.min(access_key.len())]),
                verbose,
            );
        }

        let credentials = Credentials::new(
            access_key,
            secret_key,
            None, // no session token
            None, // no expiry
            "S3BackupMgrStatic",
        );

        let mut builder = aws_sdk_s3::Config::builder()
            .region(region)
            .credentials_provider(credentials)
            // single attempt per invocation
            .retry_config(RetryConfig::disabled())
            .behavior_version(BehaviorVersion::latest());
        if let Some(endpoint) = config.endpoint_url() {
            builder = builder.endpoint_url(endpoint);
        }

        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| TransferError::Transfer(format!("Failed to create runtime: {e}")))?;

        let client = Client::from_conf(builder.build());

        Ok(Self {
            bucket_name: bucket.to_string(),
            client,
            runtime,
            verbose,
        })
    }

    /// Wrap an already-built SDK client.
    pub fn from_parts(client: Client, bucket_name: String, verbose: u8) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| TransferError::Transfer(format!("Failed to create runtime: {e}")))?;
        Ok(Self {
            bucket_name,
            client,
            runtime,
            verbose,
        })
    }
}

impl StorageClient for S3StorageClient {
    fn bucket(&self) -> &str {
        &self.bucket_name
    }

    fn put_file(&self, local_path: &Path, object_key: &str) -> Result<()> {
        S3StorageClient::put_file(self, local_path, object_key)
    }

    fn get_file(&self, object_key: &str, local_path: &Path) -> Result<()> {
        S3StorageClient::get_file(self, object_key, local_path)
    }
}

/// Service error codes that mean the client could not authenticate.
pub(crate) fn is_credentials_code(code: &str) -> bool {
    matches!(
        code,
        "InvalidAccessKeyId"
            | "SignatureDoesNotMatch"
            | "AuthorizationHeaderMalformed"
            | "UnrecognizedClientException"
    )
}
