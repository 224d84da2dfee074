use aws_sdk_s3::Client;

/// Blocking facade over the S3 SDK.
///
/// Owns a dedicated tokio runtime; every SDK call is driven through
/// `runtime.block_on`, so callers stay synchronous. One client performs
/// exactly one transfer per process invocation.
pub struct S3StorageClient {
    pub(crate) bucket_name: String,
    pub(crate) client: Client,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) verbose: u8,
}
