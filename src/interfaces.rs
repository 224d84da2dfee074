use mockall::automock;
use std::path::Path;

use crate::errors::Result;

/// The two storage operations the transfer tools consume, behind a trait
/// so tests can substitute the network client.
#[automock]
pub trait StorageClient {
    /// Bucket this client is bound to.
    fn bucket(&self) -> &str;

    /// Send the full contents of a local file to the bucket under
    /// `object_key`.
    fn put_file(&self, local_path: &Path, object_key: &str) -> Result<()>;

    /// Fetch `object_key` from the bucket and write it to `local_path`,
    /// replacing any existing file there.
    fn get_file(&self, object_key: &str, local_path: &Path) -> Result<()>;
}
