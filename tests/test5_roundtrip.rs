use s3_backup_mgr::TransferError;
use s3_backup_mgr::config::StorageConfig;
use s3_backup_mgr::downloader;
use s3_backup_mgr::interfaces::StorageClient;
use s3_backup_mgr::uploader;
use s3_backup_mgr::utils::log_utils::Logger;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

/// In-memory stand-in for the bucket, so the round-trip property can be
/// exercised through the real transfer operations.
struct InMemoryStorage {
    bucket: String,
    objects: RefCell<HashMap<String, Vec<u8>>>,
}

impl InMemoryStorage {
    fn new(bucket: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            objects: RefCell::new(HashMap::new()),
        }
    }

    fn object_count(&self) -> usize {
        self.objects.borrow().len()
    }
}

impl StorageClient for InMemoryStorage {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    fn put_file(&self, local_path: &Path, object_key: &str) -> Result<(), TransferError> {
        let bytes = std::fs::read(local_path)
            .map_err(|_| TransferError::NotFound(local_path.display().to_string()))?;
        self.objects
            .borrow_mut()
            .insert(object_key.to_string(), bytes);
        Ok(())
    }

    fn get_file(&self, object_key: &str, local_path: &Path) -> Result<(), TransferError> {
        let objects = self.objects.borrow();
        let bytes = objects
            .get(object_key)
            .ok_or_else(|| TransferError::NotFound(object_key.to_string()))?;
        std::fs::write(local_path, bytes).map_err(|e| {
            TransferError::Transfer(format!("Failed to write {}: {e}", local_path.display()))
        })?;
        Ok(())
    }
}

#[test]
fn upload_then_download_is_byte_identical() -> Result<(), Box<dyn std::error::Error>> {
    let storage = InMemoryStorage::new("nightly-backups");
    let logger = Logger::new(0);

    let source_dir = tempfile::tempdir()?;
    let source = source_dir.path().join("report.csv");
    // Arbitrary binary payload, not valid UTF-8
    let payload: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    std::fs::write(&source, &payload)?;

    assert!(uploader::upload_with_client(&storage, &source, None, &logger));

    let backup_dir = tempfile::tempdir()?;
    let config =
        StorageConfig::from_values(None, None, None, Some(backup_dir.path().to_path_buf()));
    assert!(downloader::download_with_client(
        &storage,
        &config,
        "report.csv",
        None,
        &logger
    ));

    let restored = std::fs::read(backup_dir.path().join("report.csv"))?;
    assert_eq!(restored, payload);
    Ok(())
}

#[test]
fn uploading_a_missing_file_stores_nothing() {
    let storage = InMemoryStorage::new("nightly-backups");
    let logger = Logger::new(0);

    let ok = uploader::upload_with_client(
        &storage,
        Path::new("/nonexistent/report.csv"),
        None,
        &logger,
    );
    assert!(!ok);
    assert_eq!(storage.object_count(), 0);
}

#[test]
fn downloading_a_missing_object_creates_no_file() -> Result<(), Box<dyn std::error::Error>> {
    let storage = InMemoryStorage::new("nightly-backups");
    let logger = Logger::new(0);

    let backup_dir = tempfile::tempdir()?;
    let config =
        StorageConfig::from_values(None, None, None, Some(backup_dir.path().to_path_buf()));
    let ok = downloader::download_with_client(&storage, &config, "gone.csv", None, &logger);
    assert!(!ok);
    assert!(!backup_dir.path().join("gone.csv").exists());
    Ok(())
}

#[test]
fn a_second_upload_to_the_same_key_wins() -> Result<(), Box<dyn std::error::Error>> {
    let storage = InMemoryStorage::new("nightly-backups");
    let logger = Logger::new(0);

    let dir = tempfile::tempdir()?;
    let source = dir.path().join("report.csv");

    std::fs::write(&source, b"first")?;
    assert!(uploader::upload_with_client(&storage, &source, None, &logger));
    std::fs::write(&source, b"second")?;
    assert!(uploader::upload_with_client(&storage, &source, None, &logger));

    let backup_dir = tempfile::tempdir()?;
    let config =
        StorageConfig::from_values(None, None, None, Some(backup_dir.path().to_path_buf()));
    assert!(downloader::download_with_client(
        &storage,
        &config,
        "report.csv",
        None,
        &logger
    ));
    assert_eq!(std::fs::read(backup_dir.path().join("report.csv"))?, b"second");
    Ok(())
}
