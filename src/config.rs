use ini::Ini;
use std::path::{Path, PathBuf};

use crate::utils::log_utils::Logger;
use crate::utils::path_utils::expand_tilde;

/// Section the transfer settings are read from.
const CONFIG_SECTION: &str = "default";

/// Resolved configuration shared by both transfer tools: credentials, the
/// bucket, the default download destination, and optional provider
/// settings for S3-compatible endpoints.
///
/// Loading is lenient on purpose. A missing or partial config file yields
/// a config whose absent values are only reported when a transfer is
/// attempted, never as an up-front validation error.
#[derive(Debug, Clone, Default)]
pub struct StorageConfig {
    access_key: Option<String>,
    secret_key: Option<String>,
    bucket: Option<String>,
    backup_dir: Option<PathBuf>,
    region: Option<String>,
    endpoint_url: Option<String>,
}

impl StorageConfig {
    /// Location used when no `--config` argument is given.
    #[must_use]
    pub fn default_path() -> PathBuf {
        home::home_dir()
            .map(|home| home.join(".config").join("s3-backup-mgr").join("config.ini"))
            .unwrap_or_else(|| PathBuf::from("config.ini"))
    }

    /// Read the config from an ini file.
    pub fn load(path: &Path, logger: &Logger) -> Self {
        let conf = match Ini::load_from_file(path) {
            Ok(conf) => conf,
            Err(e) => {
                logger.debug(&format!("Config file '{}' not usable: {e}", path.display()));
                return Self::default();
            }
        };

        // Blank values count as unset.
        let value = |key: &str| {
            conf.section(Some(CONFIG_SECTION))
                .and_then(|section| section.get(key))
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let backup_dir = value("backup_dir").map(|dir| {
            let raw = PathBuf::from(&dir);
            expand_tilde(&raw).unwrap_or(raw)
        });

        Self {
            access_key: value("access_key"),
            secret_key: value("secret_key"),
            bucket: value("bucket"),
            backup_dir,
            region: value("region"),
            endpoint_url: value("endpoint_url"),
        }
    }

    /// Build a config directly, bypassing the ini file.
    #[must_use]
    pub fn from_values(
        access_key: Option<String>,
        secret_key: Option<String>,
        bucket: Option<String>,
        backup_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            access_key,
            secret_key,
            bucket,
            backup_dir,
            region: None,
            endpoint_url: None,
        }
    }

    /// Access key and secret key, when both are present.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.access_key, &self.secret_key) {
            (Some(key), Some(secret)) => Some((key.as_str(), secret.as_str())),
            _ => None,
        }
    }

    #[must_use]
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Default destination directory for downloads.
    #[must_use]
    pub fn backup_dir(&self) -> Option<&Path> {
        self.backup_dir.as_deref()
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Endpoint override for S3-compatible providers.
    #[must_use]
    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }
}
