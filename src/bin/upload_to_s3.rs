use s3_backup_mgr::args::{self, UploadArgs};
use s3_backup_mgr::config::StorageConfig;
use s3_backup_mgr::uploader;
use s3_backup_mgr::utils::log_utils::Logger;

fn main() {
    let args: UploadArgs = args::parse_or_exit();
    let logger = Logger::new(args.verbose);

    // Check the backup file exists before any client is built
    if !args.file.is_file() {
        logger.normal(&format!("Backup file not found: {}", args.file.display()));
        std::process::exit(1);
    }

    let config = StorageConfig::load(&args.config_path(), &logger);
    if !uploader::upload(&config, &args.file, None, &logger) {
        std::process::exit(1);
    }
}
