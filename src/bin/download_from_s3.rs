use s3_backup_mgr::args::{self, DownloadArgs};
use s3_backup_mgr::config::StorageConfig;
use s3_backup_mgr::downloader;
use s3_backup_mgr::utils::log_utils::Logger;

fn main() {
    let args: DownloadArgs = args::parse_or_exit();
    let logger = Logger::new(args.verbose);

    let config = StorageConfig::load(&args.config_path(), &logger);
    if !downloader::download(&config, &args.object, None, &logger) {
        std::process::exit(1);
    }
}
