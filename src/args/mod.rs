pub mod types;

pub use types::{DownloadArgs, UploadArgs};

use clap::Parser;
use clap::error::ErrorKind;
use std::process;

/// Parse command line arguments for one of the transfer tools.
///
/// Usage errors (including a wrong positional-argument count) print the
/// usage text and exit 1; `--help` and `--version` exit 0.
pub fn parse_or_exit<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            process::exit(code);
        }
    }
}
