//! rMaintlog main entrypoint.

use rmaintlog::run;
use rmaintlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
