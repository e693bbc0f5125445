use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::csv_file::ensure_exists;
use crate::store::journal::Journal;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the data file, header only, if it does not exist yet
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.file.as_deref(), cli.test)?;
    let data_path = cfg.data_path();

    info("Initializing rMaintlog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Data file   : {}", data_path.display());

    let created = ensure_exists(&data_path)?;
    if created {
        success(format!("Data file created at {}", data_path.display()));
    } else {
        info(format!(
            "Data file already exists, left untouched: {}",
            data_path.display()
        ));
    }

    let journal = Journal::beside(&data_path);
    let message = if created {
        "Data file initialized"
    } else {
        "Existing data file reused"
    };
    if let Err(e) = journal.write("init", &data_path.to_string_lossy(), message) {
        warning(format!("Failed to write internal journal: {e}"));
    }

    success("rMaintlog initialization completed!");
    Ok(())
}
