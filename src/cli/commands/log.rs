use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::store::journal::Journal;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let journal = Journal::beside(&cfg.data_path());
        LogLogic::print_log(&journal)?;
    }

    Ok(())
}
