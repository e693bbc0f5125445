use crate::cli::commands::build_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter } = cmd {
        let store = RecordStore::from_config(cfg)?;
        let record_filter = build_filter(filter, store.log())?;
        ListLogic::print(store.log(), &record_filter, cfg.notes_width);
    }
    Ok(())
}
