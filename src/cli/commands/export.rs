use crate::cli::commands::build_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::RecordStore;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        out,
        force,
        filter,
    } = cmd
    {
        let store = RecordStore::from_config(cfg)?;
        let record_filter = build_filter(filter, store.log())?;
        ExportLogic::export(
            store.log(),
            &record_filter,
            *format,
            &expand_tilde(out),
            *force,
        )?;
    }
    Ok(())
}
