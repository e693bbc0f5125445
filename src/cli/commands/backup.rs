use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        out,
        compress,
        force,
    } = cmd
    {
        let store = RecordStore::from_config(cfg)?;
        BackupLogic::backup(&store, &expand_tilde(out), *compress, *force)?;
    }

    Ok(())
}
