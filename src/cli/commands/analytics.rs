use crate::config::Config;
use crate::core::analytics::AnalyticsLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = RecordStore::from_config(cfg)?;
    AnalyticsLogic::print(store.log(), cfg.chart_width, cfg.notes_width);
    Ok(())
}
