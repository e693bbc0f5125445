use crate::config::Config;
use crate::core::dashboard::DashboardLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = RecordStore::from_config(cfg)?;
    DashboardLogic::print(store.log(), cfg.chart_width);
    Ok(())
}
