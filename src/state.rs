use crate::insight::InsightClient;
use crate::models::WeeklyLog;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub log: Arc<Mutex<WeeklyLog>>,
    pub insight: InsightClient,
}

impl AppState {
    pub fn new(data_path: PathBuf, log: WeeklyLog, insight: InsightClient) -> Self {
        Self {
            data_path,
            log: Arc::new(Mutex::new(log)),
            insight,
        }
    }
}
