use crate::models::{HabitValue, WeeklyLog};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/habits.json"))
}

/// Loads the full log. Missing or unreadable files and malformed content all
/// degrade to an empty log; startup never fails on bad data.
pub async fn load_data(path: &Path) -> WeeklyLog {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(log) => log,
            Err(err) => {
                error!("failed to parse data file: {err}");
                WeeklyLog::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => WeeklyLog::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            WeeklyLog::default()
        }
    }
}

/// Writes the full log. Failures are logged and swallowed: the in-memory log
/// stays authoritative and the next successful write catches up.
pub async fn persist_data(path: &Path, log: &WeeklyLog) {
    let payload = match serde_json::to_vec_pretty(log) {
        Ok(payload) => payload,
        Err(err) => {
            error!("failed to serialize log: {err}");
            return;
        }
    };
    if let Err(err) = fs::write(path, payload).await {
        error!("failed to write data file: {err}");
    }
}

/// Sole mutation path: records one value for one habit on one day, creating
/// the day's entry if needed and leaving every other entry untouched.
pub fn set_value(log: &mut WeeklyLog, date_key: &str, habit_id: &str, value: HabitValue) {
    log.entry(date_key.to_string())
        .or_default()
        .insert(habit_id.to_string(), value);
}
