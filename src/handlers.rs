use crate::catalog::{self, CATALOG};
use crate::errors::AppError;
use crate::models::{
    DayResponse, HabitDefinition, InsightRequest, InsightResponse, UpdateRequest, WeekResponse,
};
use crate::state::AppState;
use crate::stats::{build_week, date_key, day_completion, week_start};
use crate::storage::{persist_data, set_value};
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tracing::info;

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn get_catalog() -> Json<&'static [HabitDefinition]> {
    Json(CATALOG)
}

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    pub start: Option<String>,
}

/// Seven days of logs and completion percentages, starting at `start`
/// (defaults to this week's Monday).
pub async fn get_week(
    State(state): State<AppState>,
    Query(query): Query<WeekQuery>,
) -> Result<Json<WeekResponse>, AppError> {
    let start = match query.start {
        Some(raw) => parse_date_key(&raw)?,
        None => week_start(Local::now().date_naive()),
    };

    let log = state.log.lock().await;
    Ok(Json(build_week(start, &log, CATALOG)))
}

/// Records one value for one habit on one day, then writes the log through.
pub async fn update_log(
    State(state): State<AppState>,
    Json(payload): Json<UpdateRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let date = parse_date_key(&payload.date)?;
    let habit = catalog::find(&payload.habit_id)
        .ok_or_else(|| AppError::bad_request(format!("unknown habit '{}'", payload.habit_id)))?;
    let value = habit.normalize(payload.value).map_err(AppError::bad_request)?;

    let key = date_key(date);
    let mut log = state.log.lock().await;
    set_value(&mut log, &key, habit.id, value);
    persist_data(&state.data_path, &log).await;

    let day = log.get(&key).cloned().unwrap_or_default();
    Ok(Json(DayResponse {
        completion: day_completion(&day, CATALOG),
        date: key,
        log: day,
    }))
}

/// Asks the coaching service for a reflection. Always answers 200; service
/// trouble comes back as the requester's fixed fallback text.
pub async fn get_insight(
    State(state): State<AppState>,
    Json(payload): Json<InsightRequest>,
) -> Json<InsightResponse> {
    if let Some(start) = &payload.start {
        info!("insight requested for week of {start}");
    }

    // Snapshot under the lock so a slow service call never blocks edits.
    let log = state.log.lock().await.clone();
    let text = state.insight.weekly_insight(&log, CATALOG).await;
    Json(InsightResponse { text })
}

fn parse_date_key(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request(format!("invalid date '{raw}', expected YYYY-MM-DD")))
}
