use crate::models::{DailyLog, HabitDefinition, HabitKind, HabitValue, WeekDay, WeekResponse, WeeklyLog};
use chrono::{Datelike, Duration, NaiveDate};

/// Completion percentage for one day against the full catalog.
///
/// Boolean habits score 1 of 1 when true. Bounded counters score their
/// clamped count out of the bound. Open counters score as binary "activity
/// occurred" (1 of 1 when the count is positive); the magnitude is
/// deliberately not graphed.
pub fn day_completion(day: &DailyLog, catalog: &[HabitDefinition]) -> u8 {
    let mut score: u32 = 0;
    let mut possible: u32 = 0;

    for habit in catalog {
        match habit.kind {
            HabitKind::Boolean => {
                possible += 1;
                if day.get(habit.id) == Some(&HabitValue::Flag(true)) {
                    score += 1;
                }
            }
            HabitKind::BoundedCounter => {
                let bound = habit.bound.unwrap_or(0);
                possible += bound;
                if let Some(HabitValue::Count(n)) = day.get(habit.id) {
                    score += (*n).min(bound);
                }
            }
            HabitKind::Counter => {
                possible += 1;
                if matches!(day.get(habit.id), Some(HabitValue::Count(n)) if *n > 0) {
                    score += 1;
                }
            }
        }
    }

    if possible == 0 {
        return 0;
    }
    (100.0 * f64::from(score) / f64::from(possible)).round() as u8
}

/// One percentage per date, in the given order. Days with no entry score
/// against an empty log.
pub fn week_completion(days: &[NaiveDate], log: &WeeklyLog, catalog: &[HabitDefinition]) -> Vec<u8> {
    let empty = DailyLog::new();
    days.iter()
        .map(|date| {
            let day = log.get(&date_key(*date)).unwrap_or(&empty);
            day_completion(day, catalog)
        })
        .collect()
}

pub fn build_week(start: NaiveDate, log: &WeeklyLog, catalog: &[HabitDefinition]) -> WeekResponse {
    let days = week_days(start)
        .into_iter()
        .map(|date| {
            let key = date_key(date);
            let day = log.get(&key).cloned().unwrap_or_default();
            WeekDay {
                completion: day_completion(&day, catalog),
                weekday: date.format("%a").to_string(),
                date: key,
                log: day,
            }
        })
        .collect();

    WeekResponse {
        start: date_key(start),
        days,
    }
}

pub fn week_days(start: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|offset| start + Duration::days(offset as i64))
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Monday of the given date's week.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}
