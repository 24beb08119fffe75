use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a habit is recorded: done/not-done, an open count, or a count with a
/// fixed daily ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HabitKind {
    Boolean,
    Counter,
    BoundedCounter,
}

#[derive(Debug, Clone, Serialize)]
pub struct HabitDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: HabitKind,
    /// Daily ceiling, present iff `kind` is `BoundedCounter`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    pub icon: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

/// A recorded value. Serializes as a bare JSON boolean or non-negative
/// integer, which keeps the data file in the plain
/// `{"2026-08-03": {"puasa": true, "tilawah": 4}}` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HabitValue {
    Flag(bool),
    Count(u32),
}

/// One day's entries, keyed by habit id. A missing key means "not yet
/// recorded", which is distinct from a recorded zero or false.
pub type DailyLog = BTreeMap<String, HabitValue>;

/// The full log, keyed by `YYYY-MM-DD` date key. Only ever grows.
pub type WeeklyLog = BTreeMap<String, DailyLog>;

impl HabitDefinition {
    /// Validates a submitted value against this habit's kind, clamping
    /// bounded counters to their ceiling. Rejects shape mismatches so a
    /// boolean habit can never hold a count and vice versa.
    pub fn normalize(&self, value: HabitValue) -> Result<HabitValue, String> {
        match (self.kind, value) {
            (HabitKind::Boolean, HabitValue::Flag(_)) => Ok(value),
            (HabitKind::Counter, HabitValue::Count(_)) => Ok(value),
            (HabitKind::BoundedCounter, HabitValue::Count(n)) => {
                let bound = self.bound.unwrap_or(0);
                Ok(HabitValue::Count(n.min(bound)))
            }
            (HabitKind::Boolean, HabitValue::Count(_)) => {
                Err(format!("'{}' expects true or false", self.id))
            }
            (_, HabitValue::Flag(_)) => Err(format!("'{}' expects a count", self.id)),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub date: String,
    pub habit_id: String,
    pub value: HabitValue,
}

#[derive(Debug, Serialize)]
pub struct DayResponse {
    pub date: String,
    pub log: DailyLog,
    pub completion: u8,
}

#[derive(Debug, Serialize)]
pub struct WeekDay {
    pub date: String,
    pub weekday: String,
    pub log: DailyLog,
    pub completion: u8,
}

#[derive(Debug, Serialize)]
pub struct WeekResponse {
    pub start: String,
    pub days: Vec<WeekDay>,
}

#[derive(Debug, Deserialize)]
pub struct InsightRequest {
    pub start: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InsightResponse {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounded(id: &'static str, bound: u32) -> HabitDefinition {
        HabitDefinition {
            id,
            label: id,
            kind: HabitKind::BoundedCounter,
            bound: Some(bound),
            unit: None,
            icon: "Sun",
            description: None,
        }
    }

    #[test]
    fn normalize_clamps_bounded_counter_to_its_ceiling() {
        let habit = bounded("prayers", 5);
        assert_eq!(habit.normalize(HabitValue::Count(9)), Ok(HabitValue::Count(5)));
        assert_eq!(habit.normalize(HabitValue::Count(5)), Ok(HabitValue::Count(5)));
        assert_eq!(habit.normalize(HabitValue::Count(3)), Ok(HabitValue::Count(3)));
    }

    #[test]
    fn normalize_rejects_shape_mismatches() {
        let habit = bounded("prayers", 5);
        assert!(habit.normalize(HabitValue::Flag(true)).is_err());

        let toggle = HabitDefinition {
            kind: HabitKind::Boolean,
            bound: None,
            ..bounded("fast", 0)
        };
        assert!(toggle.normalize(HabitValue::Count(1)).is_err());
        assert_eq!(
            toggle.normalize(HabitValue::Flag(false)),
            Ok(HabitValue::Flag(false))
        );
    }

    #[test]
    fn log_round_trips_through_json_losslessly() {
        let mut log = WeeklyLog::new();
        let mut day = DailyLog::new();
        day.insert("fast".into(), HabitValue::Flag(true));
        day.insert("pages".into(), HabitValue::Count(0));
        log.insert("2026-08-03".into(), day);

        let json = serde_json::to_string(&log).unwrap();
        let parsed: WeeklyLog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, log);
        assert_eq!(json, r#"{"2026-08-03":{"fast":true,"pages":0}}"#);
    }
}
