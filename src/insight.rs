use crate::models::{HabitDefinition, HabitKind, WeeklyLog};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::error;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MODEL: &str = "gemini-2.5-flash";

pub const MISSING_KEY_MESSAGE: &str =
    "API Key is missing. Please configure your environment to use AI features.";
pub const EMPTY_RESPONSE_MESSAGE: &str = "Could not generate insights at this time.";
pub const FALLBACK_MESSAGE: &str =
    "An error occurred while connecting to the spiritual guide. Please try again later.";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    thinking_config: ThinkingConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Clone)]
pub struct InsightClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl InsightClient {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.filter(|key| !key.is_empty()),
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        let base_url =
            env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(env::var("GEMINI_API_KEY").ok(), base_url)
    }

    /// Requests a short reflection on the logged habits. Infallible from the
    /// caller's side: a missing credential short-circuits before any network
    /// activity and every service failure collapses into one fixed message.
    pub async fn weekly_insight(
        &self,
        log: &WeeklyLog,
        catalog: &[HabitDefinition],
    ) -> String {
        let Some(api_key) = self.api_key.clone() else {
            return MISSING_KEY_MESSAGE.to_string();
        };

        match self.generate(&api_key, build_prompt(log, catalog)).await {
            Ok(Some(text)) => text,
            Ok(None) => EMPTY_RESPONSE_MESSAGE.to_string(),
            Err(err) => {
                error!("insight request failed: {err}");
                FALLBACK_MESSAGE.to_string()
            }
        }
    }

    async fn generate(
        &self,
        api_key: &str,
        prompt: String,
    ) -> Result<Option<String>, reqwest::Error> {
        let url = format!("{}/v1beta/models/{MODEL}:generateContent", self.base_url);
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            // Plain encouragement, no extended reasoning.
            generation_config: GenerationConfig {
                thinking_config: ThinkingConfig { thinking_budget: 0 },
            },
        };

        let body: GenerateResponse = self
            .http
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<String>()
            })
            .filter(|text| !text.is_empty());

        Ok(text)
    }
}

/// Builds the coaching prompt from the catalog and the full stored history.
/// The whole log goes in, not just the viewed week, so older days still
/// inform the reflection.
pub fn build_prompt(log: &WeeklyLog, catalog: &[HabitDefinition]) -> String {
    let log_summary = log
        .iter()
        .map(|(date_key, day)| {
            let activities = serde_json::to_string(day).unwrap_or_else(|_| "{}".to_string());
            format!("Date: {date_key}, Activities: {activities}")
        })
        .collect::<Vec<_>>()
        .join("\n");

    let habit_list = catalog
        .iter()
        .map(|habit| format!("{} ({})", habit.label, kind_name(habit.kind)))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are a kind, wise, and encouraging Islamic spiritual coach.\n\
         Here is my worship (Ibadah) and habit log for the recent days:\n\
         \n\
         Habits tracked: {habit_list}\n\
         \n\
         My Logs:\n\
         {log_summary}\n\
         \n\
         Please provide a short, warm reflection on my progress.\n\
         1. Acknowledge what I did well.\n\
         2. Gently encourage me on areas where I might have missed (zeros or false).\n\
         3. Give me 1 specific actionable spiritual tip for next week.\n\
         \n\
         Keep the tone motivating, strictly Islamic but universal and inclusive, \
         and concise (under 150 words)."
    )
}

fn kind_name(kind: HabitKind) -> &'static str {
    match kind {
        HabitKind::Boolean => "BOOLEAN",
        HabitKind::Counter => "COUNTER",
        HabitKind::BoundedCounter => "BOUNDED_COUNTER",
    }
}
