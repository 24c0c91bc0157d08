//! Route handlers and typed request/response bodies.
//!
//! Every handler parses its payload at the boundary; malformed or missing
//! fields never reach the service.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use log::debug;
use mindfuel_core::{insights, Insights, NewHabit, NewMood, Stats, Timeline};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, state::AppState};

pub const WELCOME_MESSAGE: &str = "Welcome to the MindFuel API!";
pub const HABIT_LOGGED_MESSAGE: &str = "Habit logged.";
pub const MOOD_LOGGED_MESSAGE: &str = "Mood logged.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// Body of `POST /habit`.
#[derive(Debug, Clone, Deserialize)]
pub struct LogHabitRequest {
    pub name: String,
    #[serde(default)]
    pub tag: Option<String>,
}

impl From<LogHabitRequest> for NewHabit {
    fn from(request: LogHabitRequest) -> Self {
        NewHabit {
            name: request.name,
            tag: request.tag,
            timestamp: None,
        }
    }
}

/// Body of `POST /mood`.
#[derive(Debug, Clone, Deserialize)]
pub struct LogMoodRequest {
    pub score: i64,
    #[serde(default)]
    pub energy: Option<i64>,
    #[serde(default)]
    pub note: Option<String>,
}

impl From<LogMoodRequest> for NewMood {
    fn from(request: LogMoodRequest) -> Self {
        NewMood {
            score: request.score,
            energy: request.energy,
            note: request.note,
            timestamp: None,
        }
    }
}

pub async fn index_handler() -> Json<MessageResponse> {
    MessageResponse::new(WELCOME_MESSAGE)
}

pub async fn habit_handler(
    State(state): State<AppState>,
    payload: Result<Json<LogHabitRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("event=payload_rejected module=api route=habit status={}", rejection.status());
        ApiError::from(rejection)
    })?;

    let habit = NewHabit::from(request);
    state
        .with_service(move |service| service.log_habit(&habit))
        .await?;

    Ok((StatusCode::CREATED, MessageResponse::new(HABIT_LOGGED_MESSAGE)))
}

pub async fn mood_handler(
    State(state): State<AppState>,
    payload: Result<Json<LogMoodRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("event=payload_rejected module=api route=mood status={}", rejection.status());
        ApiError::from(rejection)
    })?;

    let mood = NewMood::from(request);
    state
        .with_service(move |service| service.log_mood(&mood))
        .await?;

    Ok((StatusCode::CREATED, MessageResponse::new(MOOD_LOGGED_MESSAGE)))
}

pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<Stats>, ApiError> {
    let stats = state.with_service(|service| service.stats()).await?;
    Ok(Json(stats))
}

pub async fn timeline_handler(State(state): State<AppState>) -> Result<Json<Timeline>, ApiError> {
    let timeline = state.with_service(|service| service.timeline()).await?;
    Ok(Json(timeline))
}

pub async fn insights_handler() -> Json<Insights> {
    Json(insights())
}
