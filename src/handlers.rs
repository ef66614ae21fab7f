use crate::catalog::MoodCategory;
use crate::errors::AppError;
use crate::models::{
    INTENSITY_MAX, INTENSITY_MIN, MoodEntry, NOTE_MAX_CHARS, NewMoodRequest, NewTodoRequest,
    QuoteResponse, SLIDER_MAX, SongsQuery, SongsResponse, StatsQuery, StatsResponse, TodoItem,
    ToggleTodoRequest, WellnessResponse, WellnessUpdate,
};
use crate::session::SessionId;
use crate::state::AppState;
use crate::stats::{build_stats, most_common_mood, wellness_summary};
use crate::store::{SessionData, StoreError};
use crate::ui::render_index;
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::Html,
};
use chrono::Local;
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = Local::now().date_naive();
    Html(render_index(today, &state.catalog))
}

pub async fn get_catalog(State(state): State<AppState>) -> Json<Vec<MoodCategory>> {
    Json(state.catalog.moods.clone())
}

pub async fn list_moods(
    State(state): State<AppState>,
    session: SessionId,
) -> Json<Vec<MoodEntry>> {
    let sessions = state.sessions.lock().await;
    let entries = sessions
        .get(&session.0)
        .map(|data| data.mood_entries.clone())
        .unwrap_or_default();
    Json(entries)
}

pub async fn add_mood(
    State(state): State<AppState>,
    session: SessionId,
    payload: Result<Json<NewMoodRequest>, JsonRejection>,
) -> Result<Json<MoodEntry>, AppError> {
    let Json(payload) = payload?;
    let mood = state.catalog.find(payload.mood.trim()).ok_or_else(|| {
        warn!("rejected unknown mood {:?}", payload.mood);
        AppError::bad_request(format!("unknown mood '{}'", payload.mood.trim()))
    })?;
    if !(INTENSITY_MIN..=INTENSITY_MAX).contains(&payload.intensity) {
        return Err(AppError::bad_request(format!(
            "intensity must be between {INTENSITY_MIN} and {INTENSITY_MAX}"
        )));
    }
    if let Some(note) = &payload.note {
        if note.chars().count() > NOTE_MAX_CHARS {
            return Err(AppError::bad_request(format!(
                "note must be at most {NOTE_MAX_CHARS} characters"
            )));
        }
    }

    let mut sessions = state.sessions.lock().await;
    let data = sessions.entry(session.0.clone()).or_default();
    let entry = data.add_mood_entry(mood, payload.intensity, payload.note);
    info!(
        session = %session.0,
        mood = %entry.mood,
        intensity = entry.intensity,
        "mood entry saved"
    );

    Ok(Json(entry))
}

pub async fn get_stats(
    State(state): State<AppState>,
    session: SessionId,
    query: Result<Query<StatsQuery>, QueryRejection>,
) -> Result<Json<StatsResponse>, AppError> {
    let Query(query) = query?;
    let limit = query.recent.unwrap_or(state.recent_limit);
    let sessions = state.sessions.lock().await;
    let entries = sessions
        .get(&session.0)
        .map(|data| data.mood_entries.as_slice())
        .unwrap_or_default();
    Ok(Json(build_stats(entries, &state.catalog, limit)))
}

pub async fn list_todos(
    State(state): State<AppState>,
    session: SessionId,
) -> Json<Vec<TodoItem>> {
    let sessions = state.sessions.lock().await;
    let todos = sessions
        .get(&session.0)
        .map(|data| data.todos.clone())
        .unwrap_or_default();
    Json(todos)
}

pub async fn add_todo(
    State(state): State<AppState>,
    session: SessionId,
    payload: Result<Json<NewTodoRequest>, JsonRejection>,
) -> Result<Json<TodoItem>, AppError> {
    let Json(payload) = payload?;
    let mut sessions = state.sessions.lock().await;
    let data = sessions.entry(session.0.clone()).or_default();
    let item = data.add_todo(payload.task)?;
    info!(session = %session.0, count = data.todos.len(), "todo added");
    Ok(Json(item))
}

pub async fn toggle_todo(
    State(state): State<AppState>,
    session: SessionId,
    index: Result<Path<usize>, PathRejection>,
    payload: Result<Json<ToggleTodoRequest>, JsonRejection>,
) -> Result<Json<TodoItem>, AppError> {
    let Path(index) = index?;
    let Json(payload) = payload?;
    let mut sessions = state.sessions.lock().await;
    let data = sessions
        .get_mut(&session.0)
        .ok_or(StoreError::IndexOutOfRange { index, len: 0 })?;
    let item = data.toggle_todo(index, payload.completed)?;
    info!(session = %session.0, index, completed = item.completed, "todo toggled");
    Ok(Json(item))
}

pub async fn remove_todo(
    State(state): State<AppState>,
    session: SessionId,
    index: Result<Path<usize>, PathRejection>,
) -> Result<Json<TodoItem>, AppError> {
    let Path(index) = index?;
    let mut sessions = state.sessions.lock().await;
    let data = sessions
        .get_mut(&session.0)
        .ok_or(StoreError::IndexOutOfRange { index, len: 0 })?;
    let item = data.remove_todo(index)?;
    info!(session = %session.0, index, "todo removed");
    Ok(Json(item))
}

pub async fn get_wellness(
    State(state): State<AppState>,
    session: SessionId,
) -> Json<WellnessResponse> {
    let sessions = state.sessions.lock().await;
    let summary = match sessions.get(&session.0) {
        Some(data) => wellness_summary(data),
        None => wellness_summary(&SessionData::default()),
    };
    Json(summary)
}

pub async fn update_wellness(
    State(state): State<AppState>,
    session: SessionId,
    payload: Result<Json<WellnessUpdate>, JsonRejection>,
) -> Result<Json<WellnessResponse>, AppError> {
    let Json(payload) = payload?;
    for (field, value) in [
        ("hydration_glasses", payload.hydration_glasses),
        ("sleep_hours", payload.sleep_hours),
    ] {
        if value.is_some_and(|value| value > SLIDER_MAX) {
            return Err(AppError::bad_request(format!(
                "{field} must be between 0 and {SLIDER_MAX}"
            )));
        }
    }

    let mut sessions = state.sessions.lock().await;
    let data = sessions.entry(session.0.clone()).or_default();
    if let Some(goal) = payload.daily_goal {
        data.set_daily_goal(goal.trim());
    }
    if let Some(glasses) = payload.hydration_glasses {
        data.set_hydration(glasses);
    }
    if let Some(hours) = payload.sleep_hours {
        data.set_sleep(hours);
    }
    info!(session = %session.0, "wellness updated");

    Ok(Json(wellness_summary(data)))
}

/// Falls back to the session's most common mood, then to the first catalog
/// mood, when no `mood` query is given.
pub async fn get_songs(
    State(state): State<AppState>,
    session: SessionId,
    query: Result<Query<SongsQuery>, QueryRejection>,
) -> Result<Json<SongsResponse>, AppError> {
    let Query(query) = query?;
    let mood = match query.mood.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => state
            .catalog
            .find(name)
            .ok_or_else(|| AppError::not_found(format!("unknown mood '{name}'")))?
            .name
            .clone(),
        _ => {
            let sessions = state.sessions.lock().await;
            let entries = sessions
                .get(&session.0)
                .map(|data| data.mood_entries.as_slice())
                .unwrap_or_default();
            most_common_mood(entries, &state.catalog)
                .map(str::to_string)
                .or_else(|| state.catalog.moods.first().map(|mood| mood.name.clone()))
                .unwrap_or_default()
        }
    };

    let songs = state.catalog.songs_for(&mood).to_vec();
    Ok(Json(SongsResponse { mood, songs }))
}

pub async fn get_quote(State(state): State<AppState>) -> Result<Json<QuoteResponse>, AppError> {
    let date = Local::now().date_naive();
    let quote = state
        .catalog
        .quote_for(date)
        .ok_or_else(|| AppError::not_found("no quotes configured"))?;
    Ok(Json(QuoteResponse {
        date,
        quote: quote.to_string(),
    }))
}

pub async fn export_session(
    State(state): State<AppState>,
    session: SessionId,
) -> Json<SessionData> {
    let sessions = state.sessions.lock().await;
    Json(sessions.get(&session.0).cloned().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MoodCatalog;
    use axum::http::StatusCode;

    fn test_state() -> AppState {
        AppState::new(MoodCatalog::default(), 5)
    }

    #[tokio::test]
    async fn todo_index_errors_leave_unknown_session_absent() {
        let state = test_state();

        let err = toggle_todo(
            State(state.clone()),
            SessionId("ghost".to_string()),
            Ok(Path(0)),
            Ok(Json(ToggleTodoRequest { completed: true })),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err = remove_todo(
            State(state.clone()),
            SessionId("ghost".to_string()),
            Ok(Path(2)),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert!(err.message.contains("0 items"));

        assert!(state.sessions.lock().await.is_empty());
    }

    #[tokio::test]
    async fn songs_default_to_most_common_mood() {
        let state = test_state();
        let session = SessionId("songs".to_string());

        let Json(songs) = get_songs(
            State(state.clone()),
            session.clone(),
            Ok(Query(SongsQuery { mood: None })),
        )
        .await
        .unwrap();
        assert_eq!(songs.mood, "Ecstatic");

        for intensity in [2, 4] {
            let request = NewMoodRequest {
                mood: "Sad".to_string(),
                intensity,
                note: None,
            };
            add_mood(State(state.clone()), session.clone(), Ok(Json(request)))
                .await
                .unwrap();
        }

        let Json(songs) = get_songs(
            State(state.clone()),
            session,
            Ok(Query(SongsQuery { mood: None })),
        )
        .await
        .unwrap();
        assert_eq!(songs.mood, "Sad");
        assert_eq!(songs.songs.len(), 3);
    }
}
