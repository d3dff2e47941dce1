use crate::errors::AppError;
use crate::models::{
    CalendarDayScore, CatalogResponse, DashboardResponse, HistoryQuery, Rankings, SaveLogForm,
    SaveLogRequest, SelectDateRequest, TodayResponse, ToggleRequest,
};
use crate::session::SaveLog;
use crate::state::AppState;
use crate::stats::HISTORY_DAYS;
use crate::store::{parse_score, score_from_json};
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Form, Json,
};
use chrono::NaiveDate;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_index(&session))
}

pub async fn get_today(State(state): State<AppState>) -> Json<TodayResponse> {
    let session = state.session.lock().await;
    Json(session.today())
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let session = state.session.lock().await;
    Json(DashboardResponse {
        today: session.today(),
        rankings: session.rankings().clone(),
        history: session.recent_history(),
    })
}

pub async fn get_rankings(State(state): State<AppState>) -> Json<Rankings> {
    let session = state.session.lock().await;
    Json(session.rankings().clone())
}

pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<Vec<CalendarDayScore>> {
    let limit = query.limit.unwrap_or(HISTORY_DAYS);
    let session = state.session.lock().await;
    Json(session.recent_history_with_limit(limit))
}

pub async fn get_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    let session = state.session.lock().await;
    let catalog = session.catalog();
    Json(CatalogResponse {
        tasks: catalog.list().to_vec(),
        positive_presets: catalog.positive_presets().to_vec(),
        negative_presets: catalog.negative_presets().to_vec(),
    })
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<TodayResponse>, AppError> {
    let today = apply_toggle(&state, &payload.task_id).await?;
    Ok(Json(today))
}

pub async fn toggle_task_form(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Redirect, AppError> {
    apply_toggle(&state, &task_id).await?;
    Ok(Redirect::to("/"))
}

pub async fn save_log(
    State(state): State<AppState>,
    Json(payload): Json<SaveLogRequest>,
) -> Json<TodayResponse> {
    let input = SaveLog {
        score: score_from_json(&payload.score),
        positives: payload.positives,
        negatives: payload.negatives,
    };
    Json(apply_save(&state, input).await)
}

pub async fn save_log_form(
    State(state): State<AppState>,
    Form(payload): Form<SaveLogForm>,
) -> Redirect {
    let input = SaveLog {
        score: parse_score(&payload.score),
        positives: split_tags(&payload.positives),
        negatives: split_tags(&payload.negatives),
    };
    apply_save(&state, input).await;
    Redirect::to("/")
}

pub async fn select_date(
    State(state): State<AppState>,
    Json(payload): Json<SelectDateRequest>,
) -> Result<Json<TodayResponse>, AppError> {
    let date = NaiveDate::parse_from_str(payload.date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("date must be YYYY-MM-DD"))?;

    let mut session = state.session.lock().await;
    session.set_selected_date(date.format("%Y-%m-%d").to_string());
    info!(date = %session.selected_date(), "selected date changed");
    Ok(Json(session.today()))
}

async fn apply_toggle(state: &AppState, task_id: &str) -> Result<TodayResponse, AppError> {
    let task_id = task_id.trim();
    if task_id.is_empty() {
        return Err(AppError::bad_request("task_id must not be empty"));
    }

    let mut session = state.session.lock().await;
    session.toggle_task(task_id);
    info!(date = %session.selected_date(), task_id, "task toggled");
    Ok(session.today())
}

async fn apply_save(state: &AppState, input: SaveLog) -> TodayResponse {
    let mut session = state.session.lock().await;
    let score = input.score;
    session.save_daily_log(input);
    info!(date = %session.selected_date(), score, "daily log saved");
    session.today()
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(|tag| tag.to_string()).collect()
}
