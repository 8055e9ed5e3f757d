use crate::attendance::{AttendanceRecord, Standing};
use crate::errors::AppError;
use crate::messages::random_message;
use crate::models::{
    CalculationResponse, Report, SubjectInput, SubjectView, ValidatedSubject, validate_record,
};
use crate::reports::{CSV_FILE_NAME, build_report, export_csv};
use crate::state::AppState;
use crate::ui::render_dashboard;
use axum::{
    Form, Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect},
};
use tracing::{info, warn};
use uuid::Uuid;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let subjects = state.store.list().await?;
    let report = build_report(&subjects, state.threshold);
    let views: Vec<SubjectView> = subjects
        .iter()
        .map(|subject| SubjectView::new(subject, state.threshold))
        .collect();
    let message = if subjects.is_empty() {
        "Add a subject to see how you're doing."
    } else {
        random_message(i64::from(report.overall_percentage))
    };

    Ok(Html(render_dashboard(&report, &views, state.threshold, message)))
}

pub async fn list_subjects(
    State(state): State<AppState>,
) -> Result<Json<Vec<SubjectView>>, AppError> {
    let subjects = state.store.list().await?;
    Ok(Json(
        subjects
            .iter()
            .map(|subject| SubjectView::new(subject, state.threshold))
            .collect(),
    ))
}

pub async fn get_subject(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubjectView>, AppError> {
    let subject = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| subject_not_found(id))?;
    Ok(Json(SubjectView::new(&subject, state.threshold)))
}

pub async fn create_subject(
    State(state): State<AppState>,
    Json(payload): Json<SubjectInput>,
) -> Result<(StatusCode, Json<SubjectView>), AppError> {
    let view = add_subject(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn update_subject(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SubjectInput>,
) -> Result<Json<SubjectView>, AppError> {
    let view = edit_subject(&state, id, payload).await?;
    Ok(Json(view))
}

pub async fn delete_subject(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    remove_subject(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn reset_subjects(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.store.clear().await?;
    info!("all attendance data has been reset");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn calculate(
    State(state): State<AppState>,
    Json(payload): Json<AttendanceRecord>,
) -> Result<Json<CalculationResponse>, AppError> {
    let record = validate_record(payload).inspect_err(|err| warn!("rejected calculation: {err}"))?;
    let percentage = record.percentage();

    Ok(Json(CalculationResponse {
        attended: record.attended,
        total: record.total,
        percentage,
        standing: Standing::from_percentage(percentage),
        meets_target: state.threshold.is_met_by(record.attended, record.total),
        can_miss: record.missable(state.threshold),
        need_to_attend: record.to_recover(state.threshold),
        message: random_message(i64::from(percentage)).to_string(),
    }))
}

pub async fn get_report(State(state): State<AppState>) -> Result<Json<Report>, AppError> {
    let subjects = state.store.list().await?;
    Ok(Json(build_report(&subjects, state.threshold)))
}

pub async fn download_csv(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let subjects = state.store.list().await?;
    let body = export_csv(&subjects).map_err(AppError::internal)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{CSV_FILE_NAME}\""),
            ),
        ],
        body,
    ))
}

pub async fn form_add_subject(
    State(state): State<AppState>,
    Form(payload): Form<SubjectInput>,
) -> Result<Redirect, AppError> {
    add_subject(&state, payload).await?;
    Ok(Redirect::to("/"))
}

pub async fn form_update_subject(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(payload): Form<SubjectInput>,
) -> Result<Redirect, AppError> {
    edit_subject(&state, id, payload).await?;
    Ok(Redirect::to("/"))
}

pub async fn form_delete_subject(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Redirect, AppError> {
    remove_subject(&state, id).await?;
    Ok(Redirect::to("/"))
}

async fn add_subject(state: &AppState, payload: SubjectInput) -> Result<SubjectView, AppError> {
    let subject = validate_subject(payload)?.into_subject(Uuid::new_v4());
    state.store.put(subject.clone()).await?;
    info!(subject = %subject.id, name = %subject.name, "subject added");
    Ok(SubjectView::new(&subject, state.threshold))
}

async fn edit_subject(
    state: &AppState,
    id: Uuid,
    payload: SubjectInput,
) -> Result<SubjectView, AppError> {
    let subject = validate_subject(payload)?.into_subject(id);
    state
        .store
        .update(subject.clone())
        .await?
        .ok_or_else(|| subject_not_found(id))?;
    info!(subject = %id, name = %subject.name, "subject updated");
    Ok(SubjectView::new(&subject, state.threshold))
}

async fn remove_subject(state: &AppState, id: Uuid) -> Result<(), AppError> {
    let removed = state
        .store
        .delete(id)
        .await?
        .ok_or_else(|| subject_not_found(id))?;
    info!(subject = %id, name = %removed.name, "subject deleted");
    Ok(())
}

fn validate_subject(payload: SubjectInput) -> Result<ValidatedSubject, AppError> {
    payload.validate().map_err(|err| {
        warn!("rejected subject: {err}");
        AppError::from(err)
    })
}

fn subject_not_found(id: Uuid) -> AppError {
    AppError::not_found(format!("subject {id} not found"))
}
