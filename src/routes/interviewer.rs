use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::interviewer_dto::{CreateInterviewerPayload, InterviewerResponse},
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/interviewers",
    responses(
        (status = 200, description = "All interviewers", body = Json<Vec<InterviewerResponse>>)
    )
)]
#[axum::debug_handler]
pub async fn list_interviewers(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let interviewers = state.interviewer_service.list().await?;
    let items: Vec<InterviewerResponse> = interviewers.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/interviewers",
    request_body = CreateInterviewerPayload,
    responses(
        (status = 201, description = "Interviewer created", body = Json<InterviewerResponse>),
        (status = 409, description = "Email already registered")
    )
)]
#[axum::debug_handler]
pub async fn create_interviewer(
    State(state): State<AppState>,
    Json(payload): Json<CreateInterviewerPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let interviewer = state.interviewer_service.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(InterviewerResponse::from(interviewer)),
    ))
}
