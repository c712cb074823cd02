use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::interview_dto::{
        CancelInterviewResponse, OfferSlotsPayload, OfferSlotsResponse,
        RescheduleInterviewPayload, RescheduleInterviewResponse, ScheduleInterviewPayload,
        ScheduleInterviewResponse, SelectSlotResponse, SlotResponse,
    },
    error::Result,
    middleware::auth::AuthUser,
    models::user::UserRole,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/interviews/schedule",
    request_body = ScheduleInterviewPayload,
    responses(
        (status = 201, description = "Interview scheduled", body = Json<ScheduleInterviewResponse>),
        (status = 403, description = "Caller is not a recruiter"),
        (status = 404, description = "Application not found"),
        (status = 409, description = "Application not shortlisted or interview already exists")
    )
)]
#[axum::debug_handler]
pub async fn schedule_interview(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<ScheduleInterviewPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let outcome = state.interview_service.schedule(&auth, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ScheduleInterviewResponse::from(outcome)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/interviews/reschedule/{application_id}",
    params(
        ("application_id" = Uuid, Path, description = "Application ID")
    ),
    request_body = RescheduleInterviewPayload,
    responses(
        (status = 200, description = "Interview rescheduled", body = Json<RescheduleInterviewResponse>),
        (status = 404, description = "Interview not found"),
        (status = 409, description = "Application not in interview stage"),
        (status = 422, description = "Unparseable datetime")
    )
)]
#[axum::debug_handler]
pub async fn reschedule_interview(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(application_id): Path<Uuid>,
    Json(payload): Json<RescheduleInterviewPayload>,
) -> Result<impl IntoResponse> {
    let interview = state
        .interview_service
        .reschedule(&auth, application_id, &payload.new_scheduled_at)
        .await?;
    Ok(Json(RescheduleInterviewResponse {
        message: "Interview rescheduled successfully".to_string(),
        interview_id: interview.id,
        status: interview.status,
        scheduled_at: interview.scheduled_at,
    }))
}

#[utoipa::path(
    put,
    path = "/api/interviews/cancel/{application_id}",
    params(
        ("application_id" = Uuid, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Interview cancelled, application rejected", body = Json<CancelInterviewResponse>),
        (status = 403, description = "Caller is not a recruiter"),
        (status = 404, description = "Interview not found")
    )
)]
#[axum::debug_handler]
pub async fn cancel_interview(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(application_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let outcome = state
        .interview_service
        .cancel(&auth, application_id, UserRole::Recruiter)
        .await?;
    Ok(Json(CancelInterviewResponse::from_outcome(
        outcome,
        "recruiter",
    )))
}

#[utoipa::path(
    put,
    path = "/api/interviews/cancel-by-candidate/{application_id}",
    params(
        ("application_id" = Uuid, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Interview cancelled, application rejected", body = Json<CancelInterviewResponse>),
        (status = 403, description = "Caller is not a candidate"),
        (status = 404, description = "Interview not found")
    )
)]
#[axum::debug_handler]
pub async fn cancel_interview_by_candidate(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(application_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let outcome = state
        .interview_service
        .cancel(&auth, application_id, UserRole::Candidate)
        .await?;
    Ok(Json(CancelInterviewResponse::from_outcome(
        outcome,
        "candidate",
    )))
}

#[utoipa::path(
    post,
    path = "/api/interviews/slots/{interview_id}",
    params(
        ("interview_id" = Uuid, Path, description = "Interview ID")
    ),
    request_body = OfferSlotsPayload,
    responses(
        (status = 200, description = "Slot batch replaced", body = Json<OfferSlotsResponse>),
        (status = 403, description = "Caller is not a recruiter"),
        (status = 404, description = "Interview not found"),
        (status = 422, description = "Empty batch or malformed times")
    )
)]
#[axum::debug_handler]
pub async fn add_interview_slots(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(interview_id): Path<Uuid>,
    Json(payload): Json<OfferSlotsPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let slot_count = state
        .interview_service
        .offer_slots(&auth, interview_id, payload)
        .await?;
    Ok(Json(OfferSlotsResponse {
        message: "Interview slots sent to candidate".to_string(),
        slot_count,
    }))
}

/// The path parameter is the application id: candidates look slots up by
/// the application they are tracking, not by interview id.
#[utoipa::path(
    get,
    path = "/api/interviews/slots/{application_id}",
    params(
        ("application_id" = Uuid, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Offered slots", body = Json<Vec<SlotResponse>>),
        (status = 403, description = "Caller is not a candidate"),
        (status = 404, description = "Interview not found")
    )
)]
#[axum::debug_handler]
pub async fn get_interview_slots(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(application_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let slots = state
        .interview_service
        .list_slots(&auth, application_id)
        .await?;
    let items: Vec<SlotResponse> = slots.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    put,
    path = "/api/interviews/slots/select/{slot_id}",
    params(
        ("slot_id" = Uuid, Path, description = "Slot ID")
    ),
    responses(
        (status = 200, description = "Slot confirmed", body = Json<SelectSlotResponse>),
        (status = 403, description = "Caller is not a candidate"),
        (status = 404, description = "Slot not found"),
        (status = 409, description = "Interview already confirmed")
    )
)]
#[axum::debug_handler]
pub async fn select_interview_slot(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(slot_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let interview = state.interview_service.select_slot(&auth, slot_id).await?;
    Ok(Json(SelectSlotResponse {
        message: "Interview slot confirmed successfully".to_string(),
        interview_id: interview.id,
        status: interview.status,
        scheduled_at: interview.scheduled_at,
    }))
}
