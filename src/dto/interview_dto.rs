use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::application::ApplicationStatus;
use crate::models::interview::{InterviewStatus, InterviewType};
use crate::models::interview_slot::InterviewSlot;
use crate::services::interview_service::{CancelledInterview, ScheduledInterview};
use crate::services::transitions::{ScheduleMode, SlotWindow};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScheduleInterviewPayload {
    pub application_id: Uuid,
    pub schedule_mode: ScheduleMode,
    pub interview_type: InterviewType,
    #[validate(length(min = 1))]
    pub meeting_link: Option<String>,
    #[validate(length(min = 1))]
    pub location: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub interviewer_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleInterviewPayload {
    /// ISO datetime string, parsed by the engine. A malformed value
    /// surfaces as invalid input, not a body rejection.
    pub new_scheduled_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OfferSlotsPayload {
    pub interview_date: NaiveDate,
    pub slots: Vec<SlotWindow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInterviewResponse {
    pub message: String,
    pub interview_id: Uuid,
    pub status: InterviewStatus,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub application_status: ApplicationStatus,
}

impl From<ScheduledInterview> for ScheduleInterviewResponse {
    fn from(value: ScheduledInterview) -> Self {
        Self {
            message: "Interview scheduled successfully".to_string(),
            interview_id: value.interview.id,
            status: value.interview.status,
            scheduled_at: value.interview.scheduled_at,
            application_status: value.application_status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleInterviewResponse {
    pub message: String,
    pub interview_id: Uuid,
    pub status: InterviewStatus,
    pub scheduled_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelInterviewResponse {
    pub message: String,
    pub interview_id: Uuid,
    pub status: InterviewStatus,
    pub new_status: ApplicationStatus,
}

impl CancelInterviewResponse {
    pub fn from_outcome(value: CancelledInterview, cancelled_by: &str) -> Self {
        Self {
            message: format!("Interview cancelled by {}", cancelled_by),
            interview_id: value.interview.id,
            status: value.interview.status,
            new_status: value.application_status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferSlotsResponse {
    pub message: String,
    pub slot_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotResponse {
    pub slot_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub is_selected: bool,
}

impl From<InterviewSlot> for SlotResponse {
    fn from(value: InterviewSlot) -> Self {
        Self {
            slot_id: value.id,
            start_time: value.start_time,
            end_time: value.end_time,
            is_selected: value.is_selected,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectSlotResponse {
    pub message: String,
    pub interview_id: Uuid,
    pub status: InterviewStatus,
    pub scheduled_at: Option<DateTime<Utc>>,
}
