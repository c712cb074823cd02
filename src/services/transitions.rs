//! Pure decision layer for the scheduling engine. Each operation has a
//! single function taking the caller's role and the current state and
//! returning either the writes to apply or one of the business error
//! kinds. No I/O happens here; `InterviewService` executes the decisions
//! transactionally.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::application::ApplicationStatus;
use crate::models::interview::{InterviewStatus, InterviewType};
use crate::models::user::UserRole;
use crate::utils::time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleMode {
    Direct,
    SlotOffer,
}

#[derive(Debug, Clone)]
pub struct ScheduleRequest<'a> {
    pub mode: ScheduleMode,
    pub interview_type: InterviewType,
    pub meeting_link: Option<&'a str>,
    pub location: Option<&'a str>,
    pub scheduled_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDecision {
    pub interview_status: InterviewStatus,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub application_status: ApplicationStatus,
}

pub fn schedule(
    caller: UserRole,
    application: Option<ApplicationStatus>,
    has_interview: bool,
    request: &ScheduleRequest<'_>,
) -> Result<ScheduleDecision> {
    if caller != UserRole::Recruiter {
        return Err(Error::PermissionDenied(
            "Only recruiters can schedule interviews".to_string(),
        ));
    }
    let Some(status) = application else {
        return Err(Error::NotFound("Application not found".to_string()));
    };
    if status != ApplicationStatus::Shortlisted {
        return Err(Error::InvalidState(
            "Candidate must be shortlisted".to_string(),
        ));
    }
    if has_interview {
        return Err(Error::InvalidState(
            "Interview already exists".to_string(),
        ));
    }

    match request.interview_type {
        InterviewType::Online if request.meeting_link.is_none() => {
            return Err(Error::InvalidInput(
                "Online interviews require a meeting link".to_string(),
            ));
        }
        InterviewType::Offline if request.location.is_none() => {
            return Err(Error::InvalidInput(
                "Offline interviews require a location".to_string(),
            ));
        }
        _ => {}
    }

    let scheduled_at = match request.mode {
        ScheduleMode::Direct => Some(request.scheduled_at.ok_or_else(|| {
            Error::InvalidInput("Direct scheduling requires a date and time".to_string())
        })?),
        ScheduleMode::SlotOffer => None,
    };

    Ok(ScheduleDecision {
        interview_status: InterviewStatus::Scheduled,
        scheduled_at,
        application_status: ApplicationStatus::Interview,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RescheduleDecision {
    pub interview_status: InterviewStatus,
    pub scheduled_at: DateTime<Utc>,
}

/// `interview` carries the owning application's status when the interview
/// exists, `None` when it does not.
pub fn reschedule(
    caller: UserRole,
    interview: Option<ApplicationStatus>,
    raw_datetime: &str,
) -> Result<RescheduleDecision> {
    if caller != UserRole::Recruiter {
        return Err(Error::PermissionDenied(
            "Only recruiters can reschedule interviews".to_string(),
        ));
    }
    let Some(application_status) = interview else {
        return Err(Error::NotFound("Interview not found".to_string()));
    };
    if application_status != ApplicationStatus::Interview {
        return Err(Error::InvalidState(
            "Only interviews in interview stage can be rescheduled".to_string(),
        ));
    }
    let scheduled_at = time::parse_datetime(raw_datetime)?;

    Ok(RescheduleDecision {
        interview_status: InterviewStatus::Rescheduled,
        scheduled_at,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelDecision {
    pub interview_status: InterviewStatus,
    pub application_status: ApplicationStatus,
}

/// Cancellation is terminal by policy: either party cancelling rejects
/// the application outright.
pub fn cancel(
    caller: UserRole,
    cancelling_party: UserRole,
    interview_found: bool,
) -> Result<CancelDecision> {
    if caller != cancelling_party {
        let msg = match cancelling_party {
            UserRole::Recruiter => "Only recruiters can cancel interviews",
            UserRole::Candidate => "Only candidates can cancel interviews",
        };
        return Err(Error::PermissionDenied(msg.to_string()));
    }
    if !interview_found {
        return Err(Error::NotFound("Interview not found".to_string()));
    }

    Ok(CancelDecision {
        interview_status: InterviewStatus::Cancelled,
        application_status: ApplicationStatus::Rejected,
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotWindow {
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTimes {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Resolves an offered batch into concrete timestamps. The batch replaces
/// any prior batch wholesale; overlapping or out-of-order windows are
/// accepted as given.
pub fn offer_slots(
    caller: UserRole,
    interview_found: bool,
    date: NaiveDate,
    windows: &[SlotWindow],
) -> Result<Vec<SlotTimes>> {
    if caller != UserRole::Recruiter {
        return Err(Error::PermissionDenied(
            "Only recruiters allowed".to_string(),
        ));
    }
    if !interview_found {
        return Err(Error::NotFound("Interview not found".to_string()));
    }
    if windows.is_empty() {
        return Err(Error::InvalidInput(
            "At least one slot is required".to_string(),
        ));
    }

    windows
        .iter()
        .map(|window| {
            Ok(SlotTimes {
                start_time: time::combine_date_time(date, &window.start_time)?,
                end_time: time::combine_date_time(date, &window.end_time)?,
            })
        })
        .collect()
}

pub fn list_slots(caller: UserRole, interview_found: bool) -> Result<()> {
    if caller != UserRole::Candidate {
        return Err(Error::PermissionDenied(
            "Only candidates allowed".to_string(),
        ));
    }
    if !interview_found {
        return Err(Error::NotFound("Interview not found".to_string()));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSnapshot {
    pub slot_start: DateTime<Utc>,
    /// The interview's current `scheduled_at`. Any non-null value means
    /// the interview is already confirmed, whether by direct scheduling
    /// or an earlier selection.
    pub confirmed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectSlotDecision {
    pub scheduled_at: DateTime<Utc>,
}

pub fn select_slot(caller: UserRole, slot: Option<SlotSnapshot>) -> Result<SelectSlotDecision> {
    if caller != UserRole::Candidate {
        return Err(Error::PermissionDenied(
            "Only candidates can select slots".to_string(),
        ));
    }
    let Some(snapshot) = slot else {
        return Err(Error::NotFound("Slot not found".to_string()));
    };
    if snapshot.confirmed_at.is_some() {
        return Err(Error::InvalidState(
            "Interview already confirmed".to_string(),
        ));
    }

    Ok(SelectSlotDecision {
        scheduled_at: snapshot.slot_start,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn direct_request(scheduled_at: Option<DateTime<Utc>>) -> ScheduleRequest<'static> {
        ScheduleRequest {
            mode: ScheduleMode::Direct,
            interview_type: InterviewType::Online,
            meeting_link: Some("https://meet.example/abc"),
            location: None,
            scheduled_at,
        }
    }

    fn ts(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, h, 0, 0).unwrap()
    }

    #[test]
    fn direct_schedule_sets_time_and_moves_application() {
        let decision = schedule(
            UserRole::Recruiter,
            Some(ApplicationStatus::Shortlisted),
            false,
            &direct_request(Some(ts(10))),
        )
        .unwrap();

        assert_eq!(decision.interview_status, InterviewStatus::Scheduled);
        assert_eq!(decision.scheduled_at, Some(ts(10)));
        assert_eq!(decision.application_status, ApplicationStatus::Interview);
    }

    #[test]
    fn slot_offer_schedule_leaves_time_unset() {
        let request = ScheduleRequest {
            mode: ScheduleMode::SlotOffer,
            ..direct_request(None)
        };
        let decision = schedule(
            UserRole::Recruiter,
            Some(ApplicationStatus::Shortlisted),
            false,
            &request,
        )
        .unwrap();
        assert_eq!(decision.scheduled_at, None);
        assert_eq!(decision.application_status, ApplicationStatus::Interview);
    }

    #[test]
    fn schedule_requires_recruiter() {
        let err = schedule(
            UserRole::Candidate,
            Some(ApplicationStatus::Shortlisted),
            false,
            &direct_request(Some(ts(10))),
        )
        .unwrap_err();
        assert!(matches!(err, Error::PermissionDenied(_)));
    }

    #[test]
    fn schedule_requires_existing_application() {
        let err = schedule(UserRole::Recruiter, None, false, &direct_request(Some(ts(10))))
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn schedule_rejects_non_shortlisted_stages() {
        for status in [
            ApplicationStatus::Applied,
            ApplicationStatus::Interview,
            ApplicationStatus::Rejected,
            ApplicationStatus::Offer,
        ] {
            let err = schedule(
                UserRole::Recruiter,
                Some(status),
                false,
                &direct_request(Some(ts(10))),
            )
            .unwrap_err();
            assert!(matches!(err, Error::InvalidState(_)), "status {}", status);
        }
    }

    #[test]
    fn schedule_rejects_duplicate_interview() {
        let err = schedule(
            UserRole::Recruiter,
            Some(ApplicationStatus::Shortlisted),
            true,
            &direct_request(Some(ts(10))),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
    }

    #[test]
    fn schedule_enforces_venue_per_interview_type() {
        let online_missing_link = ScheduleRequest {
            meeting_link: None,
            ..direct_request(Some(ts(10)))
        };
        let err = schedule(
            UserRole::Recruiter,
            Some(ApplicationStatus::Shortlisted),
            false,
            &online_missing_link,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let offline_missing_location = ScheduleRequest {
            interview_type: InterviewType::Offline,
            meeting_link: None,
            location: None,
            ..direct_request(Some(ts(10)))
        };
        let err = schedule(
            UserRole::Recruiter,
            Some(ApplicationStatus::Shortlisted),
            false,
            &offline_missing_location,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        // telephone interviews need neither
        let telephone = ScheduleRequest {
            interview_type: InterviewType::Telephone,
            meeting_link: None,
            location: None,
            ..direct_request(Some(ts(10)))
        };
        assert!(schedule(
            UserRole::Recruiter,
            Some(ApplicationStatus::Shortlisted),
            false,
            &telephone,
        )
        .is_ok());
    }

    #[test]
    fn direct_schedule_requires_timestamp() {
        let err = schedule(
            UserRole::Recruiter,
            Some(ApplicationStatus::Shortlisted),
            false,
            &direct_request(None),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn reschedule_happy_path() {
        let decision = reschedule(
            UserRole::Recruiter,
            Some(ApplicationStatus::Interview),
            "2025-03-11T15:00:00Z",
        )
        .unwrap();
        assert_eq!(decision.interview_status, InterviewStatus::Rescheduled);
        assert_eq!(
            decision.scheduled_at,
            Utc.with_ymd_and_hms(2025, 3, 11, 15, 0, 0).unwrap()
        );
    }

    #[test]
    fn reschedule_outside_interview_stage_is_invalid_state() {
        for status in [
            ApplicationStatus::Applied,
            ApplicationStatus::Shortlisted,
            ApplicationStatus::Rejected,
            ApplicationStatus::Offer,
        ] {
            let err = reschedule(UserRole::Recruiter, Some(status), "2025-03-11T15:00:00Z")
                .unwrap_err();
            assert!(matches!(err, Error::InvalidState(_)), "status {}", status);
        }
    }

    #[test]
    fn reschedule_rejects_unparseable_datetime() {
        let err = reschedule(
            UserRole::Recruiter,
            Some(ApplicationStatus::Interview),
            "not-a-date",
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn reschedule_requires_recruiter_and_interview() {
        assert!(matches!(
            reschedule(
                UserRole::Candidate,
                Some(ApplicationStatus::Interview),
                "2025-03-11T15:00:00Z"
            )
            .unwrap_err(),
            Error::PermissionDenied(_)
        ));
        assert!(matches!(
            reschedule(UserRole::Recruiter, None, "2025-03-11T15:00:00Z").unwrap_err(),
            Error::NotFound(_)
        ));
    }

    #[test]
    fn cancel_rejects_application_for_either_party() {
        for party in [UserRole::Recruiter, UserRole::Candidate] {
            let decision = cancel(party, party, true).unwrap();
            assert_eq!(decision.interview_status, InterviewStatus::Cancelled);
            assert_eq!(decision.application_status, ApplicationStatus::Rejected);
        }
    }

    #[test]
    fn cancel_enforces_matching_role() {
        assert!(matches!(
            cancel(UserRole::Candidate, UserRole::Recruiter, true).unwrap_err(),
            Error::PermissionDenied(_)
        ));
        assert!(matches!(
            cancel(UserRole::Recruiter, UserRole::Candidate, true).unwrap_err(),
            Error::PermissionDenied(_)
        ));
    }

    #[test]
    fn cancel_missing_interview_is_not_found() {
        assert!(matches!(
            cancel(UserRole::Recruiter, UserRole::Recruiter, false).unwrap_err(),
            Error::NotFound(_)
        ));
    }

    fn windows(raw: &[(&str, &str)]) -> Vec<SlotWindow> {
        raw.iter()
            .map(|(s, e)| SlotWindow {
                start_time: s.to_string(),
                end_time: e.to_string(),
            })
            .collect()
    }

    #[test]
    fn offer_slots_combines_date_and_times() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let resolved = offer_slots(
            UserRole::Recruiter,
            true,
            date,
            &windows(&[("09:00", "09:30"), ("10:00", "10:30"), ("11:00", "11:30")]),
        )
        .unwrap();

        assert_eq!(resolved.len(), 3);
        assert_eq!(
            resolved[1].start_time,
            Utc.with_ymd_and_hms(2025, 3, 12, 10, 0, 0).unwrap()
        );
        assert_eq!(
            resolved[1].end_time,
            Utc.with_ymd_and_hms(2025, 3, 12, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn offer_slots_accepts_overlapping_and_inverted_windows() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        // overlap and end-before-start pass through untouched
        let resolved = offer_slots(
            UserRole::Recruiter,
            true,
            date,
            &windows(&[("09:00", "10:00"), ("09:30", "09:00")]),
        )
        .unwrap();
        assert_eq!(resolved.len(), 2);
        assert!(resolved[1].end_time < resolved[1].start_time);
    }

    #[test]
    fn offer_slots_rejects_empty_batch_and_bad_times() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        assert!(matches!(
            offer_slots(UserRole::Recruiter, true, date, &[]).unwrap_err(),
            Error::InvalidInput(_)
        ));
        assert!(matches!(
            offer_slots(
                UserRole::Recruiter,
                true,
                date,
                &windows(&[("9 o'clock", "10:00")])
            )
            .unwrap_err(),
            Error::InvalidInput(_)
        ));
    }

    #[test]
    fn offer_slots_role_and_existence_checks() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let batch = windows(&[("09:00", "09:30")]);
        assert!(matches!(
            offer_slots(UserRole::Candidate, true, date, &batch).unwrap_err(),
            Error::PermissionDenied(_)
        ));
        assert!(matches!(
            offer_slots(UserRole::Recruiter, false, date, &batch).unwrap_err(),
            Error::NotFound(_)
        ));
    }

    #[test]
    fn select_slot_confirms_at_slot_start() {
        let snapshot = SlotSnapshot {
            slot_start: ts(10),
            confirmed_at: None,
        };
        let decision = select_slot(UserRole::Candidate, Some(snapshot)).unwrap();
        assert_eq!(decision.scheduled_at, ts(10));
    }

    #[test]
    fn select_slot_rejected_once_confirmed() {
        // confirmation may come from direct scheduling or a prior selection
        let snapshot = SlotSnapshot {
            slot_start: ts(10),
            confirmed_at: Some(ts(9)),
        };
        let err = select_slot(UserRole::Candidate, Some(snapshot)).unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
    }

    #[test]
    fn select_slot_role_and_existence_checks() {
        let snapshot = SlotSnapshot {
            slot_start: ts(10),
            confirmed_at: None,
        };
        assert!(matches!(
            select_slot(UserRole::Recruiter, Some(snapshot)).unwrap_err(),
            Error::PermissionDenied(_)
        ));
        assert!(matches!(
            select_slot(UserRole::Candidate, None).unwrap_err(),
            Error::NotFound(_)
        ));
    }

    #[test]
    fn list_slots_is_candidate_only() {
        assert!(list_slots(UserRole::Candidate, true).is_ok());
        assert!(matches!(
            list_slots(UserRole::Recruiter, true).unwrap_err(),
            Error::PermissionDenied(_)
        ));
        assert!(matches!(
            list_slots(UserRole::Candidate, false).unwrap_err(),
            Error::NotFound(_)
        ));
    }
}
