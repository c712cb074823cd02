//! Interview scheduling engine. Decisions come from
//! [`crate::services::transitions`]; this module executes them inside one
//! transaction per operation (with conditional predicates mirroring the
//! preconditions, so concurrent callers serialize on the interview row)
//! and then dispatches notifications and mail. Dispatch runs strictly
//! after commit and never fails the operation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::middleware::auth::AuthUser;
use crate::models::application::ApplicationStatus;
use crate::models::interview::{Interview, InterviewType};
use crate::models::interview_slot::InterviewSlot;
use crate::models::interviewer::Interviewer;
use crate::models::user::UserRole;
use crate::services::blob::BlobStore;
use crate::services::mailer::MailDispatcher;
use crate::services::notifier::NotificationSink;
use crate::services::transitions::{self, ScheduleRequest, SlotSnapshot};
use crate::utils::calendar::{generate_interview_ics, DEFAULT_DURATION_MINUTES};
use crate::utils::email_templates;
use crate::utils::time::human_datetime;

use crate::dto::interview_dto::{OfferSlotsPayload, ScheduleInterviewPayload};

#[derive(Debug, Clone)]
pub struct ScheduledInterview {
    pub interview: Interview,
    pub application_status: ApplicationStatus,
}

#[derive(Debug, Clone)]
pub struct CancelledInterview {
    pub interview: Interview,
    pub application_status: ApplicationStatus,
}

#[derive(Debug, Clone, FromRow)]
struct ApplicationContext {
    application_id: Uuid,
    application_status: ApplicationStatus,
    candidate_id: Uuid,
    candidate_name: String,
    candidate_email: String,
    job_title: String,
    resume_key: Option<String>,
    resume_filename: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
struct InterviewContext {
    interview_id: Uuid,
    interview_type: InterviewType,
    meeting_link: Option<String>,
    location: Option<String>,
    scheduled_at: Option<DateTime<Utc>>,
    application_status: ApplicationStatus,
    candidate_id: Uuid,
    candidate_name: String,
    candidate_email: String,
    job_title: String,
    resume_key: Option<String>,
    resume_filename: Option<String>,
}

impl InterviewContext {
    fn venue(&self) -> &str {
        self.meeting_link
            .as_deref()
            .or(self.location.as_deref())
            .unwrap_or("To be announced")
    }

    fn resume(&self) -> Option<(&str, &str)> {
        self.resume_key
            .as_deref()
            .map(|key| (key, self.resume_filename.as_deref().unwrap_or("resume.pdf")))
    }
}

const APPLICATION_CONTEXT_SQL: &str = r#"
SELECT a.id AS application_id, a.status AS application_status, a.candidate_id,
       a.resume_key, a.resume_filename,
       u.full_name AS candidate_name, u.email AS candidate_email,
       j.title AS job_title
FROM applications a
JOIN users u ON u.id = a.candidate_id
JOIN jobs j ON j.id = a.job_id
WHERE a.id = $1
"#;

const INTERVIEW_CONTEXT_SQL: &str = r#"
SELECT i.id AS interview_id, i.interview_type, i.meeting_link,
       i.location, i.scheduled_at,
       a.status AS application_status, a.candidate_id, a.resume_key, a.resume_filename,
       u.full_name AS candidate_name, u.email AS candidate_email,
       j.title AS job_title
FROM interviews i
JOIN applications a ON a.id = i.application_id
JOIN users u ON u.id = a.candidate_id
JOIN jobs j ON j.id = a.job_id
"#;

const INTERVIEW_RETURNING: &str =
    "id, application_id, interview_type, meeting_link, location, scheduled_at, status, created_at, updated_at";

const INTERVIEW_RETURNING_QUALIFIED: &str =
    "i.id, i.application_id, i.interview_type, i.meeting_link, i.location, i.scheduled_at, i.status, i.created_at, i.updated_at";

#[derive(Clone)]
pub struct InterviewService {
    pool: PgPool,
    notifier: Arc<dyn NotificationSink>,
    mailer: Arc<dyn MailDispatcher>,
    blobs: Arc<dyn BlobStore>,
    portal_url: String,
}

impl InterviewService {
    pub fn new(
        pool: PgPool,
        notifier: Arc<dyn NotificationSink>,
        mailer: Arc<dyn MailDispatcher>,
        blobs: Arc<dyn BlobStore>,
        portal_url: String,
    ) -> Self {
        Self {
            pool,
            notifier,
            mailer,
            blobs,
            portal_url,
        }
    }

    pub async fn schedule(
        &self,
        caller: &AuthUser,
        payload: ScheduleInterviewPayload,
    ) -> Result<ScheduledInterview> {
        let application = sqlx::query_as::<_, ApplicationContext>(APPLICATION_CONTEXT_SQL)
            .bind(payload.application_id)
            .fetch_optional(&self.pool)
            .await?;
        let has_interview = match &application {
            Some(ctx) => sqlx::query_scalar::<_, Uuid>(
                "SELECT id FROM interviews WHERE application_id = $1",
            )
            .bind(ctx.application_id)
            .fetch_optional(&self.pool)
            .await?
            .is_some(),
            None => false,
        };

        let request = ScheduleRequest {
            mode: payload.schedule_mode,
            interview_type: payload.interview_type,
            meeting_link: payload.meeting_link.as_deref(),
            location: payload.location.as_deref(),
            scheduled_at: payload.scheduled_at,
        };
        let decision = transitions::schedule(
            caller.role,
            application.as_ref().map(|ctx| ctx.application_status),
            has_interview,
            &request,
        )?;
        let application = application
            .ok_or_else(|| Error::NotFound("Application not found".to_string()))?;

        let interviewers = self.resolve_interviewers(&payload.interviewer_ids).await?;

        let mut tx = self.pool.begin().await?;
        let moved = sqlx::query(
            "UPDATE applications SET status = $1, updated_at = NOW() WHERE id = $2 AND status = $3",
        )
        .bind(decision.application_status)
        .bind(application.application_id)
        .bind(ApplicationStatus::Shortlisted)
        .execute(&mut *tx)
        .await?;
        if moved.rows_affected() == 0 {
            return Err(Error::InvalidState(
                "Candidate must be shortlisted".to_string(),
            ));
        }

        let interview = sqlx::query_as::<_, Interview>(&format!(
            "INSERT INTO interviews (application_id, interview_type, meeting_link, location, scheduled_at, status) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            INTERVIEW_RETURNING
        ))
        .bind(application.application_id)
        .bind(payload.interview_type)
        .bind(payload.meeting_link.as_deref())
        .bind(payload.location.as_deref())
        .bind(decision.scheduled_at)
        .bind(decision.interview_status)
        .fetch_one(&mut *tx)
        .await
        .map_err(duplicate_interview)?;

        for interviewer in &interviewers {
            sqlx::query(
                "INSERT INTO interview_interviewers (interview_id, interviewer_id) VALUES ($1, $2)",
            )
            .bind(interview.id)
            .bind(interviewer.id)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        self.notify_quietly(
            application.candidate_id,
            "Interview Scheduled",
            &format!(
                "Your interview for '{}' has been scheduled.",
                application.job_title
            ),
        )
        .await;

        if let Some(scheduled_at) = interview.scheduled_at {
            let (subject, body) = email_templates::interview_scheduled(
                &application.candidate_name,
                &application.job_title,
                interview.interview_type.label(),
                scheduled_at,
                interview.venue(),
            );
            let ics = generate_interview_ics(
                &format!("Interview – {}", application.job_title),
                &format!(
                    "Interview Type: {}\nMeeting: {}",
                    interview.interview_type.label(),
                    interview.venue()
                ),
                scheduled_at,
                DEFAULT_DURATION_MINUTES,
            );
            let resume = application
                .resume_key
                .as_deref()
                .map(|key| (key, application.resume_filename.as_deref().unwrap_or("resume.pdf")));
            send_interview_bundle(
                self.mailer.as_ref(),
                self.blobs.as_ref(),
                &application.candidate_email,
                &interviewer_emails(&interviewers),
                &subject,
                &body,
                &ics,
                resume,
            )
            .await;
        }

        Ok(ScheduledInterview {
            interview,
            application_status: decision.application_status,
        })
    }

    pub async fn reschedule(
        &self,
        caller: &AuthUser,
        application_id: Uuid,
        new_scheduled_at: &str,
    ) -> Result<Interview> {
        let context = self.interview_context_by_application(application_id).await?;
        let decision = transitions::reschedule(
            caller.role,
            context.as_ref().map(|ctx| ctx.application_status),
            new_scheduled_at,
        )?;
        let context =
            context.ok_or_else(|| Error::NotFound("Interview not found".to_string()))?;

        let interview = sqlx::query_as::<_, Interview>(&format!(
            "UPDATE interviews i SET scheduled_at = $1, status = $2, updated_at = NOW() \
             FROM applications a \
             WHERE i.application_id = $3 AND a.id = i.application_id AND a.status = $4 \
             RETURNING {}",
            INTERVIEW_RETURNING_QUALIFIED
        ))
        .bind(decision.scheduled_at)
        .bind(decision.interview_status)
        .bind(application_id)
        .bind(ApplicationStatus::Interview)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            Error::InvalidState(
                "Only interviews in interview stage can be rescheduled".to_string(),
            )
        })?;

        self.notify_quietly(
            context.candidate_id,
            "Interview Rescheduled",
            &format!(
                "Your interview for '{}' has been rescheduled to {}.",
                context.job_title,
                human_datetime(decision.scheduled_at)
            ),
        )
        .await;

        let (subject, body) = email_templates::interview_rescheduled(
            &context.candidate_name,
            &context.job_title,
            context.interview_type.label(),
            decision.scheduled_at,
            context.meeting_link.as_deref(),
            context.location.as_deref(),
        );
        let ics = generate_interview_ics(
            &format!("Interview – {}", context.job_title),
            "Interview rescheduled",
            decision.scheduled_at,
            DEFAULT_DURATION_MINUTES,
        );
        let interviewers = self.interviewers_for(context.interview_id).await;
        send_interview_bundle(
            self.mailer.as_ref(),
            self.blobs.as_ref(),
            &context.candidate_email,
            &interviewer_emails(&interviewers),
            &subject,
            &body,
            &ics,
            None,
        )
        .await;

        Ok(interview)
    }

    pub async fn cancel(
        &self,
        caller: &AuthUser,
        application_id: Uuid,
        cancelling_party: UserRole,
    ) -> Result<CancelledInterview> {
        let context = self.interview_context_by_application(application_id).await?;
        let decision = transitions::cancel(caller.role, cancelling_party, context.is_some())?;
        let context =
            context.ok_or_else(|| Error::NotFound("Interview not found".to_string()))?;

        let mut tx = self.pool.begin().await?;
        let interview = sqlx::query_as::<_, Interview>(&format!(
            "UPDATE interviews SET status = $1, scheduled_at = NULL, updated_at = NOW() \
             WHERE application_id = $2 RETURNING {}",
            INTERVIEW_RETURNING
        ))
        .bind(decision.interview_status)
        .bind(application_id)
        .fetch_one(&mut *tx)
        .await?;
        sqlx::query("UPDATE applications SET status = $1, updated_at = NOW() WHERE id = $2")
            .bind(decision.application_status)
            .bind(application_id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        self.notify_quietly(
            context.candidate_id,
            "Interview Cancelled",
            &format!(
                "Your interview was cancelled by the {}. Your application has been marked as rejected.",
                cancelling_party
            ),
        )
        .await;

        Ok(CancelledInterview {
            interview,
            application_status: decision.application_status,
        })
    }

    /// Replaces the interview's slot batch wholesale. Prior slots (and any
    /// prior selection flag) are discarded, never merged.
    pub async fn offer_slots(
        &self,
        caller: &AuthUser,
        interview_id: Uuid,
        payload: OfferSlotsPayload,
    ) -> Result<usize> {
        let context = self.interview_context_by_id(interview_id).await?;
        let slots = transitions::offer_slots(
            caller.role,
            context.is_some(),
            payload.interview_date,
            &payload.slots,
        )?;
        let context =
            context.ok_or_else(|| Error::NotFound("Interview not found".to_string()))?;

        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM interview_slots WHERE interview_id = $1")
            .bind(interview_id)
            .execute(&mut *tx)
            .await?;
        for slot in &slots {
            sqlx::query(
                "INSERT INTO interview_slots (interview_id, start_time, end_time) VALUES ($1, $2, $3)",
            )
            .bind(interview_id)
            .bind(slot.start_time)
            .bind(slot.end_time)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        self.notify_quietly(
            context.candidate_id,
            "Interview Slots Shared",
            &format!(
                "The recruiter has shared interview time slots for '{}'. Please select one.",
                context.job_title
            ),
        )
        .await;

        let (subject, body) = email_templates::interview_slots_shared(
            &context.candidate_name,
            &context.job_title,
            context.interview_type.label(),
            &self.portal_url,
        );
        if let Err(err) = self
            .mailer
            .send(&context.candidate_email, &subject, &body)
            .await
        {
            tracing::warn!(error = %err, "failed to send slot selection email");
        }

        Ok(slots.len())
    }

    pub async fn list_slots(
        &self,
        caller: &AuthUser,
        application_id: Uuid,
    ) -> Result<Vec<InterviewSlot>> {
        let interview_id = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM interviews WHERE application_id = $1",
        )
        .bind(application_id)
        .fetch_optional(&self.pool)
        .await?;
        transitions::list_slots(caller.role, interview_id.is_some())?;
        let interview_id =
            interview_id.ok_or_else(|| Error::NotFound("Interview not found".to_string()))?;

        let slots = sqlx::query_as::<_, InterviewSlot>(
            "SELECT id, interview_id, start_time, end_time, is_selected, created_at \
             FROM interview_slots WHERE interview_id = $1 ORDER BY start_time ASC",
        )
        .bind(interview_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(slots)
    }

    pub async fn select_slot(&self, caller: &AuthUser, slot_id: Uuid) -> Result<Interview> {
        let slot = sqlx::query_as::<_, InterviewSlot>(
            "SELECT id, interview_id, start_time, end_time, is_selected, created_at \
             FROM interview_slots WHERE id = $1",
        )
        .bind(slot_id)
        .fetch_optional(&self.pool)
        .await?;
        let context = match &slot {
            Some(slot) => self.interview_context_by_id(slot.interview_id).await?,
            None => None,
        };

        let snapshot = match (&slot, &context) {
            (Some(slot), Some(ctx)) => Some(SlotSnapshot {
                slot_start: slot.start_time,
                confirmed_at: ctx.scheduled_at,
            }),
            _ => None,
        };
        let decision = transitions::select_slot(caller.role, snapshot)?;
        let slot = slot.ok_or_else(|| Error::NotFound("Slot not found".to_string()))?;
        let context =
            context.ok_or_else(|| Error::NotFound("Slot not found".to_string()))?;

        // The conditional claim on the interview row serializes concurrent
        // selections: the second caller sees zero rows and fails.
        let mut tx = self.pool.begin().await?;
        let claimed = sqlx::query(
            "UPDATE interviews SET scheduled_at = $1, updated_at = NOW() \
             WHERE id = $2 AND scheduled_at IS NULL",
        )
        .bind(decision.scheduled_at)
        .bind(slot.interview_id)
        .execute(&mut *tx)
        .await?;
        if claimed.rows_affected() == 0 {
            return Err(Error::InvalidState(
                "Interview already confirmed".to_string(),
            ));
        }
        sqlx::query(
            "UPDATE interview_slots SET is_selected = FALSE WHERE interview_id = $1 AND is_selected",
        )
        .bind(slot.interview_id)
        .execute(&mut *tx)
        .await?;
        sqlx::query("UPDATE interview_slots SET is_selected = TRUE WHERE id = $1")
            .bind(slot.id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        self.notify_quietly(
            context.candidate_id,
            "Interview Confirmed",
            &format!(
                "Your interview slot for '{}' has been confirmed for {}.",
                context.job_title,
                human_datetime(decision.scheduled_at)
            ),
        )
        .await;

        let (subject, body) = email_templates::interview_slot_confirmed(
            &context.candidate_name,
            &context.job_title,
            context.interview_type.label(),
            decision.scheduled_at,
        );
        let ics = generate_interview_ics(
            &format!("Interview – {}", context.job_title),
            &format!(
                "Interview Type: {}\nMeeting: {}",
                context.interview_type.label(),
                context.venue()
            ),
            decision.scheduled_at,
            DEFAULT_DURATION_MINUTES,
        );
        let interviewers = self.interviewers_for(context.interview_id).await;
        send_interview_bundle(
            self.mailer.as_ref(),
            self.blobs.as_ref(),
            &context.candidate_email,
            &interviewer_emails(&interviewers),
            &subject,
            &body,
            &ics,
            context.resume(),
        )
        .await;

        let interview = sqlx::query_as::<_, Interview>(&format!(
            "SELECT {} FROM interviews WHERE id = $1",
            INTERVIEW_RETURNING
        ))
        .bind(slot.interview_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(interview)
    }

    async fn interview_context_by_application(
        &self,
        application_id: Uuid,
    ) -> Result<Option<InterviewContext>> {
        let sql = format!("{} WHERE i.application_id = $1", INTERVIEW_CONTEXT_SQL);
        Ok(sqlx::query_as::<_, InterviewContext>(&sql)
            .bind(application_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn interview_context_by_id(
        &self,
        interview_id: Uuid,
    ) -> Result<Option<InterviewContext>> {
        let sql = format!("{} WHERE i.id = $1", INTERVIEW_CONTEXT_SQL);
        Ok(sqlx::query_as::<_, InterviewContext>(&sql)
            .bind(interview_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn resolve_interviewers(&self, ids: &[Uuid]) -> Result<Vec<Interviewer>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let interviewers = sqlx::query_as::<_, Interviewer>(
            "SELECT id, name, email, created_at FROM interviewers WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        let mut unique = ids.to_vec();
        unique.sort_unstable();
        unique.dedup();
        if interviewers.len() != unique.len() {
            return Err(Error::NotFound("Interviewer not found".to_string()));
        }
        Ok(interviewers)
    }

    /// Interviewer rows for dispatch only; a read failure degrades to an
    /// empty recipient list rather than failing the committed operation.
    async fn interviewers_for(&self, interview_id: Uuid) -> Vec<Interviewer> {
        let result = sqlx::query_as::<_, Interviewer>(
            "SELECT iv.id, iv.name, iv.email, iv.created_at \
             FROM interviewers iv \
             JOIN interview_interviewers ii ON ii.interviewer_id = iv.id \
             WHERE ii.interview_id = $1",
        )
        .bind(interview_id)
        .fetch_all(&self.pool)
        .await;
        match result {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!(error = %err, %interview_id, "failed to load interviewers for mail dispatch");
                Vec::new()
            }
        }
    }

    async fn notify_quietly(&self, user_id: Uuid, title: &str, message: &str) {
        if let Err(err) = self.notifier.notify(user_id, title, message).await {
            tracing::warn!(error = %err, %user_id, "failed to record notification");
        }
    }
}

fn interviewer_emails(interviewers: &[Interviewer]) -> Vec<String> {
    interviewers.iter().map(|iv| iv.email.clone()).collect()
}

fn duplicate_interview(err: sqlx::Error) -> Error {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return Error::InvalidState("Interview already exists".to_string());
        }
    }
    err.into()
}

/// Mails the calendar invite to the candidate and every interviewer. The
/// resume, when present, goes to the candidate's copy only and is fetched
/// here, post-commit. Delivery and fetch failures are logged and
/// swallowed.
async fn send_interview_bundle(
    mailer: &dyn MailDispatcher,
    blobs: &dyn BlobStore,
    candidate_email: &str,
    interviewer_emails: &[String],
    subject: &str,
    body: &str,
    ics: &str,
    resume: Option<(&str, &str)>,
) {
    if let Some((key, filename)) = resume {
        match blobs.fetch_bytes(key).await {
            Ok(bytes) => {
                if let Err(err) = mailer
                    .send_with_attachment(candidate_email, subject, body, &bytes, filename)
                    .await
                {
                    tracing::warn!(error = %err, "failed to send resume copy to candidate");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, key, "failed to fetch resume for attachment");
            }
        }
    }

    if let Err(err) = mailer
        .send_with_attachment(candidate_email, subject, body, ics.as_bytes(), "interview.ics")
        .await
    {
        tracing::warn!(error = %err, "failed to send calendar invite to candidate");
    }

    for email in interviewer_emails {
        if let Err(err) = mailer
            .send_with_attachment(email, subject, body, ics.as_bytes(), "interview.ics")
            .await
        {
            tracing::warn!(error = %err, to = %email, "failed to send calendar invite to interviewer");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::blob::MockBlobStore;
    use crate::services::mailer::MockMailDispatcher;
    use bytes::Bytes;

    #[tokio::test]
    async fn bundle_attaches_resume_to_candidate_copy_only() {
        let mut mailer = MockMailDispatcher::new();
        let mut blobs = MockBlobStore::new();

        blobs
            .expect_fetch_bytes()
            .withf(|key| key == "resumes/ada.pdf")
            .times(1)
            .returning(|_| Ok(Bytes::from_static(b"%PDF-1.4")));

        // candidate resume copy
        mailer
            .expect_send_with_attachment()
            .withf(|to, _, _, _, filename| to == "ada@example.com" && filename == "ada.pdf")
            .times(1)
            .returning(|_, _, _, _, _| Ok(()));
        // calendar invites: candidate + two interviewers
        mailer
            .expect_send_with_attachment()
            .withf(|_, _, _, _, filename| filename == "interview.ics")
            .times(3)
            .returning(|_, _, _, _, _| Ok(()));

        send_interview_bundle(
            &mailer,
            &blobs,
            "ada@example.com",
            &["ivan@example.com".to_string(), "mira@example.com".to_string()],
            "Interview Scheduled – Backend Engineer",
            "body",
            "BEGIN:VCALENDAR",
            Some(("resumes/ada.pdf", "ada.pdf")),
        )
        .await;
    }

    #[tokio::test]
    async fn bundle_survives_blob_store_outage() {
        let mut mailer = MockMailDispatcher::new();
        let mut blobs = MockBlobStore::new();

        blobs
            .expect_fetch_bytes()
            .times(1)
            .returning(|key| Err(Error::NotFound(format!("Blob not found: {}", key))));
        // the calendar invite still goes out to the candidate
        mailer
            .expect_send_with_attachment()
            .withf(|_, _, _, _, filename| filename == "interview.ics")
            .times(1)
            .returning(|_, _, _, _, _| Ok(()));

        send_interview_bundle(
            &mailer,
            &blobs,
            "ada@example.com",
            &[],
            "subject",
            "body",
            "BEGIN:VCALENDAR",
            Some(("resumes/gone.pdf", "gone.pdf")),
        )
        .await;
    }

    #[tokio::test]
    async fn bundle_swallows_mailer_failures() {
        let mut mailer = MockMailDispatcher::new();
        let blobs = MockBlobStore::new();

        mailer
            .expect_send_with_attachment()
            .times(2)
            .returning(|_, _, _, _, _| Err(Error::Internal("gateway down".to_string())));

        // no resume, one interviewer; both sends fail and neither panics
        send_interview_bundle(
            &mailer,
            &blobs,
            "ada@example.com",
            &["ivan@example.com".to_string()],
            "subject",
            "body",
            "BEGIN:VCALENDAR",
            None,
        )
        .await;
    }
}
