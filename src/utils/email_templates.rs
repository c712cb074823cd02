//! Canned subject/body pairs for interview mail. Bodies are plain text;
//! the calendar invite travels as an attachment, not in the body.

use chrono::{DateTime, Utc};

use crate::utils::time::human_datetime;

pub fn interview_scheduled(
    full_name: &str,
    job_title: &str,
    interview_type: &str,
    scheduled_at: DateTime<Utc>,
    venue: &str,
) -> (String, String) {
    (
        format!("Interview Scheduled – {}", job_title),
        format!(
            "Hi {},\n\n\
             Your interview has been scheduled.\n\n\
             Job Role: {}\n\
             Interview Type: {}\n\
             Date & Time: {}\n\n\
             Meeting Details:\n{}\n\n\
             Calendar invite is attached.\n\n\
             Regards,\nRecruitment Team\n",
            full_name,
            job_title,
            interview_type,
            human_datetime(scheduled_at),
            venue,
        ),
    )
}

pub fn interview_slots_shared(
    full_name: &str,
    job_title: &str,
    interview_type: &str,
    portal_url: &str,
) -> (String, String) {
    (
        format!("Select Interview Slot – {}", job_title),
        format!(
            "Hi {},\n\n\
             You have been shortlisted for the position of {}.\n\n\
             The recruiter has shared multiple interview time slots.\n\
             Please log in to the portal and select one convenient slot.\n\n\
             {}/my-applications\n\n\
             Interview Type: {}\n\n\
             Regards,\nRecruitment Team\n",
            full_name, job_title, portal_url, interview_type,
        ),
    )
}

pub fn interview_slot_confirmed(
    full_name: &str,
    job_title: &str,
    interview_type: &str,
    scheduled_at: DateTime<Utc>,
) -> (String, String) {
    (
        format!("Interview Confirmed – {}", job_title),
        format!(
            "Hi {},\n\n\
             Your interview slot has been confirmed.\n\n\
             Job Role: {}\n\
             Interview Type: {}\n\
             Date & Time: {}\n\n\
             Calendar invite is attached.\n\n\
             Regards,\nRecruitment Team\n",
            full_name,
            job_title,
            interview_type,
            human_datetime(scheduled_at),
        ),
    )
}

pub fn interview_rescheduled(
    full_name: &str,
    job_title: &str,
    interview_type: &str,
    new_time: DateTime<Utc>,
    meeting_link: Option<&str>,
    location: Option<&str>,
) -> (String, String) {
    let mut details = String::new();
    if let Some(link) = meeting_link {
        details.push_str(&format!("Meeting Link: {}\n", link));
    }
    if let Some(place) = location {
        details.push_str(&format!("Interview Location: {}\n", place));
    }

    (
        format!("Interview Rescheduled – {}", job_title),
        format!(
            "Hi {},\n\n\
             Your interview for the position of \"{}\" has been rescheduled.\n\n\
             Updated Interview Details\n\
             ----------------------------\n\
             Interview Type: {}\n\
             New Date & Time: {}\n\n\
             {}\n\
             The updated calendar invite is attached to this email.\n\n\
             Regards,\nRecruitment Team\n",
            full_name,
            job_title,
            interview_type,
            human_datetime(new_time),
            details,
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn scheduled_mail_names_job_and_venue() {
        let at = Utc.with_ymd_and_hms(2025, 3, 10, 10, 0, 0).unwrap();
        let (subject, body) = interview_scheduled(
            "Ada Lovelace",
            "Backend Engineer",
            "Online",
            at,
            "https://meet.example/abc",
        );
        assert_eq!(subject, "Interview Scheduled – Backend Engineer");
        assert!(body.contains("Hi Ada Lovelace"));
        assert!(body.contains("https://meet.example/abc"));
        assert!(body.contains("10 Mar 2025"));
    }

    #[test]
    fn slot_mail_links_to_portal() {
        let (subject, body) =
            interview_slots_shared("Ada", "Backend Engineer", "Online", "https://portal.example");
        assert!(subject.contains("Select Interview Slot"));
        assert!(body.contains("https://portal.example/my-applications"));
    }

    #[test]
    fn reschedule_mail_skips_absent_details() {
        let at = Utc.with_ymd_and_hms(2025, 4, 1, 14, 30, 0).unwrap();
        let (_, body) =
            interview_rescheduled("Ada", "QA Analyst", "Telephone", at, None, None);
        assert!(!body.contains("Meeting Link:"));
        assert!(!body.contains("Interview Location:"));

        let (_, body) = interview_rescheduled(
            "Ada",
            "QA Analyst",
            "Offline",
            at,
            None,
            Some("HQ, Room 4"),
        );
        assert!(body.contains("Interview Location: HQ, Room 4"));
    }
}
