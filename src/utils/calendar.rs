use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_DURATION_MINUTES: i64 = 60;

/// Renders a minimal VCALENDAR invite. Timestamps are UTC basic format
/// (`YYYYMMDDTHHMMSSZ`).
pub fn generate_interview_ics(
    title: &str,
    description: &str,
    start_time: DateTime<Utc>,
    duration_minutes: i64,
) -> String {
    let end_time = start_time + Duration::minutes(duration_minutes);

    format!(
        "BEGIN:VCALENDAR\r\n\
         VERSION:2.0\r\n\
         PRODID:-//Recruitment Portal//Interview Calendar//EN\r\n\
         CALSCALE:GREGORIAN\r\n\
         BEGIN:VEVENT\r\n\
         SUMMARY:{}\r\n\
         DESCRIPTION:{}\r\n\
         DTSTART:{}\r\n\
         DTEND:{}\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR\r\n",
        title,
        description.replace('\n', "\\n"),
        start_time.format("%Y%m%dT%H%M%SZ"),
        end_time.format("%Y%m%dT%H%M%SZ"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn event_spans_the_default_hour() {
        let start = Utc.with_ymd_and_hms(2025, 3, 10, 10, 0, 0).unwrap();
        let ics = generate_interview_ics(
            "Interview – Backend Engineer",
            "Interview Type: online\nMeeting: https://meet.example/abc",
            start,
            DEFAULT_DURATION_MINUTES,
        );

        assert!(ics.contains("SUMMARY:Interview – Backend Engineer"));
        assert!(ics.contains("DTSTART:20250310T100000Z"));
        assert!(ics.contains("DTEND:20250310T110000Z"));
        assert!(ics.starts_with("BEGIN:VCALENDAR"));
        assert!(ics.trim_end().ends_with("END:VCALENDAR"));
    }

    #[test]
    fn newlines_in_description_are_escaped() {
        let start = Utc.with_ymd_and_hms(2025, 3, 10, 10, 0, 0).unwrap();
        let ics = generate_interview_ics("T", "line one\nline two", start, 30);
        assert!(ics.contains("DESCRIPTION:line one\\nline two"));
        assert!(ics.contains("DTEND:20250310T103000Z"));
    }
}
