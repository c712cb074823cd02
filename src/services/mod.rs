pub mod blob;
pub mod interview_service;
pub mod interviewer_service;
pub mod mailer;
pub mod notification_service;
pub mod notifier;
pub mod transitions;
