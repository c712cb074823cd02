pub mod application;
pub mod interview;
pub mod interview_slot;
pub mod interviewer;
pub mod notification;
pub mod user;
