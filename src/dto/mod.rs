pub mod interview_dto;
pub mod interviewer_dto;
pub mod notification_dto;
