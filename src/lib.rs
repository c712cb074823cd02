pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::services::{
    blob::HttpBlobStore, interview_service::InterviewService,
    interviewer_service::InterviewerService, mailer::HttpMailDispatcher,
    notification_service::NotificationService, notifier::PgNotificationSink,
};
use reqwest::Client;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub interview_service: InterviewService,
    pub interviewer_service: InterviewerService,
    pub notification_service: NotificationService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap();

        let notifier = Arc::new(PgNotificationSink::new(pool.clone()));
        let mailer = Arc::new(HttpMailDispatcher::new(
            http_client.clone(),
            config.mail_gateway_url.clone(),
            config.mail_sender.clone(),
        ));
        let blobs = Arc::new(HttpBlobStore::new(
            http_client,
            config.blob_store_url.clone(),
        ));

        let interview_service = InterviewService::new(
            pool.clone(),
            notifier,
            mailer,
            blobs,
            config.portal_url.clone(),
        );
        let interviewer_service = InterviewerService::new(pool.clone());
        let notification_service = NotificationService::new(pool.clone());

        Self {
            pool,
            interview_service,
            interviewer_service,
            notification_service,
        }
    }
}
