use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use recruitment_portal_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware::auth::require_bearer_auth,
    middleware::cors::permissive_cors,
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let api = Router::new()
        .route(
            "/api/interviews/schedule",
            post(routes::interview::schedule_interview),
        )
        .route(
            "/api/interviews/reschedule/:application_id",
            put(routes::interview::reschedule_interview),
        )
        .route(
            "/api/interviews/cancel/:application_id",
            put(routes::interview::cancel_interview),
        )
        .route(
            "/api/interviews/cancel-by-candidate/:application_id",
            put(routes::interview::cancel_interview_by_candidate),
        )
        .route(
            "/api/interviews/slots/select/:slot_id",
            put(routes::interview::select_interview_slot),
        )
        // POST offers a batch by interview id; GET lists by application id
        .route(
            "/api/interviews/slots/:id",
            post(routes::interview::add_interview_slots)
                .get(routes::interview::get_interview_slots),
        )
        .route(
            "/api/interviewers",
            get(routes::interviewer::list_interviewers)
                .post(routes::interviewer::create_interviewer),
        )
        .route(
            "/api/notifications",
            get(routes::notification::get_my_notifications),
        )
        .route(
            "/api/notifications/:notification_id/read",
            put(routes::notification::mark_notification_read),
        )
        .layer(axum::middleware::from_fn(require_bearer_auth));

    let app = base_routes
        .merge(api)
        .with_state(app_state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
