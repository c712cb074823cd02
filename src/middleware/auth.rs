use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::user::UserRole;

/// Claims produced by the external identity provider. The token is the
/// verified-identity handoff; no account lookup happens here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub role: String,
    pub email: String,
    pub full_name: String,
}

/// Verified caller identity, available to handlers as a request extension.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub subject: String,
    pub role: UserRole,
    pub email: String,
    pub full_name: String,
}

fn unauthorized(code: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": code }))).into_response()
}

pub async fn require_bearer_auth(mut req: Request, next: Next) -> Response {
    let Some(auth_header) = req.headers().get(axum::http::header::AUTHORIZATION) else {
        return unauthorized("missing_authorization");
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return unauthorized("bad_authorization");
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return unauthorized("unsupported_scheme");
    };

    let config = crate::config::get_config();
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    let data = match decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    ) {
        Ok(data) => data,
        Err(_) => return unauthorized("invalid_token"),
    };

    let role = match data.claims.role.to_ascii_lowercase().as_str() {
        "candidate" => UserRole::Candidate,
        "recruiter" => UserRole::Recruiter,
        _ => return unauthorized("unknown_role"),
    };

    req.extensions_mut().insert(AuthUser {
        subject: data.claims.sub,
        role,
        email: data.claims.email,
        full_name: data.claims.full_name,
    });
    next.run(req).await
}
