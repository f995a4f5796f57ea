// portal-server/src/api/auth.rs
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use common::PortalError;
use serde::Deserialize;
use serde_json::json;

use crate::state::PortalState;

#[get("/")]
pub async fn api_index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "name": "Smart Workshop Portal API",
        "version": "0.1.0"
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub student_id: String,
    pub password: String,
}

// Validate credentials and create the login session
#[post("/login")]
pub async fn login(
    body: web::Json<LoginRequest>,
    state: web::Data<PortalState>,
) -> impl Responder {
    match state.sessions.login(&body.student_id, &body.password) {
        Ok(session) => {
            tracing::info!("Login succeeded for {}", session.student_id);
            HttpResponse::Ok().json(session)
        }
        Err(PortalError::InvalidCredentials) => {
            tracing::info!("Login rejected for {}", body.student_id);
            HttpResponse::Unauthorized().json(json!({
                "error": PortalError::InvalidCredentials.to_string()
            }))
        }
        Err(e) => {
            // A failed persist means the caller is simply not logged in.
            tracing::error!("Login failed for {}: {}", body.student_id, e);
            HttpResponse::InternalServerError().json(json!({
                "error": e.to_string()
            }))
        }
    }
}

// Return the current session, if one is live
#[get("/session")]
pub async fn get_session(state: web::Data<PortalState>) -> impl Responder {
    match state.sessions.current_session() {
        Some(session) => HttpResponse::Ok().json(session),
        None => HttpResponse::Unauthorized().json(json!({
            "error": "Not logged in"
        })),
    }
}

// Clear the login session; succeeds whether or not one existed
#[delete("/session")]
pub async fn logout(state: web::Data<PortalState>) -> impl Responder {
    state.sessions.logout();
    tracing::info!("Session cleared");
    HttpResponse::Ok().json(json!({
        "status": "success"
    }))
}
