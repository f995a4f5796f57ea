// portal-server/src/api/navigation.rs
use actix_web::{get, post, web, HttpResponse, Responder};
use common::models::catalog::{app_modules, find_module, ModuleSummary};
use common::models::factory::unit_names;
use common::resolver::{resolve, resolve_factory_unit};
use common::PortalError;
use serde::Deserialize;
use serde_json::json;

use crate::state::PortalState;

// Ordered tile catalog for the portal landing page
#[get("/modules")]
pub async fn list_modules() -> impl Responder {
    let modules: Vec<ModuleSummary> = app_modules().iter().map(ModuleSummary::from).collect();
    HttpResponse::Ok().json(modules)
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub name: String,
}

// Resolve a tile selection into a concrete action
#[post("/navigate")]
pub async fn navigate(
    body: web::Json<NavigateRequest>,
    state: web::Data<PortalState>,
) -> impl Responder {
    let module = match find_module(&body.name) {
        Some(module) => module,
        None => {
            tracing::warn!("Navigation request for unknown module: {}", body.name);
            return HttpResponse::NotFound().json(json!({
                "error": PortalError::ResolutionFailed.to_string()
            }));
        }
    };

    let session = state.sessions.current_session();
    let action = resolve(module, session.as_ref());
    tracing::debug!("Resolved {} -> {:?}", module.name, action);
    HttpResponse::Ok().json(action)
}

// Factory-unit names for the chooser modal
#[get("/factory/units")]
pub async fn list_factory_units() -> impl Responder {
    HttpResponse::Ok().json(unit_names())
}

#[derive(Debug, Deserialize)]
pub struct FactoryNavigateRequest {
    pub unit: String,
}

// Resolve a factory unit against the session's assigned VM
#[post("/factory/navigate")]
pub async fn factory_navigate(
    body: web::Json<FactoryNavigateRequest>,
    state: web::Data<PortalState>,
) -> impl Responder {
    let session = state.sessions.current_session();
    match resolve_factory_unit(&body.unit, session.as_ref()) {
        Ok(url) => HttpResponse::Ok().json(json!({
            "action": "open_url",
            "url": url
        })),
        Err(e @ PortalError::NotLoggedIn) => HttpResponse::Unauthorized().json(json!({
            "error": e.to_string()
        })),
        Err(e @ PortalError::UnknownVm(_)) => {
            tracing::warn!("Factory navigation with unknown VM: {}", e);
            HttpResponse::BadRequest().json(json!({
                "error": e.to_string()
            }))
        }
        Err(e @ PortalError::UnknownUnit(_)) => HttpResponse::NotFound().json(json!({
            "error": e.to_string()
        })),
        Err(e) => {
            // Malformed session or storage trouble; never leak the raw error.
            tracing::error!("Factory navigation failed: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": PortalError::ResolutionFailed.to_string()
            }))
        }
    }
}
