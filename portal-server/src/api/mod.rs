// portal-server/src/api/mod.rs
pub mod auth;
pub mod navigation;

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(
        actix_web::web::scope("/api")
            .service(auth::api_index)
            .service(auth::login)
            .service(auth::get_session)
            .service(auth::logout)
            .service(navigation::list_modules)
            .service(navigation::navigate)
            .service(navigation::list_factory_units)
            .service(navigation::factory_navigate),
    );
}
