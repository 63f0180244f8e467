// Route exports
pub mod fitting;

use actix_web::web;

pub use fitting::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(fitting::health_check))
        .service(web::scope("/api").configure(fitting::configure));
}
