//! Site API routes
mod blog;
mod cookie_consent;
mod lead;
mod llm;
mod setting;

use actix_web::web;

/// Configure all v1 routes
pub fn configure_v1_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(llm::configure_routes)
        .service(web::scope(lead::ROUTER_PREFIX).configure(lead::configure_routes))
        .service(
            web::scope(cookie_consent::ROUTER_PREFIX).configure(cookie_consent::configure_routes),
        )
        .service(web::scope(blog::ROUTER_PREFIX).configure(blog::configure_routes))
        .service(web::scope(setting::ROUTER_PREFIX).configure(setting::configure_routes));
}
