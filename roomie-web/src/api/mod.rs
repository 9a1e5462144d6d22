mod public;
mod v1;

use actix_web::web;

/// Configure routes under the API router prefix
#[inline]
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(v1::configure_v1_routes);
}

/// Configure public root routes
#[inline]
pub(crate) fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(public::configure_public_routes);
}
