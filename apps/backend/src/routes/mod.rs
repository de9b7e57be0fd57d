use actix_web::web;

pub mod health;
pub mod solver;

/// Configure application routes for tests and non-HttpServer contexts.
///
/// In production, `main.rs` wires these onto the HttpServer together with
/// the CORS and tracing middleware. For tests we register the same paths
/// without those wrappers so that endpoint behavior can be exercised
/// directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Solver routes: /api/dds-*
    cfg.service(web::scope("/api").configure(solver::configure_routes));
}
