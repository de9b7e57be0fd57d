use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use backend::config::engine::{engine_limits, library_path};
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::trace_span::TraceSpan;
use backend::routes;
use backend::state::app_state::AppState;
use dds::Dds;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    println!("🚀 Starting ddsolve backend on http://{}:{}", host, port);

    let limits = match engine_limits() {
        Ok(limits) => limits,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    // Load the engine and apply resource limits once, before any worker
    // can reach it
    let solver = match library_path() {
        Some(path) => Dds::load_from(path, limits),
        None => Dds::load(limits),
    };
    let solver = match solver {
        Ok(solver) => Arc::new(solver),
        Err(e) => {
            eprintln!("❌ Failed to load the double-dummy engine: {e}");
            std::process::exit(1);
        }
    };
    println!("✅ Double-dummy engine loaded");

    let app_state = AppState::new(solver);

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
