//! Double-dummy solver HTTP routes.

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use dds::{Card, DdTable, Direction, Hands, ParScore, Strain};

use crate::error::AppError;
use crate::extractors::validated_json::ValidatedJson;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct TableRequest {
    hands: Hands,
}

#[derive(Debug, Deserialize)]
struct DealBody {
    hands: Hands,
}

#[derive(Debug, Deserialize)]
struct TrickRequest {
    trump: Strain,
    first: Direction,
    current_trick: Vec<Card>,
    deal: DealBody,
}

#[derive(Debug, Deserialize)]
struct OptimumRequest {
    deal: DealBody,
    vulnerability: i32,
}

#[derive(Debug, Serialize)]
struct OptimumResponse {
    table: DdTable,
    par: ParScore,
}

/// POST /api/dds-table/
///
/// Computes the full double-dummy table for a deal: the number of tricks
/// each seat makes as declarer in each strain.
async fn dd_table(
    app_state: web::Data<AppState>,
    body: ValidatedJson<TableRequest>,
) -> Result<HttpResponse, AppError> {
    let TableRequest { hands } = body.into_inner();
    let solver = Arc::clone(&app_state.solver);

    // The engine call is CPU-bound, so run it off the async executor
    let table = web::block(move || solver.calc_table(&hands))
        .await
        .map_err(|e| AppError::internal(format!("solver task failed: {e}")))??;

    Ok(HttpResponse::Ok().json(table))
}

/// POST /api/dds-score/
///
/// Scores every card the side to play can legally lead or follow with,
/// given the trump strain, the trick leader, and any cards already on
/// the table.
async fn trick_scores(
    app_state: web::Data<AppState>,
    body: ValidatedJson<TrickRequest>,
) -> Result<HttpResponse, AppError> {
    let TrickRequest {
        trump,
        first,
        current_trick,
        deal,
    } = body.into_inner();
    let solver = Arc::clone(&app_state.solver);

    let scores = web::block(move || solver.solve_trick(trump, first, &current_trick, &deal.hands))
        .await
        .map_err(|e| AppError::internal(format!("solver task failed: {e}")))??;

    Ok(HttpResponse::Ok().json(scores))
}

/// POST /api/dds-optimum/
///
/// Computes the double-dummy table and the par contract scores for the
/// given vulnerability in one request.
async fn optimum(
    app_state: web::Data<AppState>,
    body: ValidatedJson<OptimumRequest>,
) -> Result<HttpResponse, AppError> {
    let OptimumRequest {
        deal,
        vulnerability,
    } = body.into_inner();
    let solver = Arc::clone(&app_state.solver);

    let (table, par) = web::block(move || {
        let table = solver.calc_table(&deal.hands)?;
        let par = solver.calc_par(&table, vulnerability)?;
        Ok::<_, dds::DdsError>((table, par))
    })
    .await
    .map_err(|e| AppError::internal(format!("solver task failed: {e}")))??;

    Ok(HttpResponse::Ok().json(OptimumResponse { table, par }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/dds-table/").route(web::post().to(dd_table)));
    cfg.service(web::resource("/dds-score/").route(web::post().to(trick_scores)));
    cfg.service(web::resource("/dds-optimum/").route(web::post().to(optimum)));
}
