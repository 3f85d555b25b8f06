use actix_web::{HttpResponse, get, web};
use log::debug;

use super::models::{AppState, ChainResponse, MineResponse, ValidResponse};
use crate::error::ApiError;

/// Mine a block on top of the current tip.
/// The lock is held for the whole round so two requests cannot extend the same tip.
/// The search runs inline on this worker; other handlers block on the lock until it ends.
#[get("/mine_block")]
pub async fn mine_block(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let mined = {
        let mut bc = state.blockchain.lock()?;
        bc.mine()
    };
    Ok(HttpResponse::Ok().json(MineResponse::from(mined)))
}

/// Get the full blockchain.
#[get("/get_chain")]
pub async fn get_chain(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let bc = state.blockchain.lock()?;
    debug!("CHAIN - serving {} blocks", bc.len());
    Ok(HttpResponse::Ok().json(ChainResponse {
        chain: bc.blocks(),
        length: bc.len(),
    }))
}

/// Validate the whole chain.
#[get("/is_valid")]
pub async fn is_valid(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let bc = state.blockchain.lock()?;
    let is_chain_valid = bc.is_valid();
    debug!("VALIDATE - {} blocks, valid={}", bc.len(), is_chain_valid);
    Ok(HttpResponse::Ok().json(ValidResponse { is_chain_valid }))
}
