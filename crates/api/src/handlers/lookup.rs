use crate::{dto::ResponseDocument, errors::ApiError, middleware::ClientAddr, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};

#[instrument(skip(state), name = "api_lookup_record")]
pub async fn lookup_record(
    State(state): State<AppState>,
    client: ClientAddr,
    Path((rdtype, domain)): Path<(String, String)>,
) -> Result<Json<ResponseDocument>, ApiError> {
    info!(client = %client, record_type = %rdtype.to_uppercase(), "Lookup request");

    let resolution = state.lookup_record.execute(&rdtype, &domain).await?;

    Ok(Json(ResponseDocument::from_resolution(&resolution)))
}

#[instrument(skip(state), name = "api_reverse_lookup")]
pub async fn reverse_lookup(
    State(state): State<AppState>,
    client: ClientAddr,
    Path(ip): Path<String>,
) -> Result<Json<ResponseDocument>, ApiError> {
    info!(client = %client, ip = %ip, "Reverse lookup request");

    let resolution = state.reverse_lookup.execute(&ip).await?;

    Ok(Json(ResponseDocument::from_resolution(&resolution)))
}
