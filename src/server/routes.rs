use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::modules::pokedex::SpeciesInfo;
use crate::shared::errors::ClientError;

use super::AppState;

/// Failure envelope: the client error's message with its mirrored status.
pub struct ApiError(ClientError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "message": self.0.to_string() }))).into_response()
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        Self(err)
    }
}

/// GET /pokemon/{name}
pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SpeciesInfo>, ApiError> {
    let species = state.pokedex.species_by_name(&name).await?;
    Ok(Json(species))
}

/// GET /pokemon/translated/{name}
pub async fn get_translated_pokemon(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SpeciesInfo>, ApiError> {
    let species = state.pokedex.translated_species_by_name(&name).await?;
    Ok(Json(species))
}
