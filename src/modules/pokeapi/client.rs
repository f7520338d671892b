use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::AppConfig;
use crate::modules::pokedex::{SpeciesInfo, SpeciesProvider};
use crate::shared::errors::{ClientError, ClientResult};
use crate::shared::http::{build_client, join_url};

use super::dto::{PokemonResource, SpeciesResource};
use super::mapper::{species_id_from_url, SpeciesMapper};

/// Client for the species catalog (a PokeAPI-compatible service).
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            client: build_client()?,
            base_url: config.pokeapi_url.clone(),
        })
    }

    /// GET a catalog path and decode the body. A non-success response turns
    /// into `UpstreamRejected` carrying the raw body text and the upstream
    /// status verbatim.
    async fn fetch_json(&self, path: &str) -> ClientResult<Value> {
        let url = join_url(&self.base_url, path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ClientError::UpstreamRejected {
                message: body,
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|_| ClientError::BadResponse)
    }

    /// Resolve a species name to its record. The name lookup yields a
    /// species URL whose second-to-last segment is the numeric identifier;
    /// the identifier lookup does the actual extraction.
    pub async fn species_by_name(&self, name: &str) -> ClientResult<SpeciesInfo> {
        let payload = self.fetch_json(&format!("/pokemon/{}", name)).await?;
        let resource: PokemonResource =
            serde_json::from_value(payload).map_err(|_| ClientError::ParseFailed)?;

        let id = species_id_from_url(&resource.species.url)?;
        self.species_by_id(id).await
    }

    /// Fetch a species record by its numeric identifier.
    pub async fn species_by_id(&self, id: u32) -> ClientResult<SpeciesInfo> {
        let payload = self
            .fetch_json(&format!("/pokemon-species/{}/", id))
            .await?;
        let resource: SpeciesResource =
            serde_json::from_value(payload).map_err(|_| ClientError::ParseFailed)?;

        SpeciesMapper::to_domain(resource)
    }
}

#[async_trait]
impl SpeciesProvider for PokeApiClient {
    async fn species_by_name(&self, name: &str) -> ClientResult<SpeciesInfo> {
        PokeApiClient::species_by_name(self, name).await
    }
}
