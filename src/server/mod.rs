pub mod routes;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::modules::funtranslations::FunTranslationsClient;
use crate::modules::pokeapi::PokeApiClient;
use crate::modules::pokedex::PokedexService;

use self::routes::{get_pokemon, get_translated_pokemon};

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pokedex: Arc<PokedexService>,
}

/// Wire the two lookup routes over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/pokemon/{name}", get(get_pokemon))
        .route("/pokemon/translated/{name}", get(get_translated_pokemon))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the upstream clients from configuration and serve until stopped.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let pokeapi = PokeApiClient::new(&config)?;
    let translator = FunTranslationsClient::new(&config)?;
    let pokedex = PokedexService::new(Arc::new(pokeapi), Arc::new(translator));

    let state = AppState {
        pokedex: Arc::new(pokedex),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("listening on {}", config.bind_addr);
    axum::serve(listener, router(state)).await?;

    Ok(())
}
