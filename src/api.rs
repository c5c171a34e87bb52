use leptos::*;

use crate::config::ClientConfig;

#[cfg(feature = "ssr")]
use actix_web::{http::Method, web, HttpResponse};
#[cfg(feature = "ssr")]
use leptos::logging::{log, warn};
#[cfg(feature = "ssr")]
use serde::Deserialize;

#[cfg(feature = "ssr")]
use crate::functions::{aggregator, gateway, Aggregator, FunctionResponse, Gateway};

/// Backend URL and submission token for the browser, taken from the server's config.
#[server(GetClientConfig, "/api")]
pub async fn get_client_config() -> Result<ClientConfig, ServerFnError> {
    use crate::config::AppConfig;

    let config: actix_web::web::Data<AppConfig> = leptos_actix::extract().await?;
    Ok(config.client())
}

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug)]
pub struct GatewayQuery {
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default)]
    pub id: String,
}

#[cfg(feature = "ssr")]
pub async fn gateway_handler(
    gateway: web::Data<Gateway>,
    query: web::Query<GatewayQuery>,
) -> HttpResponse {
    let Some(route) = query.route.as_deref().filter(|route| !route.trim().is_empty()) else {
        warn!("[GATEWAY] Request without a route");
        return gateway::missing_route().into_http_response();
    };
    log!("[GATEWAY] Received request for route {} (id: {})", route, query.id);
    gateway.forward(route, &query.id).await.into_http_response()
}

#[cfg(feature = "ssr")]
pub async fn gateway_preflight() -> HttpResponse {
    FunctionResponse::preflight(gateway::ALLOWED_METHODS).into_http_response()
}

#[cfg(feature = "ssr")]
pub async fn aggregator_handler(aggregator: web::Data<Aggregator>) -> HttpResponse {
    log!("[AGGREGATOR] Starting actor {}", aggregator::ACTOR_ID);
    aggregator.run().await.into_http_response()
}

#[cfg(feature = "ssr")]
pub async fn aggregator_preflight() -> HttpResponse {
    FunctionResponse::preflight(aggregator::ALLOWED_METHODS).into_http_response()
}

/// Registers `/functions/*`. Expects `Data<Gateway>` and `Data<Aggregator>` in app data.
#[cfg(feature = "ssr")]
pub fn configure_functions(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/functions")
            .route("/gateway", web::get().to(gateway_handler))
            .route("/gateway", web::method(Method::OPTIONS).to(gateway_preflight))
            .route("/aggregator", web::get().to(aggregator_handler))
            .route("/aggregator", web::post().to(aggregator_handler))
            .route("/aggregator", web::method(Method::OPTIONS).to(aggregator_preflight)),
    );
}
