//! API Router with Swagger UI

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{cards, chargers, codes, health, partners, trades, usages};
use super::AppState;
use crate::api::dto::{
    CardListRequest, CardUpdate, CardUpdateRequest, ChargerInfoListRequest, ChargerQrRequest,
    ChargerStatusEntry, ChargerStatusListRequest, ChargerStatusUpdateRequest, CodeListRequest,
    PartnerUpdateRequest, TradeListRequest, TradeRecord, TradeRegiRequest, UsageRecord,
    UseRegiRequest,
};
use crate::application::minting::PartnerEnvelope;
use crate::application::summary::SummaryResponse;
use crate::shared::errors::ErrorDetail;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Codes
        codes::code_list,
        // Cards
        cards::card_update,
        cards::card_list,
        // Trades
        trades::trade_regi,
        trades::trade_list,
        trades::trade_listall,
        // Usages
        usages::use_regi,
        // Chargers
        chargers::charger_info_list,
        chargers::charger_info_listall,
        chargers::charger_status_list,
        chargers::charger_status_update,
        chargers::charger_qr,
        // Partners
        partners::cs_update,
        partners::cp_update,
        partners::cp_status_update,
        partners::uid_update,
    ),
    components(
        schemas(
            health::HealthResponse,
            ErrorDetail,
            SummaryResponse,
            PartnerEnvelope,
            CodeListRequest,
            CardUpdateRequest,
            CardUpdate,
            CardListRequest,
            TradeRegiRequest,
            TradeRecord,
            TradeListRequest,
            UseRegiRequest,
            UsageRecord,
            ChargerInfoListRequest,
            ChargerStatusListRequest,
            ChargerStatusUpdateRequest,
            ChargerStatusEntry,
            ChargerQrRequest,
            PartnerUpdateRequest,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Codes", description = "Common code table"),
        (name = "Cards", description = "Member card list and suspend/release updates"),
        (name = "Trades", description = "Charging transaction registration and listing"),
        (name = "Usages", description = "Card-less usage event registration"),
        (name = "Chargers", description = "Charger info, status and QR documents"),
        (name = "Partners", description = "Partner station/charger/member registration with identifier minting"),
    ),
    info(
        title = "EV Roaming Mock API",
        version = "1.0.0",
        description = "Stub backend for EV charging network client integration testing",
    )
)]
pub struct ApiDoc;

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Roaming API, form-wrapped JSON over POST throughout.
    let r2_routes = Router::new()
        .route("/code/list", post(codes::code_list))
        .route("/card/update", post(cards::card_update))
        .route("/card/list", post(cards::card_list))
        .route("/trade/regi", post(trades::trade_regi))
        .route("/trade/list", post(trades::trade_list))
        .route("/trade/listall", post(trades::trade_listall))
        .route("/use/regi", post(usages::use_regi))
        .route("/charger/info/list", post(chargers::charger_info_list))
        .route("/charger/info/listall", post(chargers::charger_info_listall))
        .route("/charger/status/list", post(chargers::charger_status_list))
        .route("/charger/status/update", post(chargers::charger_status_update))
        .route("/charger/qr", post(chargers::charger_qr));

    // Partner routes carry the calling system in the path.
    let partner_routes = Router::new()
        .route("/{partner}/cs/update", post(partners::cs_update))
        .route("/{partner}/cp/update", post(partners::cp_update))
        .route("/{partner}/cp/status/update", post(partners::cp_status_update))
        .route("/{partner}/uid/update", post(partners::uid_update));

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check))
        .nest("/r2", r2_routes)
        .merge(partner_routes)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────
