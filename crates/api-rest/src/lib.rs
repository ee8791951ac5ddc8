//! # API REST
//!
//! REST API implementation for MediBot.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, the embedded chat page)
//!
//! Uses `api-shared` for request/response types and `medibot-core` for the actual work.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::Instrument;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    AdvisoryMarkup, AnalyzeReq, AnalyzeRes, ChatReq, ChatRes, ConditionSummary, ErrorRes,
    HealthRes, HealthService, HospitalsQuery, HospitalsRes, ListConditionsRes,
};
use medibot_core::{
    analyze_with, catalog,
    constants::{ASSISTANT_UNAVAILABLE, EMPTY_MESSAGE_REPLY},
    matching_conditions, search_near, ChatAssistant, Language, Markup, NonEmptyText,
};

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Application state shared across REST API handlers.
pub struct AppState<A> {
    assistant: Arc<A>,
}

impl<A> AppState<A> {
    pub fn new(assistant: A) -> Self {
        Self {
            assistant: Arc::new(assistant),
        }
    }
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            assistant: Arc::clone(&self.assistant),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, chat, analyze, list_conditions, hospitals),
    components(schemas(
        HealthRes,
        ChatReq,
        ChatRes,
        AdvisoryMarkup,
        AnalyzeReq,
        AnalyzeRes,
        ConditionSummary,
        ListConditionsRes,
        HospitalsRes,
        ErrorRes,
    ))
)]
pub struct ApiDoc;

/// Build the REST router with Swagger UI and permissive CORS.
pub fn router<A>(state: AppState<A>) -> Router
where
    A: ChatAssistant + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/chat", post(chat::<A>))
        .route("/api/analyze", post(analyze))
        .route("/api/conditions", get(list_conditions))
        .route("/api/hospitals", get(hospitals))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers.
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatReq,
    responses(
        (status = 200, description = "Assistant reply and offline advisory", body = ChatRes),
        (status = 400, description = "Malformed JSON body")
    )
)]
/// Answer one chat turn.
///
/// The offline advisory and the hosted reply are produced independently. A blank message gets a
/// fixed prompt and neither is computed. If the hosted assistant fails, `reply` is empty and
/// `assistant_error` carries a fixed notice; the offline advisory is still returned.
async fn chat<A>(State(state): State<AppState<A>>, Json(req): Json<ChatReq>) -> Json<ChatRes>
where
    A: ChatAssistant + 'static,
{
    let Ok(message) = NonEmptyText::new(&req.message) else {
        return Json(ChatRes {
            reply: EMPTY_MESSAGE_REPLY.into(),
            offline: String::new(),
            assistant_error: None,
        });
    };
    let language = Language::new(req.language.as_deref());
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("chat", %request_id, %language);

    async move {
        let offline = analyze_with(message.as_str(), Markup::Html);

        match state.assistant.reply(&message, &language).await {
            Ok(reply) => Json(ChatRes {
                reply,
                offline,
                assistant_error: None,
            }),
            Err(e) => {
                tracing::error!("Chat assistant error: {:?}", e);
                Json(ChatRes {
                    reply: String::new(),
                    offline,
                    assistant_error: Some(ASSISTANT_UNAVAILABLE.into()),
                })
            }
        }
    }
    .instrument(span)
    .await
}

#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeReq,
    responses(
        (status = 200, description = "Offline advisory, empty when nothing matched", body = AnalyzeRes)
    )
)]
/// Run only the offline symptom check.
async fn analyze(Json(req): Json<AnalyzeReq>) -> Json<AnalyzeRes> {
    Json(AnalyzeRes {
        offline: analyze_with(&req.message, req.markup.into()),
        conditions: matching_conditions(&req.message)
            .into_iter()
            .map(|c| c.name.to_string())
            .collect(),
    })
}

#[utoipa::path(
    get,
    path = "/api/conditions",
    responses(
        (status = 200, description = "Offline catalog in match order", body = ListConditionsRes)
    )
)]
async fn list_conditions() -> Json<ListConditionsRes> {
    Json(ListConditionsRes {
        conditions: catalog().iter().map(ConditionSummary::from).collect(),
    })
}

#[utoipa::path(
    get,
    path = "/api/hospitals",
    params(HospitalsQuery),
    responses(
        (status = 200, description = "Maps search for nearby hospitals", body = HospitalsRes),
        (status = 400, description = "Missing or blank location", body = ErrorRes)
    )
)]
/// Build a maps search for hospitals near a user-supplied location.
async fn hospitals(
    Query(query): Query<HospitalsQuery>,
) -> Result<Json<HospitalsRes>, (StatusCode, Json<ErrorRes>)> {
    match search_near(query.location.as_deref().unwrap_or_default()) {
        Ok(search) => Ok(Json(search.into())),
        Err(e) => {
            tracing::warn!("Hospital search rejected: {}", e);
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorRes {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
