//! In-memory implementation of the arguments HTTP API.
//!
//! Serves the routes the client consumes plus `DELETE /arguments/{id}`.
//! Failures answer with a `text/plain` body describing the problem.

pub mod config;
pub mod store;

use std::{future::Future, sync::Arc};

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

pub use config::{ConfigError, ServerConfig};
pub use store::{Argument, ArgumentList, ArgumentWithId, Store};

/// PATCH payload. A `conclusion`, if sent, must match the live one. This is
/// looser than the production server, which rejects any conclusion in a
/// PATCH, so that clients sending the full argument on update still work.
#[derive(Debug, Deserialize)]
pub struct PremisesUpdate {
    #[serde(default)]
    pub conclusion: Option<String>,
    #[serde(default)]
    pub premises: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConclusionQuery {
    pub conclusion: Option<String>,
}

pub type Db = Arc<RwLock<Store>>;

type HandlerError = (StatusCode, String);

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::new()));
    Router::new()
        .route("/arguments", get(get_all).post(save))
        .route("/arguments/{id}", get(get_live).patch(update).delete(delete))
        .route("/arguments/{id}/version/{version}", get(get_version))
        .with_state(db)
}

/// `app()` with request tracing and, when origins are configured, CORS.
pub fn app_with_config(config: &ServerConfig) -> Router {
    let router = app().layer(TraceLayer::new_for_http());
    match cors_layer(&config.cors_allowed_origins) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serves until `shutdown` resolves, then drains in-flight requests.
pub async fn serve<F>(listener: TcpListener, config: &ServerConfig, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app_with_config(config))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on SIGINT, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(%err, "failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received SIGINT, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();
    // Methods must stay in sync with the routes above.
    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::DELETE, Method::GET, Method::POST, Method::PATCH])
            .allow_headers([header::CONTENT_TYPE])
            .expose_headers([header::LOCATION]),
    )
}

/// Server-side payload checks. Stricter than the client: empty premises are
/// rejected too.
pub fn validate_argument(argument: &Argument) -> Result<(), String> {
    if argument.conclusion.is_empty() {
        return Err("arguments must have a conclusion".to_string());
    }
    validate_premises(&argument.premises)
}

pub fn validate_premises(premises: &[String]) -> Result<(), String> {
    if premises.len() < 2 {
        return Err("arguments must have at least 2 premises".to_string());
    }
    for (i, premise) in premises.iter().enumerate() {
        if premise.is_empty() {
            return Err(format!("argument premise[{i}] is empty, but must not be"));
        }
        if premises[..i].contains(premise) {
            return Err(format!("argument premise[{i}] repeats an earlier premise"));
        }
    }
    Ok(())
}

fn bad_request(message: impl Into<String>) -> HandlerError {
    (StatusCode::BAD_REQUEST, message.into())
}

fn not_found(id: u64) -> HandlerError {
    (StatusCode::NOT_FOUND, format!("Argument with id={id} doesn't exist"))
}

fn unknown_path(_: PathRejection) -> HandlerError {
    (StatusCode::NOT_FOUND, "404 page not found".to_string())
}

async fn save(
    State(db): State<Db>,
    payload: Result<Json<Argument>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    let Json(argument) = payload.map_err(|e| bad_request(e.body_text()))?;
    validate_argument(&argument).map_err(bad_request)?;
    let id = db.write().await.save(argument);
    info!(id, "saved argument");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/arguments/{id}"))],
    ))
}

async fn get_all(
    State(db): State<Db>,
    Query(query): Query<ConclusionQuery>,
) -> Result<Json<ArgumentList>, HandlerError> {
    let conclusion = query
        .conclusion
        .filter(|conclusion| !conclusion.is_empty())
        .ok_or_else(|| bad_request("the conclusion query parameter is required"))?;
    let arguments = db.read().await.find(&conclusion);
    if arguments.is_empty() {
        return Err((
            StatusCode::NOT_FOUND,
            format!("no arguments have the conclusion {conclusion:?}"),
        ));
    }
    Ok(Json(ArgumentList { arguments }))
}

async fn get_live(
    State(db): State<Db>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Argument>, HandlerError> {
    let Path(id) = path.map_err(unknown_path)?;
    let store = db.read().await;
    store.live(id).cloned().map(Json).ok_or_else(|| not_found(id))
}

async fn get_version(
    State(db): State<Db>,
    path: Result<Path<(u64, u16)>, PathRejection>,
) -> Result<Json<Argument>, HandlerError> {
    let Path((id, version)) = path.map_err(unknown_path)?;
    let store = db.read().await;
    store.version(id, version).cloned().map(Json).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            format!("Argument with id={id} has no version {version}"),
        )
    })
}

async fn update(
    State(db): State<Db>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<PremisesUpdate>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    let Path(id) = path.map_err(unknown_path)?;
    let Json(update) = payload.map_err(|e| bad_request(e.body_text()))?;
    validate_premises(&update.premises).map_err(bad_request)?;

    let mut store = db.write().await;
    let live_conclusion = store
        .live(id)
        .map(|live| live.conclusion.clone())
        .ok_or_else(|| not_found(id))?;
    if let Some(conclusion) = &update.conclusion {
        if *conclusion != live_conclusion {
            return Err(bad_request("an argument's conclusion can't be changed"));
        }
    }
    let version = store.update_premises(id, update.premises).ok_or_else(|| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Argument with id={id} has no versions left"),
        )
    })?;
    info!(id, version, "updated argument");
    Ok((
        StatusCode::NO_CONTENT,
        [(header::LOCATION, format!("/arguments/{id}/version/{version}"))],
    ))
}

async fn delete(
    State(db): State<Db>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, HandlerError> {
    let Path(id) = path.map_err(unknown_path)?;
    if !db.write().await.delete(id) {
        return Err(not_found(id));
    }
    info!(id, "deleted argument");
    Ok(StatusCode::NO_CONTENT)
}
