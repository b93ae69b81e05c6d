use std::time::Duration;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode, header};
use axum::routing::get;
use axum::{Json, Router};
use sqlx::SqlitePool;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::api::models::{ApiError, ErrorResponse, GetInvoicesParams, InvoiceComponent};
use crate::api::openapi::ApiDoc;
use crate::error::BackofficeError;
use crate::service::invoices::{FetchAllInvoices, FetchAllInvoicesHandler};
use crate::storage::database::DatabaseInvoiceStorage;

/// Builds the application router: compression, a request timeout, permissive
/// CORS and request tracing around the invoice listing API.
pub fn app(pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(|| async { "OK" }))
        .route("/invoices", get(get_invoices))
        .route("/api-doc/openapi.json", get(openapi_json))
        .fallback(fallback)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

#[utoipa::path(
    get,
    path = "/invoices",
    params(GetInvoicesParams),
    responses(
        (status = 200, description = "Paginated list of invoices", body = [InvoiceComponent]),
        (status = 422, description = "Malformed query parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(super) async fn get_invoices(
    State(pool): State<SqlitePool>,
    params: Result<Query<GetInvoicesParams>, QueryRejection>,
) -> Result<Json<Vec<InvoiceComponent>>, ApiError> {
    let Query(params) =
        params.map_err(|rejection| BackofficeError::InvalidInput(rejection.body_text()))?;

    // One connection per request, returned to the pool when the storage is
    // dropped on any exit path.
    let conn = pool.acquire().await.map_err(BackofficeError::from)?;
    let storage = DatabaseInvoiceStorage::new(conn);
    let handler = FetchAllInvoicesHandler::new(&storage);

    let invoices = handler
        .handle(FetchAllInvoices {
            limit: params.limit,
            offset: params.offset,
        })
        .await?;

    Ok(Json(
        invoices.iter().map(InvoiceComponent::from_invoice).collect(),
    ))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn fallback() -> ErrorResponse {
    ErrorResponse::new(StatusCode::NOT_FOUND, "not found")
}
