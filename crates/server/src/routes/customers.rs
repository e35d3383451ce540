use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use service::customer::{domain::parse_customer_id, Customer};
use tracing::info;

use crate::errors::ApiError;
#[allow(unused_imports)]
use crate::openapi::{CustomerDoc, ErrorBody};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    responses((status = 200, description = "All customers", body = [CustomerDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, ApiError> {
    let list = state.customers.list().await?;
    info!(count = list.len(), "list customers");
    Ok(Json(list))
}

#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = String, Path, description = "Customer id, hyphenated UUID")),
    responses(
        (status = 200, description = "Customer found", body = CustomerDoc),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Unknown id", body = ErrorBody)
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Customer>, ApiError> {
    Ok(Json(state.customers.get_by_id(&id).await?))
}

#[utoipa::path(
    post,
    path = "/customers",
    tag = "customers",
    request_body = CustomerDoc,
    responses(
        (status = 201, description = "Customer created", body = CustomerDoc),
        (status = 400, description = "Invalid body", body = ErrorBody),
        (status = 409, description = "Email already registered", body = ErrorBody)
    )
)]
pub async fn add(
    State(state): State<AppState>,
    body: Result<Json<Customer>, JsonRejection>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let Json(input) = body?;
    let created = state.customers.add(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = String, Path, description = "Customer id, hyphenated UUID")),
    request_body = CustomerDoc,
    responses(
        (status = 200, description = "Customer updated", body = CustomerDoc),
        (status = 400, description = "Malformed id, invalid body or id mismatch", body = ErrorBody),
        (status = 404, description = "Unknown id", body = ErrorBody),
        (status = 409, description = "Email belongs to another customer", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Customer>, JsonRejection>,
) -> Result<Json<Customer>, ApiError> {
    let Json(mut input) = body?;
    // 请求体可省略 customerId，此时以路径为准；否则两者须指向同一个 UUID
    if input.has_id() {
        let path_id = parse_customer_id(&id)?;
        let body_id = parse_customer_id(&input.customer_id)?;
        if path_id != body_id {
            return Err(ApiError::BadRequest(format!(
                "customerId {:?} does not match path id {:?}",
                input.customer_id, id
            )));
        }
    }
    input.customer_id = id;
    Ok(Json(state.customers.update(input).await?))
}

#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = String, Path, description = "Customer id, hyphenated UUID")),
    responses(
        (status = 205, description = "Customer removed (or never existed)"),
        (status = 400, description = "Malformed id", body = ErrorBody)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    state.customers.delete_by_id(&id).await?;
    Ok(StatusCode::RESET_CONTENT)
}
