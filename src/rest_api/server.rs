//! # Customer Routes
//!
//! Axum handlers for the `/customers` resource.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::model::{Customer, CustomerInput, SaveCustomer};
use crate::service::CustomerService;

use super::errors::{ApiError, ApiResult};
use super::response::Envelope;

const QUERY_FAILED: &str = "Error querying the database";
const INSERT_FAILED: &str = "Error inserting into the database";
const UPDATE_FAILED: &str = "Error updating the database";
const DELETE_FAILED: &str = "Error deleting from the database";

const CREATED: &str = "The customer has been created successfully";
const UPDATED: &str = "The customer has been updated successfully";
const DELETED: &str = "The customer has been deleted successfully";

/// State shared by the customer handlers
#[derive(Clone)]
pub struct AppState {
    pub service: CustomerService,
    /// Status returned by a successful update
    pub update_status: StatusCode,
}

impl AppState {
    pub fn new(service: CustomerService) -> Self {
        Self {
            service,
            update_status: StatusCode::OK,
        }
    }

    /// Answer updates with `201 Created` instead of `200 OK`.
    pub fn with_legacy_update_status(mut self, legacy: bool) -> Self {
        self.update_status = if legacy {
            StatusCode::CREATED
        } else {
            StatusCode::OK
        };
        self
    }
}

/// Create customer routes
pub fn customer_routes(state: AppState) -> Router {
    Router::new()
        .route("/customers", get(list_handler).post(create_handler))
        .route(
            "/customers/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .with_state(state)
}

fn not_found(id: i64) -> String {
    format!("The customer with id {} does not exist in the database", id)
}

fn validated(body: Result<Json<CustomerInput>, JsonRejection>) -> ApiResult<CustomerInput> {
    let Json(input) = body?;
    input.validate()?;
    Ok(input)
}

async fn list_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<Customer>>> {
    let customers = state
        .service
        .list_all()
        .await
        .map_err(ApiError::storage(QUERY_FAILED))?;

    Ok(Json(customers))
}

async fn get_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Customer>> {
    let Path(id) = id?;

    let customer = state
        .service
        .find_by_id(id)
        .await
        .map_err(ApiError::storage(QUERY_FAILED))?
        .ok_or_else(|| ApiError::not_found(not_found(id)))?;

    Ok(Json(customer))
}

async fn create_handler(
    State(state): State<AppState>,
    body: Result<Json<CustomerInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Envelope>)> {
    let input = validated(body)?;

    let created = state
        .service
        .save(SaveCustomer::New(input))
        .await
        .map_err(ApiError::storage(INSERT_FAILED))?;

    tracing::info!(id = created.id, "customer created");
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_customer(CREATED, created)),
    ))
}

async fn update_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<CustomerInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Envelope>)> {
    let Path(id) = id?;
    let input = validated(body)?;

    // Look up first so an update can never create a row.
    let mut current = state
        .service
        .find_by_id(id)
        .await
        .map_err(ApiError::storage(QUERY_FAILED))?
        .ok_or_else(|| ApiError::not_found(format!("Could not update. {}", not_found(id))))?;

    current.apply(input);

    let updated = state
        .service
        .save(SaveCustomer::Existing(current))
        .await
        .map_err(ApiError::storage(UPDATE_FAILED))?;

    tracing::info!(id, "customer updated");
    Ok((
        state.update_status,
        Json(Envelope::with_customer(UPDATED, updated)),
    ))
}

async fn delete_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Envelope>> {
    let Path(id) = id?;

    state
        .service
        .delete_by_id(id)
        .await
        .map_err(ApiError::storage(DELETE_FAILED))?;

    tracing::info!(id, "customer deleted");
    Ok(Json(Envelope::message(DELETED)))
}
