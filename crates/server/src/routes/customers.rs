//! Customer REST handlers.
//!
//! Request bodies carry emails as raw strings and are parse-validated here,
//! so the service layer only ever sees well-formed [`Email`] values. A body
//! failing validation is a 400 before any store access happens.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use patron_core::{CustomerId, Email};

use crate::error::AppError;
use crate::models::{Customer, CustomerRegistration, CustomerUpdate};
use crate::state::AppState;

/// Build the customers router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/customers", get(list).post(register))
        .route(
            "/api/v1/customers/{customer_id}",
            get(find_by_id).put(update).delete(delete_by_id),
        )
}

/// Customer as serialized to clients.
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: Option<i64>,
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.map(|id| id.as_i64()),
            name: customer.name,
            age: customer.age,
            email: customer.email.into_inner(),
        }
    }
}

/// Registration request body. All fields required.
#[derive(Debug, Deserialize)]
pub struct RegistrationBody {
    pub name: String,
    pub age: i32,
    pub email: String,
}

/// Update request body. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateBody {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let customers = state.customers().find_all().await?;

    Ok(Json(
        customers.into_iter().map(CustomerResponse::from).collect(),
    ))
}

async fn find_by_id(
    State(state): State<AppState>,
    Path(customer_id): Path<i64>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = state
        .customers()
        .find_by_id(CustomerId::new(customer_id))
        .await?;

    Ok(Json(customer.into()))
}

async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegistrationBody>,
) -> Result<StatusCode, AppError> {
    let registration = CustomerRegistration {
        name: parse_name(body.name)?,
        age: body.age,
        email: parse_email(&body.email)?,
    };

    state.customers().register(registration).await?;

    Ok(StatusCode::CREATED)
}

async fn update(
    State(state): State<AppState>,
    Path(customer_id): Path<i64>,
    Json(body): Json<UpdateBody>,
) -> Result<StatusCode, AppError> {
    let update = CustomerUpdate {
        name: body.name.map(parse_name).transpose()?,
        age: body.age,
        email: body.email.as_deref().map(parse_email).transpose()?,
    };

    state
        .customers()
        .update(CustomerId::new(customer_id), update)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_by_id(
    State(state): State<AppState>,
    Path(customer_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state
        .customers()
        .delete_by_id(CustomerId::new(customer_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

fn parse_email(raw: &str) -> Result<Email, AppError> {
    Email::parse(raw).map_err(|e| AppError::BadRequest(format!("invalid email: {e}")))
}

fn parse_name(raw: String) -> Result<String, AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::BadRequest("name cannot be empty".to_owned()));
    }
    Ok(raw)
}
