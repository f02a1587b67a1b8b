use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;

use crate::core::command::Command;
use crate::core::controller::{json_to_server_error, AppState, ServerError};
use crate::customers::command::add_customer_cmd::{AddCustomerCommand, AddCustomerCommandRequest, AddCustomerCommandResponse};
use crate::customers::command::get_customer_cmd::{GetCustomerCommand, GetCustomerCommandRequest, GetCustomerCommandResponse};
use crate::customers::command::query_customers_cmd::{QueryCustomersCommand, QueryCustomersCommandRequest, QueryCustomersCommandResponse};
use crate::customers::command::remove_customer_cmd::{RemoveCustomerCommand, RemoveCustomerCommandRequest, RemoveCustomerCommandResponse};
use crate::customers::command::update_customer_cmd::{UpdateCustomerCommand, UpdateCustomerCommandRequest, UpdateCustomerCommandResponse};
use crate::customers::domain::CustomerService;
use crate::customers::factory;

async fn build_service(state: AppState) -> Box<dyn CustomerService> {
    factory::create_customer_service(&state.config, state.store).await
}

pub(crate) async fn add_customer(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<AddCustomerCommandResponse>), ServerError> {
    let req: AddCustomerCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = AddCustomerCommand::new(svc).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn find_all_customers(
    State(state): State<AppState>) -> Result<Json<QueryCustomersCommandResponse>, ServerError> {
    let svc = build_service(state).await;
    let res = QueryCustomersCommand::new(svc).execute(QueryCustomersCommandRequest {}).await?;
    Ok(Json(res))
}

pub(crate) async fn find_customer_by_id(
    State(state): State<AppState>,
    Path(customer_id): Path<String>) -> Result<Json<GetCustomerCommandResponse>, ServerError> {
    let req = GetCustomerCommandRequest { customer_id };
    let svc = build_service(state).await;
    let res = GetCustomerCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    json: Json<Value>) -> Result<Json<UpdateCustomerCommandResponse>, ServerError> {
    let mut req: UpdateCustomerCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.customer_id = customer_id;
    let svc = build_service(state).await;
    let res = UpdateCustomerCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>) -> Result<Json<RemoveCustomerCommandResponse>, ServerError> {
    let req = RemoveCustomerCommandRequest { customer_id };
    let svc = build_service(state).await;
    let res = RemoveCustomerCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
