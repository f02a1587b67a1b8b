use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;

use crate::borrowing::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest, BorrowBookCommandResponse};
use crate::borrowing::command::get_borrowing_cmd::{GetBorrowingCommand, GetBorrowingCommandRequest, GetBorrowingCommandResponse};
use crate::borrowing::command::query_borrowings_cmd::{QueryBorrowingsCommand, QueryBorrowingsCommandRequest, QueryBorrowingsCommandResponse};
use crate::borrowing::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, ReturnBookCommandResponse};
use crate::borrowing::command::search_borrowings_cmd::{SearchBorrowingsCommand, SearchBorrowingsCommandRequest, SearchBorrowingsCommandResponse};
use crate::borrowing::command::update_borrowing_cmd::{UpdateBorrowingCommand, UpdateBorrowingCommandRequest, UpdateBorrowingCommandResponse};
use crate::borrowing::domain::BorrowingService;
use crate::borrowing::factory;
use crate::core::command::Command;
use crate::core::controller::{json_to_server_error, AppState, ServerError};

async fn build_service(state: AppState) -> Box<dyn BorrowingService> {
    factory::create_borrowing_service(&state.config, state.store).await
}

pub(crate) async fn borrow_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<BorrowBookCommandResponse>), ServerError> {
    let req: BorrowBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = BorrowBookCommand::new(svc).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn find_all_records(
    State(state): State<AppState>) -> Result<Json<QueryBorrowingsCommandResponse>, ServerError> {
    let svc = build_service(state).await;
    let res = QueryBorrowingsCommand::new(svc).execute(QueryBorrowingsCommandRequest {}).await?;
    Ok(Json(res))
}

pub(crate) async fn find_record_by_id(
    State(state): State<AppState>,
    Path(record_id): Path<String>) -> Result<Json<GetBorrowingCommandResponse>, ServerError> {
    let req = GetBorrowingCommandRequest { record_id };
    let svc = build_service(state).await;
    let res = GetBorrowingCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_borrowing(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
    json: Json<Value>) -> Result<Json<UpdateBorrowingCommandResponse>, ServerError> {
    let mut req: UpdateBorrowingCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.record_id = record_id;
    let svc = build_service(state).await;
    let res = UpdateBorrowingCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn return_book(
    State(state): State<AppState>,
    Path(record_id): Path<String>) -> Result<Json<ReturnBookCommandResponse>, ServerError> {
    let req = ReturnBookCommandRequest { record_id };
    let svc = build_service(state).await;
    let res = ReturnBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn search_records(
    State(state): State<AppState>,
    Query(req): Query<SearchBorrowingsCommandRequest>) -> Result<Json<SearchBorrowingsCommandResponse>, ServerError> {
    let svc = build_service(state).await;
    let res = SearchBorrowingsCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
