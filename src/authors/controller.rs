use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;

use crate::authors::command::add_author_cmd::{AddAuthorCommand, AddAuthorCommandRequest, AddAuthorCommandResponse};
use crate::authors::command::get_author_cmd::{GetAuthorCommand, GetAuthorCommandRequest, GetAuthorCommandResponse};
use crate::authors::command::query_authors_cmd::{QueryAuthorsCommand, QueryAuthorsCommandRequest, QueryAuthorsCommandResponse};
use crate::authors::command::remove_author_cmd::{RemoveAuthorCommand, RemoveAuthorCommandRequest, RemoveAuthorCommandResponse};
use crate::authors::command::update_author_cmd::{UpdateAuthorCommand, UpdateAuthorCommandRequest, UpdateAuthorCommandResponse};
use crate::authors::domain::AuthorService;
use crate::authors::factory;
use crate::core::command::Command;
use crate::core::controller::{json_to_server_error, AppState, ServerError};

async fn build_service(state: AppState) -> Box<dyn AuthorService> {
    factory::create_author_service(&state.config, state.store).await
}

pub(crate) async fn add_author(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<AddAuthorCommandResponse>), ServerError> {
    let req: AddAuthorCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = AddAuthorCommand::new(svc).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn find_all_authors(
    State(state): State<AppState>) -> Result<Json<QueryAuthorsCommandResponse>, ServerError> {
    let svc = build_service(state).await;
    let res = QueryAuthorsCommand::new(svc).execute(QueryAuthorsCommandRequest {}).await?;
    Ok(Json(res))
}

pub(crate) async fn find_author_by_id(
    State(state): State<AppState>,
    Path(author_id): Path<String>) -> Result<Json<GetAuthorCommandResponse>, ServerError> {
    let req = GetAuthorCommandRequest { author_id };
    let svc = build_service(state).await;
    let res = GetAuthorCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_author(
    State(state): State<AppState>,
    Path(author_id): Path<String>,
    json: Json<Value>) -> Result<Json<UpdateAuthorCommandResponse>, ServerError> {
    let mut req: UpdateAuthorCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.author_id = author_id;
    let svc = build_service(state).await;
    let res = UpdateAuthorCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_author(
    State(state): State<AppState>,
    Path(author_id): Path<String>) -> Result<Json<RemoveAuthorCommandResponse>, ServerError> {
    let req = RemoveAuthorCommandRequest { author_id };
    let svc = build_service(state).await;
    let res = RemoveAuthorCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
