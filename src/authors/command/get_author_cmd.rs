use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::authors::domain::AuthorService;
use crate::authors::dto::AuthorDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetAuthorCommand {
    author_service: Box<dyn AuthorService>,
}

impl GetAuthorCommand {
    pub(crate) fn new(author_service: Box<dyn AuthorService>) -> Self {
        Self {
            author_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetAuthorCommandRequest {
    pub(crate) author_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetAuthorCommandResponse {
    pub author: AuthorDto,
}

impl GetAuthorCommandResponse {
    pub fn new(author: AuthorDto) -> Self {
        Self {
            author,
        }
    }
}

#[async_trait]
impl Command<GetAuthorCommandRequest, GetAuthorCommandResponse> for GetAuthorCommand {
    async fn execute(&self, req: GetAuthorCommandRequest) -> Result<GetAuthorCommandResponse, CommandError> {
        self.author_service.find_author_by_id(req.author_id.as_str()).await
            .map_err(CommandError::from).map(GetAuthorCommandResponse::new)
    }
}
