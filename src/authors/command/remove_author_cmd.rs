use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::authors::domain::AuthorService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveAuthorCommand {
    author_service: Box<dyn AuthorService>,
}

impl RemoveAuthorCommand {
    pub(crate) fn new(author_service: Box<dyn AuthorService>) -> Self {
        Self {
            author_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveAuthorCommandRequest {
    pub(crate) author_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveAuthorCommandResponse {}

impl RemoveAuthorCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command<RemoveAuthorCommandRequest, RemoveAuthorCommandResponse> for RemoveAuthorCommand {
    async fn execute(&self, req: RemoveAuthorCommandRequest) -> Result<RemoveAuthorCommandResponse, CommandError> {
        self.author_service.remove_author(req.author_id.as_str()).await
            .map_err(CommandError::from).map(|_| RemoveAuthorCommandResponse::new())
    }
}
