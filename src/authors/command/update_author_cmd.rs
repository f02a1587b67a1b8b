use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::authors::domain::AuthorService;
use crate::authors::dto::AuthorDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateAuthorCommand {
    author_service: Box<dyn AuthorService>,
}

impl UpdateAuthorCommand {
    pub(crate) fn new(author_service: Box<dyn AuthorService>) -> Self {
        Self {
            author_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateAuthorCommandRequest {
    // filled from the request path, not the body
    #[serde(default)]
    pub author_id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub nationality: String,
}

impl UpdateAuthorCommandRequest {
    pub fn new(author_id: &str, name: &str, birth_date: NaiveDate, nationality: &str) -> Self {
        Self {
            author_id: author_id.to_string(),
            name: name.to_string(),
            birth_date,
            nationality: nationality.to_string(),
        }
    }

    pub fn build_author(&self) -> AuthorDto {
        AuthorDto {
            author_id: self.author_id.to_string(),
            version: 0,
            name: self.name.to_string(),
            birth_date: self.birth_date,
            nationality: self.nationality.to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateAuthorCommandResponse {
    pub author: AuthorDto,
}

impl UpdateAuthorCommandResponse {
    pub fn new(author: AuthorDto) -> Self {
        Self {
            author,
        }
    }
}

#[async_trait]
impl Command<UpdateAuthorCommandRequest, UpdateAuthorCommandResponse> for UpdateAuthorCommand {
    async fn execute(&self, req: UpdateAuthorCommandRequest) -> Result<UpdateAuthorCommandResponse, CommandError> {
        let author = req.build_author();
        self.author_service.update_author(&author).await
            .map_err(CommandError::from).map(|_| UpdateAuthorCommandResponse::new(author))
    }
}
