use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::authors::domain::AuthorService;
use crate::authors::dto::AuthorDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddAuthorCommand {
    author_service: Box<dyn AuthorService>,
}

impl AddAuthorCommand {
    pub(crate) fn new(author_service: Box<dyn AuthorService>) -> Self {
        Self {
            author_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddAuthorCommandRequest {
    pub(crate) name: String,
    pub(crate) birth_date: NaiveDate,
    pub(crate) nationality: String,
}

impl AddAuthorCommandRequest {
    pub fn new(name: &str, birth_date: NaiveDate, nationality: &str) -> Self {
        Self {
            name: name.to_string(),
            birth_date,
            nationality: nationality.to_string(),
        }
    }

    pub fn build_author(&self) -> AuthorDto {
        AuthorDto::new(self.name.as_str(), self.birth_date, self.nationality.as_str())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddAuthorCommandResponse {
    pub author: AuthorDto,
}

impl AddAuthorCommandResponse {
    pub fn new(author: AuthorDto) -> Self {
        Self {
            author,
        }
    }
}

#[async_trait]
impl Command<AddAuthorCommandRequest, AddAuthorCommandResponse> for AddAuthorCommand {
    async fn execute(&self, req: AddAuthorCommandRequest) -> Result<AddAuthorCommandResponse, CommandError> {
        let author = req.build_author();
        self.author_service.add_author(&author).await
            .map_err(CommandError::from).map(|_| AddAuthorCommandResponse::new(author))
    }
}
