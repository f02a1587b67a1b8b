use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::authors::domain::AuthorService;
use crate::authors::dto::AuthorDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct QueryAuthorsCommand {
    author_service: Box<dyn AuthorService>,
}

impl QueryAuthorsCommand {
    pub(crate) fn new(author_service: Box<dyn AuthorService>) -> Self {
        Self {
            author_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct QueryAuthorsCommandRequest {}

#[derive(Debug, Serialize)]
pub(crate) struct QueryAuthorsCommandResponse {
    pub authors: Vec<AuthorDto>,
}

impl QueryAuthorsCommandResponse {
    pub fn new(authors: Vec<AuthorDto>) -> Self {
        Self {
            authors,
        }
    }
}

#[async_trait]
impl Command<QueryAuthorsCommandRequest, QueryAuthorsCommandResponse> for QueryAuthorsCommand {
    async fn execute(&self, _req: QueryAuthorsCommandRequest) -> Result<QueryAuthorsCommandResponse, CommandError> {
        self.author_service.find_all_authors().await
            .map_err(CommandError::from).map(QueryAuthorsCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use chrono::NaiveDate;
    use lazy_static::lazy_static;
    use crate::authors::command::add_author_cmd::{AddAuthorCommand, AddAuthorCommandRequest};
    use crate::authors::command::query_authors_cmd::{QueryAuthorsCommand, QueryAuthorsCommandRequest};
    use crate::authors::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref ADD_CMD: AsyncOnce<AddAuthorCommand> = AsyncOnce::new(async {
                let svc = factory::create_author_service(&Configuration::new("test", false), RepositoryStore::InMemory).await;
                AddAuthorCommand::new(svc)
            });
        static ref QUERY_CMD: AsyncOnce<QueryAuthorsCommand> = AsyncOnce::new(async {
                let svc = factory::create_author_service(&Configuration::new("test", false), RepositoryStore::InMemory).await;
                QueryAuthorsCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_query_authors() {
        let add_cmd = ADD_CMD.get().await.clone();
        let query_cmd = QUERY_CMD.get().await.clone();

        let added = add_cmd.execute(AddAuthorCommandRequest::new(
            "Author query", NaiveDate::from_ymd_opt(1981, 1, 1).expect("date"), "Nationality 1"))
            .await.expect("should add author");
        let res = query_cmd.execute(QueryAuthorsCommandRequest {}).await.expect("should query authors");
        assert!(res.authors.iter().any(|a| a.author_id == added.author.author_id));
    }
}
