pub mod mem_author_repository;

use crate::authors::domain::model::AuthorEntity;
use crate::core::repository::Repository;

pub(crate) trait AuthorRepository: Repository<AuthorEntity> {}
