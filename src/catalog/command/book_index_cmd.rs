use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct BookIndexCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl BookIndexCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BookIndexCommandRequest {
    pub(crate) book_id: i64,
}

impl BookIndexCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BookIndexCommandResponse {
    pub index: usize,
}

impl BookIndexCommandResponse {
    pub fn new(index: usize) -> Self {
        Self {
            index,
        }
    }
}

#[async_trait]
impl Command<BookIndexCommandRequest, BookIndexCommandResponse> for BookIndexCommand {
    async fn execute(&self, req: BookIndexCommandRequest) -> Result<BookIndexCommandResponse, CommandError> {
        self.catalog_service.index_by_book_id(req.book_id)
            .await.map_err(CommandError::from).map(BookIndexCommandResponse::new)
    }
}
