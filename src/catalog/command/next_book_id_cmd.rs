use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct NextBookIdCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl NextBookIdCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct NextBookIdCommandRequest {
}

#[derive(Debug, Serialize)]
pub(crate) struct NextBookIdCommandResponse {
    pub next_book_id: i64,
}

impl NextBookIdCommandResponse {
    pub fn new(next_book_id: i64) -> Self {
        Self {
            next_book_id,
        }
    }
}

#[async_trait]
impl Command<NextBookIdCommandRequest, NextBookIdCommandResponse> for NextBookIdCommand {
    async fn execute(&self, _req: NextBookIdCommandRequest) -> Result<NextBookIdCommandResponse, CommandError> {
        self.catalog_service.next_book_id()
            .await.map_err(CommandError::from).map(NextBookIdCommandResponse::new)
    }
}
