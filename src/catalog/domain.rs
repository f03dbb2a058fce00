pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookEntity) -> LibraryResult<BookEntity>;
    async fn remove_book(&self, id: i64) -> LibraryResult<()>;
    async fn next_book_id(&self) -> LibraryResult<i64>;
    async fn index_by_book_id(&self, id: i64) -> LibraryResult<usize>;
    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookEntity>;
}
