use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::Catalog;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    library_name: String,
    // single logical owner; the lock only guards the shared service handle
    catalog: RwLock<Catalog>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, catalog: Catalog,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            library_name: config.library_name.to_string(),
            catalog: RwLock::new(catalog),
            events_publisher,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookEntity) -> LibraryResult<BookEntity> {
        // appends without enforcing id uniqueness, matching next_book_id's
        // compute-without-reserve contract
        self.catalog.write().await.books.push(book.clone());
        info!("added book {} to {}", book, self.library_name.as_str());
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "books", self.library_name.as_str(),
            book.id().to_string().as_str(), &HashMap::new(), book)?).await?;
        Ok(book.clone())
    }

    async fn remove_book(&self, id: i64) -> LibraryResult<()> {
        let removed = {
            let mut catalog = self.catalog.write().await;
            let index = catalog.index_by_book_id(id)?;
            catalog.books.remove(index)
        };
        info!("removed book {} from {}", removed, self.library_name.as_str());
        let _ = self.events_publisher.publish(&DomainEvent::deleted(
            "books", self.library_name.as_str(),
            id.to_string().as_str(), &HashMap::new(), &removed)?).await?;
        Ok(())
    }

    async fn next_book_id(&self) -> LibraryResult<i64> {
        Ok(self.catalog.read().await.next_book_id())
    }

    async fn index_by_book_id(&self, id: i64) -> LibraryResult<usize> {
        self.catalog.read().await.index_by_book_id(id)
    }

    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookEntity> {
        let catalog = self.catalog.read().await;
        let index = catalog.index_by_book_id(id)?;
        Ok(catalog.books[index].clone())
    }
}
