use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::Catalog;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;

pub(crate) async fn create_catalog_service(config: &Configuration,
                                           seed: Option<Vec<BookEntity>>) -> Box<dyn CatalogService> {
    let catalog = match seed {
        Some(books) => Catalog::with_books(books),
        None => Catalog::new(),
    };
    let publisher = create_publisher().await;
    Box::new(CatalogServiceImpl::new(config, catalog, publisher))
}
