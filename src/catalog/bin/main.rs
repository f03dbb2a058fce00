include!("../../lib.rs");
use crate::books::domain::model::BookEntity;
use crate::catalog::command::book_index_cmd::{BookIndexCommand, BookIndexCommandRequest};
use crate::catalog::command::next_book_id_cmd::{NextBookIdCommand, NextBookIdCommandRequest};
use crate::catalog::factory;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::utils::telemetry::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), CommandError> {
    setup_tracing();

    let config = Configuration::new("demo");

    let empty_svc = factory::create_catalog_service(&config, None).await;
    let next_id = NextBookIdCommand::new(empty_svc)
        .execute(NextBookIdCommandRequest::default()).await?;
    println!("{}", next_id.next_book_id); // 1

    let seeded_svc = factory::create_catalog_service(&config, Some(vec![
        BookEntity::new(1, "test_name_1", 200),
        BookEntity::new(2, "test_name_2", 400),
    ])).await;
    let next_id = NextBookIdCommand::new(seeded_svc).execute(NextBookIdCommandRequest::default()).await?;
    println!("{}", next_id.next_book_id); // 3

    let seeded_svc = factory::create_catalog_service(&config, Some(vec![
        BookEntity::new(1, "test_name_1", 200),
        BookEntity::new(2, "test_name_2", 400),
    ])).await;
    let index = BookIndexCommand::new(seeded_svc).execute(BookIndexCommandRequest::new(1)).await?;
    println!("{}", index.index); // 0

    Ok(())
}
