pub mod add_book_cmd;
pub mod book_index_cmd;
pub mod next_book_id_cmd;
pub mod remove_book_cmd;
