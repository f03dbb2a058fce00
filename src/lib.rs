pub mod core;
pub mod utils;
pub mod books;
pub mod catalog;
pub mod gateway;
pub mod vehicles;
pub mod servers;
