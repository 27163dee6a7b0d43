pub mod database;

pub use database::ArangoDatabase;
