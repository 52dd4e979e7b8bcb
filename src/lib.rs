pub mod bank;
pub mod csv;
pub mod error;
pub mod models;
pub mod prelude;
pub mod statement;
