pub mod postgres;

pub use postgres::{register_schema, schema_registered, PostgresAccountStore};
