pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::mint_service::MintService;
pub use domain::account::{AccountError, AccountStore, InMemoryAccountStore, SmartAccount};
pub use domain::site::SITE_CONFIG;
pub use infra::mint::{HttpSbtMinter, MintError, SbtMinter};
pub use storage::accounts::PostgresAccountStore;
