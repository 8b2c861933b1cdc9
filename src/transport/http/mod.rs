pub mod router;
pub mod types;
pub mod handlers {
    pub mod accounts;
    pub mod common;
    pub mod health;
    pub mod mint;
    pub mod site;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
