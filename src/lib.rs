pub mod auth;
pub mod config;
pub mod dex;
pub mod error;
pub mod oracle;
pub mod protocol;
pub mod routes;
pub mod state;

pub use routes::build_router;
