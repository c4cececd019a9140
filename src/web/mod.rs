//! Web front end: routes, handlers and page templates.

mod server;
pub mod templates;

pub use server::{ServerHandle, TaskServer, build_router, start_server};
