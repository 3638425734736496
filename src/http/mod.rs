pub mod error;
mod render;
pub mod server;
