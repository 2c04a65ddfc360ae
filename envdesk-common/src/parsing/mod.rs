pub mod client;
pub mod handler;

pub use client::parse_console_client_args;
pub use handler::parse_handler_args;
