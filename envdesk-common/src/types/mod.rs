pub mod args;
pub mod descriptor;
pub mod http;

pub use args::{ConsoleClientArgs, HandlerArgs};
pub use descriptor::{OperationDescriptor, extract_placeholders};
pub use http::{ContentType, HttpMethod, PayloadLocation};
