pub mod auth;
pub mod traits;

pub use auth::BearerAuthInterceptor;
pub use traits::ConsoleInterceptor;
