pub mod types;

pub use types::generate_type_conversion;
