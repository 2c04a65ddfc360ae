pub mod builder;
pub mod dynamic_params;

pub use builder::RequestBuilder;
pub use dynamic_params::{DynamicParamsProcessor, MethodParam, ParamRole};
