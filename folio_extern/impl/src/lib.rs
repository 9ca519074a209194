pub mod http;
pub mod relay;
