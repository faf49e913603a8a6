pub mod client;
pub mod error;
pub mod method;
pub mod request;
pub mod response;
