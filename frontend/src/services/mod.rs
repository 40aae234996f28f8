pub mod auth;
pub mod http;
pub mod stories;
pub mod subscription;
