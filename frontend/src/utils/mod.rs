pub mod constants;
pub mod demo;
pub mod storage;
pub mod url;
pub mod validation;
