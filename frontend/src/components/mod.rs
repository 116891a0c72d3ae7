pub mod common;
pub mod subscription;
