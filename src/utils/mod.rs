pub mod logger;
pub mod render;
