pub mod resolver;
pub mod sink;
