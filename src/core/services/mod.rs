pub mod codec;
pub mod recorder;
