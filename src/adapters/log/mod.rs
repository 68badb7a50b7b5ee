pub mod tailer;
pub mod writer;
