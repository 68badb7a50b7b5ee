pub mod event;
pub mod log_line;
pub mod records;
