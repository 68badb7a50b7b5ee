pub mod last;
