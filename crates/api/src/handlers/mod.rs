pub mod fallback;
pub mod problems;
