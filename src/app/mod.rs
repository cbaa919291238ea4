mod start;

pub use start::{migrate, start};
