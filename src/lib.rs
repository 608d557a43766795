pub mod console;
pub mod games;
pub mod utils;
