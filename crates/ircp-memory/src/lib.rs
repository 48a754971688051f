pub mod history;
pub mod slot;

pub use history::*;
pub use slot::*;
