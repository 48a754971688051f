pub mod layout;
pub mod pdf;

pub use pdf::*;
