pub mod catalog;
pub mod config;
pub mod entry;
pub mod exporter;
pub mod notice;
pub mod resolver;
pub mod selection;
pub mod session;
pub mod suggestion;

pub use config::*;
pub use entry::*;
pub use exporter::*;
pub use notice::*;
pub use resolver::*;
pub use selection::*;
pub use session::*;
pub use suggestion::*;
