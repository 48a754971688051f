//! Compiled-in reference data. Nothing here is configurable at runtime.

pub mod compass;
pub mod states;
pub mod topics;
pub mod vocab;

pub use states::{state_by_id, state_by_symbol, symbol_key, StateRecord, SymbolKeyEntry, STATES, SYMBOL_KEY};
pub use topics::{topic_config, TopicConfig};
pub use vocab::{body_signal_catalog, NEEDS};
