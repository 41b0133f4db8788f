//! Storage layer and host environment abstraction trait definition

mod language_source;
mod preference_store;

pub use language_source::{LanguageSource, StaticLanguageSource};
pub use preference_store::{MemoryPreferenceStore, PreferenceStore};
