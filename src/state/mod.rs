//! Browser state tree.
//!
//! Every type here is an immutable value snapshot. Reducers build new
//! snapshots; nothing is mutated in place once published by a store.

mod browser;
mod recover;
mod tab;
mod translations;

pub use browser::BrowserState;
pub use recover::RecoverableTab;
pub use tab::{ContentState, TabSessionState};
pub use translations::{
    DetectedLanguages, Language, TranslationEngineState, TranslationError, TranslationOperation,
    TranslationPair, TranslationSupport, TranslationsState,
};
