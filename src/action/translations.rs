use serde::{Deserialize, Serialize};

use crate::mvi::Action;
use crate::state::{
    TranslationEngineState, TranslationError, TranslationOperation, TranslationSupport,
};

/// Translation events for a single tab, keyed by `tab_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TranslationsAction {
    /// The engine expects to translate the page.
    TranslateExpected { tab_id: String },
    /// The engine offers to translate the page.
    TranslateOffer { tab_id: String },
    /// The engine reported new page state.
    TranslateStateChange {
        tab_id: String,
        translation_engine_state: TranslationEngineState,
    },
    /// A translation was requested.
    Translate {
        tab_id: String,
        from_language: String,
        to_language: String,
    },
    /// Restoring the untranslated page was requested.
    TranslateRestore { tab_id: String },
    TranslateSuccess {
        tab_id: String,
        operation: TranslationOperation,
    },
    TranslateException {
        tab_id: String,
        operation: TranslationOperation,
        translation_error: TranslationError,
    },
    /// Languages fetched successfully.
    TranslateSetLanguages {
        tab_id: String,
        supported_languages: TranslationSupport,
    },
}

impl TranslationsAction {
    /// Id of the tab this action targets.
    pub fn tab_id(&self) -> &str {
        match self {
            TranslationsAction::TranslateExpected { tab_id }
            | TranslationsAction::TranslateOffer { tab_id }
            | TranslationsAction::TranslateStateChange { tab_id, .. }
            | TranslationsAction::Translate { tab_id, .. }
            | TranslationsAction::TranslateRestore { tab_id }
            | TranslationsAction::TranslateSuccess { tab_id, .. }
            | TranslationsAction::TranslateException { tab_id, .. }
            | TranslationsAction::TranslateSetLanguages { tab_id, .. } => tab_id,
        }
    }
}

impl Action for TranslationsAction {}
