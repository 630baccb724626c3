use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Translation status of a single tab.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationsState {
    /// The engine expects the page to be translated (e.g. a previously chosen pair).
    pub is_expected_translate: bool,
    /// The engine offers a translation for the page.
    pub is_offer_translate: bool,
    pub is_translated: bool,
    pub is_translate_processing: bool,
    pub is_restore_processing: bool,
    pub translation_engine_state: Option<TranslationEngineState>,
    pub supported_languages: Option<TranslationSupport>,
    pub translation_error: Option<TranslationError>,
}

/// Operation a success or failure report refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TranslationOperation {
    Translate,
    Restore,
    FetchLanguages,
}

/// State reported by the translation engine for a page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationEngineState {
    pub detected_languages: Option<DetectedLanguages>,
    pub error: Option<String>,
    pub is_engine_ready: Option<bool>,
    /// Set once the user (or an automatic rule) asked for a language pair.
    pub requested_translation_pair: Option<TranslationPair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectedLanguages {
    pub document_lang_tag: Option<String>,
    pub supported_document_lang: bool,
    pub user_preferred_lang_tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationPair {
    pub from_language: Option<String>,
    pub to_language: Option<String>,
}

/// Languages the engine can translate from and to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationSupport {
    pub from_languages: Option<Vec<Language>>,
    pub to_languages: Option<Vec<Language>>,
}

impl TranslationSupport {
    /// Support where the same set of codes is valid in both directions.
    pub fn symmetric<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let languages: Vec<Language> = codes.into_iter().map(Language::new).collect();
        Self {
            from_languages: Some(languages.clone()),
            to_languages: Some(languages),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    /// BCP 47 tag (e.g. "en", "fr").
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_display_name: Option<String>,
}

impl Language {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            localized_display_name: None,
        }
    }
}

/// Failure reported by the translation engine.
///
/// Stored in [`TranslationsState::translation_error`]; reducers never return it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TranslationError {
    #[error("Unknown translation error: {cause}")]
    Unknown { cause: String },

    #[error("Could not determine translation engine support{}", format_cause(.cause))]
    UnknownEngineSupport {
        #[serde(default)]
        cause: Option<String>,
    },

    #[error("Translation engine is not supported on this device")]
    EngineNotSupported,

    #[error("Could not translate the page{}", format_cause(.cause))]
    CouldNotTranslate {
        #[serde(default)]
        cause: Option<String>,
    },

    #[error("Could not restore the original page{}", format_cause(.cause))]
    CouldNotRestore {
        #[serde(default)]
        cause: Option<String>,
    },

    #[error("Could not load supported languages{}", format_cause(.cause))]
    CouldNotLoadLanguages {
        #[serde(default)]
        cause: Option<String>,
    },

    #[error("Language is not supported for translation")]
    LanguageNotSupported,
}

fn format_cause(cause: &Option<String>) -> String {
    match cause {
        Some(cause) => format!(": {}", cause),
        None => String::new(),
    }
}
