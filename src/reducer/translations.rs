//! Reducer for per-tab translation state.

use crate::action::TranslationsAction;
use crate::mvi::Reducer;
use crate::state::{BrowserState, TranslationOperation, TranslationsState};

/// Folds [`TranslationsAction`]s into the targeted tab's [`TranslationsState`].
///
/// Every action is scoped to one tab. Unknown tab ids are a no-op.
/// Failures are recorded in `translation_error`, never returned.
pub struct TranslationsStateReducer;

impl Reducer for TranslationsStateReducer {
    type State = BrowserState;
    type Action = TranslationsAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        tracing::trace!(tab_id = action.tab_id(), "Reducing translations action");
        match action {
            TranslationsAction::TranslateExpected { tab_id } => {
                copy_with_translations_state(state, &tab_id, |it| TranslationsState {
                    is_expected_translate: true,
                    ..it
                })
            }

            TranslationsAction::TranslateOffer { tab_id } => {
                copy_with_translations_state(state, &tab_id, |it| TranslationsState {
                    is_offer_translate: true,
                    ..it
                })
            }

            TranslationsAction::TranslateStateChange {
                tab_id,
                translation_engine_state,
            } => copy_with_translations_state(state, &tab_id, |it| {
                // Both fields change in a single transition.
                let is_translated = it.is_translated
                    || translation_engine_state
                        .requested_translation_pair
                        .is_some();
                TranslationsState {
                    is_translated,
                    translation_engine_state: Some(translation_engine_state),
                    ..it
                }
            }),

            TranslationsAction::Translate { tab_id, .. } => {
                copy_with_translations_state(state, &tab_id, |it| TranslationsState {
                    is_translate_processing: true,
                    ..it
                })
            }

            TranslationsAction::TranslateRestore { tab_id } => {
                copy_with_translations_state(state, &tab_id, |it| TranslationsState {
                    is_restore_processing: true,
                    ..it
                })
            }

            TranslationsAction::TranslateSuccess { tab_id, operation } => match operation {
                TranslationOperation::Translate => {
                    copy_with_translations_state(state, &tab_id, |it| TranslationsState {
                        is_translated: true,
                        is_translate_processing: false,
                        translation_error: None,
                        ..it
                    })
                }
                TranslationOperation::Restore => {
                    copy_with_translations_state(state, &tab_id, |it| TranslationsState {
                        is_translated: false,
                        is_restore_processing: false,
                        translation_error: None,
                        ..it
                    })
                }
                // The language list itself arrives through TranslateSetLanguages.
                TranslationOperation::FetchLanguages => {
                    copy_with_translations_state(state, &tab_id, |it| TranslationsState {
                        translation_error: None,
                        ..it
                    })
                }
            },

            TranslationsAction::TranslateException {
                tab_id,
                operation,
                translation_error,
            } => {
                tracing::debug!(
                    tab_id = %tab_id,
                    ?operation,
                    error = %translation_error,
                    "Translation operation failed"
                );
                match operation {
                    TranslationOperation::Translate => {
                        copy_with_translations_state(state, &tab_id, |it| TranslationsState {
                            is_translate_processing: false,
                            translation_error: Some(translation_error),
                            ..it
                        })
                    }
                    TranslationOperation::Restore => {
                        copy_with_translations_state(state, &tab_id, |it| TranslationsState {
                            is_restore_processing: false,
                            translation_error: Some(translation_error),
                            ..it
                        })
                    }
                    TranslationOperation::FetchLanguages => {
                        copy_with_translations_state(state, &tab_id, |it| TranslationsState {
                            supported_languages: None,
                            translation_error: Some(translation_error),
                            ..it
                        })
                    }
                }
            }

            TranslationsAction::TranslateSetLanguages {
                tab_id,
                supported_languages,
            } => copy_with_translations_state(state, &tab_id, |it| TranslationsState {
                supported_languages: Some(supported_languages),
                translation_error: None,
                ..it
            }),
        }
    }
}

fn copy_with_translations_state<F>(state: BrowserState, tab_id: &str, update: F) -> BrowserState
where
    F: FnOnce(TranslationsState) -> TranslationsState,
{
    state.update_tab_or_custom_tab_state(tab_id, |current| {
        let mut tab = current.clone();
        tab.translations_state = update(tab.translations_state);
        tab
    })
}
