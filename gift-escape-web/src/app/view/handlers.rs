use crate::app::state::{AppState, HintNotice};
use crate::game::{ProgressEvent, PuzzleId};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppHandlers {
    pub begin: Callback<()>,
    pub solved: Callback<PuzzleId>,
    pub hint: Callback<()>,
    pub reset: Callback<()>,
    pub print: Callback<()>,
    pub lang_change: Callback<String>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            begin: build_begin(state),
            solved: build_solved(state),
            hint: build_hint(state),
            reset: build_reset(state),
            print: build_print(),
            lang_change: build_lang_change(state),
        }
    }
}

fn build_begin(state: &AppState) -> Callback<()> {
    let progress = state.progress.clone();
    let hint = state.hint.clone();
    Callback::from(move |()| {
        let mut controller = (*progress).clone();
        controller.begin();
        progress.set(controller);
        hint.set(None);
    })
}

fn build_solved(state: &AppState) -> Callback<PuzzleId> {
    let progress = state.progress.clone();
    let hint = state.hint.clone();
    let confetti = state.confetti.clone();
    Callback::from(move |puzzle: PuzzleId| {
        let mut controller = (*progress).clone();
        let event = controller.complete(puzzle);
        progress.set(controller);
        hint.set(None);
        if event == Some(ProgressEvent::ReachedReward) {
            confetti.set(confetti.next(crate::dom::now_millis()));
        }
    })
}

fn build_hint(state: &AppState) -> Callback<()> {
    let progress = state.progress.clone();
    let hint = state.hint.clone();
    Callback::from(move |()| {
        let mut controller = (*progress).clone();
        let notice = controller
            .consume_hint()
            .map_or(HintNotice::Exhausted, HintNotice::Revealed);
        progress.set(controller);
        hint.set(Some(notice));
    })
}

fn build_reset(state: &AppState) -> Callback<()> {
    let progress = state.progress.clone();
    let hint = state.hint.clone();
    Callback::from(move |()| {
        let mut controller = (*progress).clone();
        controller.reset();
        progress.set(controller);
        hint.set(None);
    })
}

fn build_print() -> Callback<()> {
    Callback::from(|()| crate::dom::print_page())
}

fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |lang: String| current_language.set(lang))
}
