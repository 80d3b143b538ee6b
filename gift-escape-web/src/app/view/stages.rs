use super::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::components::atoms::Section;
use crate::components::ui::chapter_panel::ChapterPanel;
use crate::components::ui::cipher_puzzle::CipherPuzzle;
use crate::components::ui::intro::Intro;
use crate::components::ui::lights_out::LightsOutPuzzle;
use crate::components::ui::tools_puzzle::ToolsPuzzle;
use crate::components::ui::voucher::Voucher;
use crate::game::{PuzzleId, Stage};
use crate::i18n::t;
use yew::prelude::*;

pub fn render_stage(state: &AppState, handlers: &AppHandlers) -> Html {
    let stage = state.progress.stage();
    match stage.puzzle() {
        Some(puzzle) => render_chapter(state, handlers, stage, puzzle),
        None if stage == Stage::Intro => html! {
            <Intro name={AttrValue::from(state.config.name.clone())} on_begin={handlers.begin.clone()} />
        },
        None => render_reward(state, handlers),
    }
}

fn render_chapter(state: &AppState, handlers: &AppHandlers, stage: Stage, puzzle: PuzzleId) -> Html {
    let notice = (*state.hint).map(|n| AttrValue::from(n.message()));
    // Keyed per chapter so each one mounts with fresh puzzle state.
    let body = match puzzle {
        PuzzleId::Tools => html! { <ToolsPuzzle key="tools" on_solved={handlers.solved.clone()} /> },
        PuzzleId::Cipher => html! { <CipherPuzzle key="cipher" on_solved={handlers.solved.clone()} /> },
        PuzzleId::LightsOut => html! { <LightsOutPuzzle key="grid" on_solved={handlers.solved.clone()} /> },
    };
    html! {
        <ChapterPanel
            stage={stage}
            hints={state.progress.hints()}
            title={AttrValue::from(t(puzzle.title_key()))}
            notice={notice}
            on_hint={handlers.hint.clone()}
            on_reset={handlers.reset.clone()}
        >
            { body }
        </ChapterPanel>
    }
}

fn render_reward(state: &AppState, handlers: &AppHandlers) -> Html {
    html! {
        <>
            <Section class="reward">
                <div class="reward__icon" aria-hidden="true">{"🎉"}</div>
                <h2>{ t("reward.title") }</h2>
                <p>{ t("reward.body") }</p>
            </Section>
            <Voucher config={(*state.config).clone()} on_print={handlers.print.clone()} />
        </>
    }
}
