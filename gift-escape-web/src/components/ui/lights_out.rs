use crate::a11y::tile_label;
use crate::game::{LightsOut, NeighborRule, PuzzleId};
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardProps {
    pub cells: Vec<bool>,
    pub on_press: Callback<usize>,
}

/// 3×3 grid of toggle tiles. Lit tiles carry `tile--lit`.
#[function_component(LightsOutBoard)]
pub fn lights_out_board(p: &BoardProps) -> Html {
    let tiles = p
        .cells
        .iter()
        .enumerate()
        .map(|(idx, lit)| {
            let onclick = {
                let cb = p.on_press.clone();
                Callback::from(move |_| cb.emit(idx))
            };
            html! {
                <button
                    key={idx}
                    class={classes!("tile", lit.then_some("tile--lit"))}
                    aria-label={tile_label(idx)}
                    aria-pressed={lit.to_string()}
                    {onclick}
                />
            }
        })
        .collect::<Html>();
    html! { <div class="board" role="grid">{ tiles }</div> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_solved: Callback<PuzzleId>,
    #[prop_or_default]
    pub rule: NeighborRule,
}

/// The tool chest: solve the board and the lid opens.
#[function_component(LightsOutPuzzle)]
pub fn lights_out_puzzle(p: &Props) -> Html {
    let rule = p.rule;
    let board = use_state(move || LightsOut::new(rule));
    let opened = use_state(|| false);

    let on_press = {
        let board = board.clone();
        let opened = opened.clone();
        let on_solved = p.on_solved.clone();
        Callback::from(move |idx: usize| {
            let mut next = (*board).clone();
            let solved = next.toggle(idx);
            board.set(next);
            if solved {
                opened.set(true);
                on_solved.emit(PuzzleId::LightsOut);
            }
        })
    };

    html! {
        <div class="puzzle puzzle--grid">
            <p>{ t("puzzle.grid.prompt") }</p>
            <LightsOutBoard cells={board.cells().to_vec()} {on_press} />
            <div class="puzzle__footer">{ t("puzzle.grid.footer") }</div>
            if *opened {
                <div class="puzzle__opened">{ t("puzzle.grid.opened") }</div>
            }
        </div>
    }
}
