use crate::game::{PuzzleId, TOOLS, ToolSelection};
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_solved: Callback<PuzzleId>,
}

#[function_component(ToolsPuzzle)]
pub fn tools_puzzle(p: &Props) -> Html {
    let selection = use_state(ToolSelection::new);

    let tiles = TOOLS
        .iter()
        .enumerate()
        .map(|(idx, tool)| {
            let picked = selection.contains(idx);
            let onclick = {
                let selection = selection.clone();
                let on_solved = p.on_solved.clone();
                Callback::from(move |_| {
                    let mut next = (*selection).clone();
                    next.toggle(idx);
                    let solved = next.is_solved();
                    selection.set(next);
                    if solved {
                        on_solved.emit(PuzzleId::Tools);
                    }
                })
            };
            html! {
                <button
                    key={idx}
                    class={classes!("tool", picked.then_some("tool--picked"))}
                    aria-pressed={picked.to_string()}
                    {onclick}
                >
                    <span class="tool__icon" aria-hidden="true">{ tool.icon }</span>
                    <span class="tool__name">{ tool.name }</span>
                    <span class="tool__state">
                        if picked { { t("puzzle.tools.selected") } }
                    </span>
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="puzzle puzzle--tools">
            <p>{ t("puzzle.tools.prompt") }</p>
            <div class="tool-grid">{ tiles }</div>
            <div class="puzzle__footer">{ t("puzzle.tools.footer") }</div>
        </div>
    }
}
