use crate::components::atoms::Pill;
use crate::game::{CipherPuzzle as Cipher, PuzzleId};
use crate::i18n::{t, t1};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_solved: Callback<PuzzleId>,
}

#[function_component(CipherPuzzle)]
pub fn cipher_puzzle(p: &Props) -> Html {
    let puzzle = use_memo((), |_| Cipher::default());
    let answer = use_state(String::new);

    let oninput = {
        let answer = answer.clone();
        let puzzle = puzzle.clone();
        let on_solved = p.on_solved.clone();
        Callback::from(move |e: InputEvent| {
            let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let value = input.value();
            let solved = puzzle.is_solved(&value);
            answer.set(value);
            if solved {
                on_solved.emit(PuzzleId::Cipher);
            }
        })
    };
    let shift = puzzle.shift().to_string();

    html! {
        <div class="puzzle puzzle--cipher">
            <p>
                { t("puzzle.cipher.prompt_rings") }{" "}
                <Pill>{ shift.clone() }</Pill>{" "}
                { t("puzzle.cipher.prompt_shift") }
            </p>
            <div class="cipher__row">
                <div class="cipher__secret" aria-label="ciphertext">{ puzzle.ciphertext() }</div>
                <span class="cipher__arrow" aria-hidden="true">{"→"}</span>
                <input
                    id="cipher-answer"
                    type="text"
                    autocomplete="off"
                    placeholder={t("puzzle.cipher.placeholder")}
                    value={(*answer).clone()}
                    {oninput}
                />
            </div>
            <div class="puzzle__footer">{ t1("puzzle.cipher.footer", "shift", &shift) }</div>
        </div>
    }
}
