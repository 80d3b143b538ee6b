use crate::game::{placeholder_qr, seeded_rng};
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub link: AttrValue,
    pub seed: u64,
}

/// Decorative 10×10 block beside the booking link. It encodes nothing.
#[function_component(QrPlaceholder)]
pub fn qr_placeholder(p: &Props) -> Html {
    let pattern = use_memo(p.seed, |seed| placeholder_qr(&mut seeded_rng(*seed)));
    let cells = pattern
        .iter()
        .flatten()
        .map(|dark| html! { <div class={classes!("qr__cell", dark.then_some("qr__cell--dark"))}></div> })
        .collect::<Html>();
    html! {
        <div class="qr">
            <div class="qr__frame" aria-hidden="true">{ cells }</div>
            <div class="qr__caption">{ t("qr.caption") }</div>
            <a href={p.link.clone()} target="_blank" rel="noreferrer">{ t("qr.open_link") }</a>
        </div>
    }
}
