use super::qr_placeholder::QrPlaceholder;
use crate::components::atoms::{Divider, Section};
use crate::game::Configuration;
use crate::i18n::{t, t1};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub config: Configuration,
    pub on_print: Callback<()>,
}

fn field(label_key: &str, value: &str, class: &'static str) -> Html {
    html! {
        <div class="voucher__field">
            <div class="voucher__label">{ t(label_key) }</div>
            <div class={class}>{ value.to_string() }</div>
        </div>
    }
}

#[function_component(Voucher)]
pub fn voucher(p: &Props) -> Html {
    let qr_seed = use_state(crate::dom::now_millis);
    let on_print = {
        let cb = p.on_print.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let cfg = &p.config;
    html! {
        <Section class="voucher">
            <div class="voucher__head">
                <span class="voucher__icon" aria-hidden="true">{"🎟️"}</span>
                <div>
                    <h2>{ t("voucher.title") }</h2>
                    <div class="voucher__for">{ t1("voucher.for", "name", &cfg.name) }</div>
                </div>
                <button id="print-btn" class="btn-primary" onclick={on_print}>{ t("voucher.print") }</button>
            </div>
            <Divider />
            <div class="voucher__body">
                <div class="voucher__fields">
                    { field("voucher.course", &cfg.course, "voucher__course") }
                    { field("voucher.date", &cfg.date, "voucher__value") }
                    { field("voucher.location", &cfg.location, "voucher__value") }
                    { field("voucher.from", &t("voucher.from_text"), "voucher__value") }
                    <p class="voucher__note">{ cfg.note.clone() }</p>
                </div>
                <QrPlaceholder link={AttrValue::from(cfg.link.clone())} seed={*qr_seed} />
            </div>
        </Section>
    }
}
