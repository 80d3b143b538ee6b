use crate::components::atoms::Badge;
use crate::i18n::{locales, set_lang, t};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_lang_change: Callback<String>,
    pub current_lang: String,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                set_lang(&sel.value());
                cb.emit(sel.value());
            }
        })
    };
    let options = locales()
        .iter()
        .map(|meta| {
            html! {
                <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
            }
        })
        .collect::<Html>();
    html! {
        <header role="banner" class="gift-header">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <div class="header-left">
                    <span class="brand-icon" aria-hidden="true">{"🪵"}</span>
                    <span class="brand">{ t("app.title") }</span>
                </div>
                <div class="header-right">
                    <Badge>{ t("badge.no_spoilers") }</Badge>
                    <Badge>{ t("badge.progress_saved") }</Badge>
                    <nav aria-label={t("nav.language")}>
                        <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                        <select id="lang-select" onchange={on_change}>
                            { options }
                        </select>
                    </nav>
                </div>
            </div>
        </header>
    }
}
