use crate::components::atoms::Section;
use crate::i18n::{t, t1};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub name: AttrValue,
    pub on_begin: Callback<()>,
}

#[function_component(Intro)]
pub fn intro(p: &Props) -> Html {
    let on_click = {
        let cb = p.on_begin.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <Section class="intro">
            <span class="intro__icon" aria-hidden="true">{"🧩"}</span>
            <div class="intro__body">
                <h1>{ t1("intro.greeting", "name", &p.name) }</h1>
                <p>{ t("intro.body") }</p>
                <ul>
                    <li>{ t("intro.tips.brain") }</li>
                    <li>{ t("intro.tips.hints") }</li>
                    <li>{ t("intro.tips.autosave") }</li>
                </ul>
                <div class="intro__actions">
                    <button id="begin-btn" class="btn-primary" onclick={on_click}>{ t("intro.start") }</button>
                    <a href="#howto" class="btn-secondary">{ t("intro.howto") }</a>
                </div>
            </div>
        </Section>
    }
}
