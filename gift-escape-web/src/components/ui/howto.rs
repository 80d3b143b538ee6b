use crate::components::atoms::Section;
use crate::i18n::t;
use yew::prelude::*;

const STEPS: [&str; 5] = [
    "howto.personalize",
    "howto.link",
    "howto.build",
    "howto.deploy",
    "howto.test",
];

#[function_component(Howto)]
pub fn howto() -> Html {
    html! {
        <Section id={AttrValue::from("howto")} class="howto">
            <h3>{ t("howto.title") }</h3>
            <ol>
                { for STEPS.iter().map(|key| html! { <li>{ t(key) }</li> }) }
            </ol>
        </Section>
    }
}
