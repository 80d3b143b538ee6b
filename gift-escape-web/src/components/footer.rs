use crate::i18n::t;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="gift-footer">{ t("footer.text") }</footer>
    }
}
