mod handlers;
mod stages;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::ui::confetti_layer::ConfettiLayer;
use crate::components::ui::howto::Howto;
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let main_view = stages::render_stage(state, &handlers);

    html! {
        <div class="gift-shell">
            <Header
                on_lang_change={handlers.lang_change.clone()}
                current_lang={(*state.current_language).clone()}
            />
            <main id="main" role="main" class="gift-main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                { main_view }
                <Howto />
            </main>
            <Footer />
            <ConfettiLayer burst={(*state.confetti).clone()} />
        </div>
    }
}
