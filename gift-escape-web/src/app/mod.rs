use yew::prelude::*;

pub mod state;
pub mod view;

pub use state::{AppState, ConfettiBurst, HintNotice};

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    view::render_app(&app_state)
}
