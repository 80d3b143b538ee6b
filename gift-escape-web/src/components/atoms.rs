//! Small presentational building blocks shared by every stage view.
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Rounded card wrapping one block of content.
#[function_component(Section)]
pub fn section(p: &SectionProps) -> Html {
    html! {
        <section id={p.id.clone()} class={classes!("section", p.class.to_string())}>
            { for p.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct LabelProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Pill)]
pub fn pill(p: &LabelProps) -> Html {
    html! { <span class="pill">{ for p.children.iter() }</span> }
}

#[function_component(Badge)]
pub fn badge(p: &LabelProps) -> Html {
    html! { <span class="badge">{ for p.children.iter() }</span> }
}

#[function_component(Divider)]
pub fn divider() -> Html {
    html! { <div class="divider" role="separator"></div> }
}
