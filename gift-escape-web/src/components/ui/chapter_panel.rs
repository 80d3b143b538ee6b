use crate::components::atoms::{Badge, Divider, Section};
use crate::game::Stage;
use crate::i18n::{t, t1, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub stage: Stage,
    pub hints: u8,
    pub title: AttrValue,
    #[prop_or_default]
    pub notice: Option<AttrValue>,
    pub on_hint: Callback<()>,
    pub on_reset: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// "3 hints left" / "1 hint left"
#[must_use]
pub fn hints_left_label(hints: u8) -> String {
    let count = hints.to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count.as_str());
    tr("chapter.hints_left", Some(&args))
}

/// Chapter frame: progress label, hint budget, hint and reset actions, then
/// the puzzle itself.
#[function_component(ChapterPanel)]
pub fn chapter_panel(p: &Props) -> Html {
    let on_hint = {
        let cb = p.on_hint.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_reset = {
        let cb = p.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let chapter = t1("chapter.label", "n", &p.stage.index().to_string());
    html! {
        <Section class="chapter">
            <div class="chapter__bar">
                <div class="chapter__status">
                    <span class="chapter__label">{ chapter }</span>
                    <Badge>{ hints_left_label(p.hints) }</Badge>
                </div>
                <div class="chapter__actions">
                    <button id="hint-btn" class="btn-secondary" onclick={on_hint}>{ t("chapter.get_hint") }</button>
                    <button id="reset-btn" class="btn-secondary" onclick={on_reset}>{ t("chapter.reset") }</button>
                </div>
            </div>
            <div class="chapter__notice" role="status" aria-live="polite">
                if let Some(notice) = p.notice.clone() {
                    <span class="hint-text">{ t("hint.label") }{": "}{ notice }</span>
                }
            </div>
            <Divider />
            <h2 class="chapter__title">{ p.title.clone() }</h2>
            { for p.children.iter() }
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_badge_pluralizes() {
        crate::i18n::set_lang("en");
        assert_eq!(hints_left_label(3), "3 hints left");
        assert_eq!(hints_left_label(1), "1 hint left");
        assert_eq!(hints_left_label(0), "0 hints left");
    }
}
