use futures::executor::block_on;
use gift_escape_web::components::footer::Footer;
use gift_escape_web::components::header::Header;
use gift_escape_web::components::ui::chapter_panel::ChapterPanel;
use gift_escape_web::components::ui::cipher_puzzle::CipherPuzzle;
use gift_escape_web::components::ui::confetti_layer::ConfettiLayer;
use gift_escape_web::components::ui::howto::Howto;
use gift_escape_web::components::ui::intro::Intro;
use gift_escape_web::components::ui::lights_out::{LightsOutBoard, LightsOutPuzzle};
use gift_escape_web::components::ui::qr_placeholder::QrPlaceholder;
use gift_escape_web::components::ui::tools_puzzle::ToolsPuzzle;
use gift_escape_web::components::ui::voucher::Voucher;
use gift_escape_web::game::{Configuration, PuzzleId, Stage, resolve};
use std::collections::BTreeMap;
use yew::html::ChildrenRenderer;
use yew::{AttrValue, Callback, LocalServerRenderer, html};

#[test]
fn header_lists_every_locale() {
    gift_escape_web::i18n::set_lang("en");
    let props = gift_escape_web::components::header::Props {
        on_lang_change: Callback::noop(),
        current_lang: "es".to_string(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("lang-select"));
    assert!(html.contains("Español"));
    assert!(html.contains("English"));
    assert!(html.contains("Gift Escape"));
    assert!(html.contains("Progress saved"));
}

#[test]
fn footer_renders_tip() {
    gift_escape_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("gift-footer"));
    assert!(html.contains("sawdust"));
}

#[test]
fn intro_greets_by_name() {
    gift_escape_web::i18n::set_lang("en");
    let props = gift_escape_web::components::ui::intro::Props {
        name: AttrValue::from("Sam"),
        on_begin: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Intro>::with_props(props).render());
    assert!(html.contains("Hey Sam, ready for a tiny escape?"));
    assert!(html.contains("begin-btn"));
    assert!(html.contains("href=\"#howto\""));
}

#[test]
fn chapter_panel_shows_progress_hints_and_notice() {
    gift_escape_web::i18n::set_lang("en");
    let props = gift_escape_web::components::ui::chapter_panel::Props {
        stage: Stage::Cipher,
        hints: 1,
        title: AttrValue::from("Reading the Grain"),
        notice: Some(AttrValue::from("It is Caesar.")),
        on_hint: Callback::noop(),
        on_reset: Callback::noop(),
        children: ChildrenRenderer::new(vec![html! { <p>{"puzzle body"}</p> }]),
    };
    let html = block_on(LocalServerRenderer::<ChapterPanel>::with_props(props).render());
    assert!(html.contains("Chapter 2 / 3"));
    assert!(html.contains("1 hint left"));
    assert!(html.contains("It is Caesar."));
    assert!(html.contains("hint-btn"));
    assert!(html.contains("reset-btn"));
    assert!(html.contains("puzzle body"));
}

#[test]
fn chapter_panel_without_notice_keeps_live_region_empty() {
    gift_escape_web::i18n::set_lang("en");
    let props = gift_escape_web::components::ui::chapter_panel::Props {
        stage: Stage::Tools,
        hints: 3,
        title: AttrValue::from("Workshop Prep"),
        notice: None,
        on_hint: Callback::noop(),
        on_reset: Callback::noop(),
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<ChapterPanel>::with_props(props).render());
    assert!(html.contains("Chapter 1 / 3"));
    assert!(html.contains("3 hints left"));
    assert!(!html.contains("hint-text"));
}

#[test]
fn tools_puzzle_starts_with_nothing_selected() {
    gift_escape_web::i18n::set_lang("en");
    let props = gift_escape_web::components::ui::tools_puzzle::Props {
        on_solved: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ToolsPuzzle>::with_props(props).render());
    for name in ["Saw", "Hammer", "Plane", "Ruler", "Brush", "Clamp"] {
        assert!(html.contains(name), "missing {name}");
    }
    assert!(!html.contains("tool--picked"));
    assert_eq!(html.matches("aria-pressed=\"false\"").count(), 6);
}

#[test]
fn cipher_puzzle_shows_derived_ciphertext_and_shift() {
    gift_escape_web::i18n::set_lang("en");
    let props = gift_escape_web::components::ui::cipher_puzzle::Props {
        on_solved: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CipherPuzzle>::with_props(props).render());
    assert!(html.contains("ROVVY GYBVN"));
    assert!(html.contains("cipher-answer"));
    assert!(html.contains("Shift by −10."));
}

#[test]
fn board_marks_lit_tiles() {
    gift_escape_web::i18n::set_lang("en");
    let props = gift_escape_web::components::ui::lights_out::BoardProps {
        cells: vec![true, false, true, false, true, false, true, false, true],
        on_press: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LightsOutBoard>::with_props(props).render());
    assert_eq!(html.matches("tile--lit").count(), 5);
    assert!(html.contains("Tile 1"));
    assert!(html.contains("Tile 9"));
}

#[test]
fn lights_out_puzzle_starts_closed() {
    gift_escape_web::i18n::set_lang("en");
    let props = gift_escape_web::components::ui::lights_out::Props {
        on_solved: Callback::from(|_: PuzzleId| {}),
        rule: gift_escape_web::game::NeighborRule::IndexWrap,
    };
    let html = block_on(LocalServerRenderer::<LightsOutPuzzle>::with_props(props).render());
    assert!(html.contains("Make all tiles calm"));
    assert!(!html.contains("puzzle__opened"));
}

#[test]
fn voucher_renders_resolved_fields() {
    gift_escape_web::i18n::set_lang("en");
    let mut overrides = BTreeMap::new();
    overrides.insert("name", "Alex");
    overrides.insert("location", "Girona");
    overrides.insert("link", "https://example.org/book");
    let config: Configuration = resolve(&overrides);
    let props = gift_escape_web::components::ui::voucher::Props {
        config,
        on_print: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Voucher>::with_props(props).render());
    assert!(html.contains("For Alex"));
    assert!(html.contains("Girona"));
    assert!(html.contains("14 Dec 2025"));
    assert!(html.contains("https://example.org/book"));
    assert!(html.contains("print-btn"));
}

#[test]
fn qr_placeholder_draws_a_full_grid() {
    gift_escape_web::i18n::set_lang("en");
    let props = gift_escape_web::components::ui::qr_placeholder::Props {
        link: AttrValue::from("https://example.com"),
        seed: 11,
    };
    let html = block_on(LocalServerRenderer::<QrPlaceholder>::with_props(props).render());
    assert_eq!(html.matches("class=\"qr__cell").count(), 100);
    assert!(html.contains("Open link"));
}

#[test]
fn howto_is_the_anchor_target() {
    gift_escape_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<Howto>::new().render());
    assert!(html.contains("id=\"howto\""));
    assert_eq!(html.matches("<li>").count(), 5);
}

#[test]
fn confetti_layer_is_empty_before_effects_run() {
    let props = gift_escape_web::components::ui::confetti_layer::Props {
        burst: gift_escape_web::app::ConfettiBurst::default().next(3),
    };
    let html = block_on(LocalServerRenderer::<ConfettiLayer>::with_props(props).render());
    assert!(html.contains("confetti-layer"));
    assert!(!html.contains("class=\"confetti\""));
}
