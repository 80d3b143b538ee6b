// Accessibility helpers

/// Focus ring and screen-reader-only utility styles, injected ahead of the
/// first stage view.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #b45309;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Accessible label for a grid tile, 1-based as shown to the player.
#[must_use]
pub fn tile_label(index: usize) -> String {
    crate::i18n::t1("puzzle.grid.tile", "n", &(index + 1).to_string())
}
