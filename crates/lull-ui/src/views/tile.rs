//! Selectable tile rendering.
//!
//! One helper serves both the feeling grid and the activity grid; the two
//! differ only in where their selection state comes from.

use gpui::{div, prelude::*, Div, ElementId, Stateful};

use crate::theme::Theme;

/// Render a circular glyph tile with its label below (without click handler -
/// that's added by the caller).
///
/// Highlighting is purely a function of `is_selected`.
pub fn render_tile(
    id: ElementId,
    glyph: &'static str,
    label: &'static str,
    is_selected: bool,
    theme: &Theme,
) -> Stateful<Div> {
    let fill = if is_selected {
        theme.accent
    } else {
        theme.surface
    };

    div()
        .id(id)
        .w(theme.tile_width)
        .flex()
        .flex_col()
        .items_center()
        .cursor_pointer()
        .child(
            div()
                .size(theme.tile_size)
                .rounded_full()
                .bg(fill)
                .flex()
                .items_center()
                .justify_center()
                .child(div().text_size(theme.glyph_size).child(glyph)),
        )
        .child(
            div()
                .mt_2()
                .text_size(theme.label_size)
                .text_color(theme.text)
                .child(label),
        )
}
