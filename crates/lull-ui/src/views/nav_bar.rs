//! Bottom navigation bar.
//!
//! Four static icon+label destinations. Presentation only; no navigation is
//! wired on this screen.

use gpui::{div, prelude::*, IntoElement};

use crate::model::NavDestination;
use crate::theme::Theme;

/// Render the bottom navigation bar.
pub fn render_nav_bar(theme: &Theme) -> impl IntoElement {
    let text = theme.text;
    let icon_size = theme.nav_icon_size;
    let label_size = theme.nav_label_size;

    div()
        .w_full()
        .bg(theme.nav_background)
        .p_4()
        .flex()
        .justify_around()
        .children(NavDestination::ALL.into_iter().map(move |destination| {
            div()
                .flex()
                .flex_col()
                .items_center()
                .child(div().text_size(icon_size).child(destination.glyph()))
                .child(
                    div()
                        .text_size(label_size)
                        .text_color(text)
                        .child(destination.label()),
                )
        }))
}
