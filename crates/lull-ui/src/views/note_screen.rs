//! Note screen view - the main UI composition.
//!
//! This view renders the "Add sleep note" screen: the feeling grid, the
//! activity grid, the save button, and the bottom navigation bar. It
//! subscribes to view-model state changes for reactive updates.
//!
//! ## Architecture
//!
//! - The view-model owns the draft (feeling, activities, timestamp)
//! - The UI owns a cached display snapshot of it
//! - Taps call intents; updated state flows back via subscription

use std::sync::Arc;

use gpui::{
    div, prelude::*, App, AsyncApp, ClickEvent, Context, ElementId, EventEmitter, FocusHandle,
    Focusable, FontWeight, InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    Styled, WeakEntity, Window,
};

use lull_core::{Activity, Feeling, SleepNoteDraft};

use crate::actions::{Dismiss, SaveNote};
use crate::keymap::NOTE_SCREEN_CONTEXT;
use crate::model::{activity_rows, feeling_rows, NoteDisplayState};
use crate::theme::{Theme, ThemeExt};
use crate::viewmodel::SleepModel;
use crate::views::{render_nav_bar, render_tile};

// =============================================================================
// Events
// =============================================================================

/// Events emitted by NoteScreen.
#[derive(Debug, Clone)]
pub enum NoteScreenEvent {
    /// Request to close the app window.
    Dismiss,
}

// =============================================================================
// Note Screen
// =============================================================================

/// The "Add sleep note" screen composition.
pub struct NoteScreen {
    /// View-model for intents and state.
    model: Arc<dyn SleepModel>,
    /// Cached draft snapshot for rendering.
    display: NoteDisplayState,
    /// Focus handle.
    focus_handle: FocusHandle,
}

impl NoteScreen {
    /// Create a new note screen.
    pub fn new(model: Arc<dyn SleepModel>, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();

        // Seed display state from the subscription's current snapshot
        let state_rx = model.subscribe();
        let display = NoteDisplayState::new(state_rx.borrow().clone());

        // Subscribe to draft changes
        cx.spawn(async move |this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let mut rx = state_rx;
            while rx.changed().await.is_ok() {
                let snapshot = rx.borrow().clone();
                let _ = this.update(cx, |this, cx| {
                    this.on_draft_changed(snapshot, cx);
                });
            }
        })
        .detach();

        Self {
            model,
            display,
            focus_handle,
        }
    }

    // -------------------------------------------------------------------------
    // Model State Changes
    // -------------------------------------------------------------------------

    fn on_draft_changed(&mut self, snapshot: SleepNoteDraft, cx: &mut Context<Self>) {
        self.display.sync(snapshot);
        cx.notify();
    }

    // -------------------------------------------------------------------------
    // Click Handlers
    // -------------------------------------------------------------------------

    fn on_feeling_click(&mut self, feeling: Feeling, _cx: &mut Context<Self>) {
        // State change will come via subscription
        self.model.select_feeling(feeling);
    }

    fn on_activity_click(&mut self, activity: Activity, _cx: &mut Context<Self>) {
        // State change will come via subscription
        self.model.toggle_activity(activity);
    }

    // -------------------------------------------------------------------------
    // Action Handlers
    // -------------------------------------------------------------------------

    fn on_save_note(&mut self, _: &SaveNote, _window: &mut Window, cx: &mut Context<Self>) {
        self.save(cx);
    }

    fn on_dismiss(&mut self, _: &Dismiss, _window: &mut Window, cx: &mut Context<Self>) {
        cx.emit(NoteScreenEvent::Dismiss);
    }

    /// Invoke the save intent exactly once.
    ///
    /// No screen-local validation: an empty selection is accepted. Failures
    /// are logged; this screen presents no error states.
    fn save(&mut self, cx: &mut Context<Self>) {
        let save = self.model.save_note();
        cx.spawn(async move |_this: WeakEntity<Self>, _cx: &mut AsyncApp| {
            if let Err(e) = save.await {
                tracing::error!("Failed to save sleep note: {}", e);
            }
        })
        .detach();
    }

    // -------------------------------------------------------------------------
    // Render Helpers
    // -------------------------------------------------------------------------

    /// Render a bold section header above a grid.
    fn render_section_header(text: &'static str, theme: &Theme) -> impl IntoElement {
        div()
            .text_size(theme.section_size)
            .font_weight(FontWeight::BOLD)
            .text_color(theme.text)
            .child(text)
    }

    /// Render one row of the feeling grid.
    fn render_feeling_row(
        &self,
        row: &'static [Feeling],
        theme: &Theme,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .justify_between()
            .children(row.iter().map(|&feeling| {
                let is_selected = self.display.is_feeling_selected(feeling);
                let id = ElementId::Name(SharedString::from(format!(
                    "feeling-{}",
                    feeling.label()
                )));
                render_tile(id, feeling.glyph(), feeling.label(), is_selected, theme).on_click(
                    cx.listener(move |this: &mut Self, _event: &ClickEvent, _window, cx| {
                        this.on_feeling_click(feeling, cx);
                    }),
                )
            }))
    }

    /// Render one row of the activity grid.
    fn render_activity_row(
        &self,
        row: &'static [Activity],
        theme: &Theme,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .justify_between()
            .children(row.iter().map(|&activity| {
                let is_selected = self.display.is_activity_selected(activity);
                let id = ElementId::Name(SharedString::from(format!(
                    "activity-{}",
                    activity.label()
                )));
                render_tile(id, activity.glyph(), activity.label(), is_selected, theme).on_click(
                    cx.listener(move |this: &mut Self, _event: &ClickEvent, _window, cx| {
                        this.on_activity_click(activity, cx);
                    }),
                )
            }))
    }

    /// Render the "Done" button.
    fn render_save_button(&self, theme: &Theme, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("save-note")
            .w_full()
            .h(theme.button_height)
            .flex()
            .items_center()
            .justify_center()
            .bg(theme.accent)
            .rounded(theme.button_radius)
            .cursor_pointer()
            .hover(|style| style.bg(theme.accent_hover))
            .on_click(
                cx.listener(|this: &mut Self, _event: &ClickEvent, _window, cx| {
                    this.save(cx);
                }),
            )
            .child(
                div()
                    .text_size(theme.button_text_size)
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.text)
                    .child("Done"),
            )
    }
}

// =============================================================================
// Focusable
// =============================================================================

impl Focusable for NoteScreen {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

// =============================================================================
// EventEmitter
// =============================================================================

impl EventEmitter<NoteScreenEvent> for NoteScreen {}

// =============================================================================
// Render
// =============================================================================

impl Render for NoteScreen {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();
        let noted_at = self.display.noted_at().format("%H:%M").to_string();

        div()
            .id("note-screen")
            .key_context(NOTE_SCREEN_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_save_note))
            .on_action(cx.listener(Self::on_dismiss))
            .size_full()
            .flex()
            .flex_col()
            .justify_between()
            .bg(theme.background)
            .font_family(theme.font_family.clone())
            // Title and grids
            .child(
                div()
                    .flex()
                    .flex_col()
                    .px(theme.screen_padding)
                    .pt_12()
                    .child(
                        div()
                            .w_full()
                            .text_center()
                            .text_size(theme.title_size)
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.text)
                            .child("Add sleep note"),
                    )
                    .child(
                        div()
                            .w_full()
                            .text_center()
                            .mt_1()
                            .text_size(theme.nav_label_size)
                            .text_color(theme.text_muted)
                            .child(noted_at),
                    )
                    .child(div().mt_6().mb_4().child(Self::render_section_header(
                        "How do you feel right now?",
                        &theme,
                    )))
                    .child(
                        div().flex().flex_col().gap(theme.row_gap).children(
                            feeling_rows().map(|row| self.render_feeling_row(row, &theme, cx)),
                        ),
                    )
                    .child(div().mt_8().mb_4().child(Self::render_section_header(
                        "Any pre-sleep activities?",
                        &theme,
                    )))
                    .child(
                        div().flex().flex_col().gap(theme.row_gap).children(
                            activity_rows().map(|row| self.render_activity_row(row, &theme, cx)),
                        ),
                    ),
            )
            // Save button and nav bar
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .px(theme.screen_padding)
                            .pb_8()
                            .child(self.render_save_button(&theme, cx)),
                    )
                    .child(render_nav_bar(&theme)),
            )
    }
}

// =============================================================================
// Tests
// =============================================================================
