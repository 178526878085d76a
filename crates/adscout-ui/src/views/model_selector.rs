//! Model selector panel rendering.
//!
//! Render helpers for the model-choice rows and the confirm control. Click
//! handlers are attached by the parent view.

use gpui::{div, prelude::*, transparent_black, ElementId, SharedString, Stateful};

use adscout_core::ModelInfo;

use crate::theme::Theme;

/// Header line above the model choices.
pub fn render_header(theme: &Theme) -> gpui::Div {
    div()
        .w_full()
        .px_3()
        .py_2()
        .text_color(theme.text_muted)
        .text_sm()
        .child("Choose a search model")
}

/// Render one model-choice row (without click handler - that's added by
/// the caller).
pub fn render_model_row(
    model: &ModelInfo,
    index: usize,
    is_highlighted: bool,
    theme: &Theme,
) -> Stateful<gpui::Div> {
    let bg_color = if is_highlighted {
        theme.selection
    } else {
        transparent_black()
    };

    let name = model.name.clone();
    let description = model.description.clone();

    let mut row = div()
        .id(ElementId::Name(SharedString::from(format!(
            "model-{}",
            index
        ))))
        .w_full()
        .h(theme.item_height)
        .px_3()
        .flex()
        .items_center()
        .justify_between()
        .gap_2()
        .bg(bg_color)
        .rounded(theme.radius)
        .cursor_pointer()
        .hover(|style| style.bg(theme.surface_hover))
        .child(div().text_color(theme.text).child(name));

    if let Some(description) = description {
        row = row.child(
            div()
                .text_color(theme.text_muted)
                .text_sm()
                .text_ellipsis()
                .overflow_hidden()
                .child(description),
        );
    }

    row
}

/// Render the confirm control (without click handler - that's added by the
/// caller).
pub fn render_confirm_button(theme: &Theme) -> Stateful<gpui::Div> {
    div()
        .id("confirm-model")
        .px_3()
        .py_1()
        .flex()
        .items_center()
        .justify_center()
        .bg(theme.surface)
        .border_1()
        .border_color(theme.border)
        .rounded(theme.radius)
        .cursor_pointer()
        .hover(|style| style.bg(theme.surface_hover))
        .child(div().text_color(theme.text).child("Search"))
}
