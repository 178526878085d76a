//! Results panel rendering.
//!
//! Render helpers for the results list rows, the description/image detail
//! pane, and the open-feedback status line. Click handlers are attached by
//! the parent view.

use std::path::PathBuf;

use gpui::{
    div, img, prelude::*, px, transparent_black, AnyElement, ElementId, ScrollStrategy,
    SharedString, SharedUri, Stateful,
};
use gpui_component::VirtualListScrollHandle;

use adscout_core::Advertisement;

use crate::model::{OpenFeedback, ResultsState};
use crate::theme::Theme;

/// Scroll the results list to make the selected row visible.
///
/// Call this from the parent when the selection moves via keyboard.
pub fn scroll_to_cursor(scroll_handle: &VirtualListScrollHandle, selected_index: usize) {
    scroll_handle.scroll_to_item(selected_index, ScrollStrategy::Nearest);
}

/// Render one listing row (without click handler - that's added by the
/// caller).
pub fn render_ad_row(
    ad: &Advertisement,
    index: usize,
    is_selected: bool,
    theme: &Theme,
) -> Stateful<gpui::Div> {
    let bg_color = if is_selected {
        theme.selection
    } else {
        transparent_black()
    };

    let title = ad.title.clone();
    let description = ad.description.clone();

    let mut row = div()
        .id(ElementId::Name(SharedString::from(format!("ad-{}", index))))
        .w_full()
        .h(theme.item_height)
        .px_3()
        .flex()
        .flex_col()
        .justify_center()
        .bg(bg_color)
        .rounded(theme.radius)
        .cursor_pointer()
        .hover(|style| style.bg(theme.surface_hover))
        .child(
            div()
                .text_color(theme.text)
                .text_ellipsis()
                .overflow_hidden()
                .child(title),
        );

    if !description.is_empty() {
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

/// Render a toolbar button (without click handler - that's added by the
/// caller).
pub fn render_button(id: &'static str, label: &'static str, theme: &Theme) -> Stateful<gpui::Div> {
    div()
        .id(id)
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
        .child(div().text_color(theme.text).text_sm().child(label))
}

/// Render the description/image pane for the current selection.
pub fn render_detail_pane(results: &ResultsState, theme: &Theme) -> AnyElement {
    let Some(ad) = results.selected_ad() else {
        return div()
            .w_full()
            .h_full()
            .flex()
            .items_center()
            .justify_center()
            .text_color(theme.text_muted)
            .child("Select a listing")
            .into_any_element();
    };

    let mut pane = div()
        .w_full()
        .h_full()
        .flex()
        .flex_col()
        .gap_3()
        .child(
            div()
                .text_color(theme.text)
                .text_size(theme.font_size_large)
                .child(ad.title.clone()),
        );

    if !ad.description.is_empty() {
        pane = pane.child(
            div()
                .text_color(theme.text_muted)
                .child(ad.description.clone()),
        );
    }

    pane = pane.child(render_image_area(ad, results.image_index(), theme));
    pane.into_any_element()
}

/// Render the image area: the current image plus a position caption.
fn render_image_area(ad: &Advertisement, image_index: usize, theme: &Theme) -> AnyElement {
    let Some(source) = ad.image(image_index) else {
        return div()
            .w_full()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .bg(theme.surface)
            .rounded(theme.radius)
            .text_color(theme.text_muted)
            .child("No images")
            .into_any_element();
    };

    let image = if source.starts_with("http://") || source.starts_with("https://") {
        img(SharedUri::from(source.to_string()))
            .w_full()
            .h(px(360.0))
            .into_any_element()
    } else {
        img(PathBuf::from(source))
            .w_full()
            .h(px(360.0))
            .into_any_element()
    };

    div()
        .w_full()
        .flex_1()
        .flex()
        .flex_col()
        .gap_1()
        .child(image)
        .child(
            div()
                .text_color(theme.text_muted)
                .text_sm()
                .child(format!(
                    "Image {} of {}  (\u{2190}/\u{2192})",
                    image_index + 1,
                    ad.image_count()
                )),
        )
        .into_any_element()
}

/// Render the transient status line for the last open attempt.
pub fn render_feedback(feedback: &OpenFeedback, theme: &Theme) -> AnyElement {
    let (color, message) = match feedback {
        OpenFeedback::Opened { count: 1 } => (theme.success, "Opened in browser".to_string()),
        OpenFeedback::Opened { count } => (theme.success, format!("Opened {} listings", count)),
        OpenFeedback::Failed { error } => (theme.error, format!("Failed to open: {}", error)),
    };

    div()
        .w_full()
        .px_3()
        .py_1()
        .border_t_1()
        .border_color(theme.border)
        .text_color(color)
        .text_sm()
        .child(message)
        .into_any_element()
}

/// Render the empty-results placeholder.
pub fn render_empty(theme: &Theme) -> AnyElement {
    div()
        .id("results-list-empty")
        .w_full()
        .h_full()
        .flex()
        .items_center()
        .justify_center()
        .child(div().text_color(theme.text_muted).child("No results"))
        .into_any_element()
}
