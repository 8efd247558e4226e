//! Plain-text rendering for terminal shells.

use super::{PageView, PAGE_HEADING, PAGE_TAGLINE};
use std::fmt::Write;

/// Renders a page view as lines of text.
pub fn render_page_text(view: &PageView) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{PAGE_HEADING}\n{PAGE_TAGLINE}\n");

    match view {
        PageView::Loading(loading) => {
            let _ = writeln!(out, "{}\n{}\n\n{}", loading.title, loading.description, loading.body);
        }
        PageView::Ready(list) => {
            let _ = writeln!(out, "{}\n{}\n", list.title, list.header);
            if let Some(empty) = &list.empty_state {
                let _ = writeln!(out, "{}\n{}", empty.title, empty.hint);
            }
            for item in &list.items {
                let mark = if item.completed { 'x' } else { ' ' };
                let _ = writeln!(out, "[{mark}] {}  ({})", item.text, item.id);
            }
        }
    }
    out
}
