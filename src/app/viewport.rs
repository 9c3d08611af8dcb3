use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::scroll::{ScrollMetrics, SectionBounds};

fn px(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.round() as u32
    } else {
        0
    }
}

/// Current window scroll state. All zero outside a browser.
pub fn read_metrics() -> ScrollMetrics {
    let Some(window) = web_sys::window() else {
        return ScrollMetrics::default();
    };
    let offset = window.scroll_y().map(px).unwrap_or_default();
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .map(px)
        .unwrap_or_default();
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height().max(0) as u32)
        .unwrap_or_default();
    ScrollMetrics::new(offset, viewport_height, document_height)
}

/// Absolute tops of the given anchors, skipping any that are not mounted.
pub fn measure_sections(ids: &[&'static str]) -> Vec<SectionBounds> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let Some(document) = window.document() else {
        return Vec::new();
    };
    let scroll_y = window.scroll_y().unwrap_or_default();
    ids.iter()
        .filter_map(|&id| match document.get_element_by_id(id) {
            Some(el) => Some(SectionBounds {
                id,
                top: px(el.get_bounding_client_rect().top() + scroll_y),
            }),
            None => {
                log::warn!("section anchor #{id} is not mounted");
                None
            }
        })
        .collect()
}

pub fn scroll_to_section(id: &str) {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::warn!("cannot scroll to missing section #{id}");
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}
