use crate::constants::{HINT_ID, NOTICE_ID};
use panorama_core::Notice;
use web_sys as web;

#[inline]
fn show_element(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
fn hide_element(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Mirror the scene's hint flag onto the hint overlay.
pub fn set_hint_visible(document: &web::Document, visible: bool) {
    if visible {
        show_element(document, HINT_ID);
    } else {
        hide_element(document, HINT_ID);
    }
}

/// User-facing text for a notice.
pub fn notice_text(notice: &Notice) -> String {
    match notice {
        Notice::PopupBlocked { url, .. } => format!(
            "Your browser blocked a new tab. Allow pop-ups for this page or open {} directly.",
            url
        ),
        Notice::ActionFailed { message, .. } => format!("That link could not be opened: {}", message),
    }
}

pub fn show_notice(document: &web::Document, notice: &Notice) {
    if let Some(el) = document.get_element_by_id(NOTICE_ID) {
        el.set_text_content(Some(&notice_text(notice)));
    }
    show_element(document, NOTICE_ID);
}

pub fn hide_notice(document: &web::Document) {
    hide_element(document, NOTICE_ID);
}
