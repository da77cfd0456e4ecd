use crate::dom;
use crate::markup::*;
use claw_core::PrizeOutcome;
use web_sys as web;

/// Build the instructions panel and wire its header button.
pub fn mount_instructions(document: &web::Document, open: bool) {
    let Some(root) = document.get_element_by_id(INSTRUCTIONS_ROOT_ID) else {
        log::warn!("[overlay] missing #{}", INSTRUCTIONS_ROOT_ID);
        return;
    };
    root.set_inner_html(&instructions_html(open));
    _ = root.set_attribute("data-open", if open { "1" } else { "0" });
    let doc = document.clone();
    dom::add_click_listener(document, INSTRUCTIONS_TOGGLE_ID, move || {
        toggle_instructions(&doc);
    });
}

#[inline]
pub fn instructions_open(document: &web::Document) -> bool {
    document
        .get_element_by_id(INSTRUCTIONS_ROOT_ID)
        .and_then(|el| el.get_attribute("data-open"))
        .map(|v| v == "1")
        .unwrap_or(false)
}

pub fn set_instructions_open(document: &web::Document, open: bool) {
    if let Some(root) = document.get_element_by_id(INSTRUCTIONS_ROOT_ID) {
        _ = root.set_attribute("data-open", if open { "1" } else { "0" });
    }
    if let Some(body) = document.get_element_by_id(INSTRUCTIONS_BODY_ID) {
        _ = body.set_attribute("style", body_style(open));
    }
    if let Some(glyph) = document.get_element_by_id(INSTRUCTIONS_GLYPH_ID) {
        glyph.set_text_content(Some(toggle_glyph(open)));
    }
}

#[inline]
pub fn toggle_instructions(document: &web::Document) {
    let open = !instructions_open(document);
    set_instructions_open(document, open);
}

/// Show the popup for `outcome`, or hide it when `None`.
pub fn sync_prize(document: &web::Document, outcome: Option<PrizeOutcome>) {
    let Some(el) = document.get_element_by_id(PRIZE_POPUP_ID) else {
        return;
    };
    match outcome {
        Some(o) => {
            el.set_inner_html(&popup_html(o));
            _ = el.set_attribute("style", "");
        }
        None => {
            el.set_inner_html("");
            _ = el.set_attribute("style", "display:none");
        }
    }
}
