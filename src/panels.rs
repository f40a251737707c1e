use crate::constants::{DATE_LABEL, TIME_LABEL};
use crate::outcome::Outcome;
use web_sys as web;

pub const ACCEPT_PANEL_ID: &str = "accept-panel";
pub const DECLINE_PANEL_ID: &str = "decline-panel";

#[inline]
pub fn show(document: &web::Document, panel_id: &str) {
    if let Some(el) = document.get_element_by_id(panel_id) {
        _ = el.class_list().add_1("open");
        _ = el.set_attribute("aria-hidden", "false");
    }
}

#[inline]
pub fn hide(document: &web::Document, panel_id: &str) {
    if let Some(el) = document.get_element_by_id(panel_id) {
        _ = el.class_list().remove_1("open");
        _ = el.set_attribute("aria-hidden", "true");
    }
}

/// Slide the panel matching `outcome` up and the other one down.
pub fn sync(document: &web::Document, outcome: Outcome) {
    match outcome {
        Outcome::Idle => {
            hide(document, ACCEPT_PANEL_ID);
            hide(document, DECLINE_PANEL_ID);
        }
        Outcome::Accepted => {
            hide(document, DECLINE_PANEL_ID);
            show(document, ACCEPT_PANEL_ID);
        }
        Outcome::Declined => {
            hide(document, ACCEPT_PANEL_ID);
            show(document, DECLINE_PANEL_ID);
        }
    }
}

/// Fill the acceptance panel's date line.
pub fn write_date(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("accept-when") {
        el.set_inner_html(&format!(
            "le petit chef date awaits on <b>{}</b> @ <b>{}</b>",
            DATE_LABEL, TIME_LABEL
        ));
    }
}
