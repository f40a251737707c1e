use crate::controller::Placement;
use web_sys as web;

/// Publish a placement to the evasive button's inline style.
pub fn apply(el: &web::HtmlElement, placement: Placement) {
    let style = el.style();
    match placement {
        Placement::Offset(p) => {
            _ = style.set_property("transform", &format!("translate({:.2}px, {:.2}px)", p.x, p.y));
        }
        Placement::Absolute(p) => {
            // First jump takes the button out of the flex row.
            _ = style.set_property("position", "fixed");
            _ = style.set_property("left", &format!("{:.0}px", p.x));
            _ = style.set_property("top", &format!("{:.0}px", p.y));
            _ = style.set_property("transform", "none");
        }
    }
}
