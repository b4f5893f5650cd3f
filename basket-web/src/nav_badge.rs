use crate::dom;
use crate::error::WebError;
use basket_core::{BadgeUpdate, ItemKind, badge_update};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub const NAV_ALERT_SELECTOR: &str = ".js-site-nav__alert";

/// Sync every site navigation badge for `kind` with the basket contents.
///
/// # Errors
/// Returns an error if the badges cannot be queried or written.
pub fn update_site_nav_alert(kind: ItemKind, remaining: usize) -> Result<(), WebError> {
    for badge in dom::query_all(NAV_ALERT_SELECTOR)? {
        let data = dom::dataset(&badge);
        if data.get("key").map(String::as_str) != Some(kind.nav_key()) {
            continue;
        }
        match badge_update(remaining, data.get("otherCount").map(String::as_str)) {
            BadgeUpdate::Hide => hide_container(&badge)?,
            BadgeUpdate::Show(count) => {
                let count = count.to_string();
                badge.dataset().set("currentCount", &count)?;
                badge.set_inner_text(&count);
            }
        }
    }
    Ok(())
}

fn hide_container(badge: &HtmlElement) -> Result<(), WebError> {
    let container = badge
        .parent_element()
        .and_then(|parent| parent.parent_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    match container {
        Some(el) => el.style().set_property("display", "none")?,
        None => log::warn!("Navigation badge has no container to hide"),
    }
    Ok(())
}
