// Accessibility helpers

/// Element id of the polite live region that announces dashboard changes.
pub const STATUS_REGION_ID: &str = "sim-status";

/// CSS for visible focus rings and the screen-reader-only utility class.
///
/// Injected early so keyboard users always see where focus is.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #a855f7;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Announce a message through the live region, if it is mounted.
pub fn set_status(msg: &str) {
    if let Some(node) = crate::dom::document().and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID)) {
        node.set_text_content(Some(msg));
    }
}
