//! Decisions for document-level hover delegation.
//!
//! `mouseover` / `mouseout` bubble from whatever node is under the pointer, so
//! each event is first mapped to the closest attractable ancestor. These
//! functions then decide what that means for the single active element.

/// Element to register on `mouseover`, unless it is already the active one.
pub fn entered<H: PartialEq>(over: Option<H>, active: Option<H>) -> Option<H> {
    over.filter(|h| active.as_ref() != Some(h))
}

/// Element to unregister on `mouseout`.
///
/// Moving between descendants of the same attractable element is not a leave;
/// moving into a nested attractable element or out of the window is.
pub fn left<H: PartialEq>(from: Option<H>, to: Option<H>) -> Option<H> {
    from.filter(|h| to.as_ref() != Some(h))
}
