#![warn(missing_docs)]

//! Selection and form state for the showcase panels.
//!
//! Everything here is plain data with pure `(state, event) -> state`
//! transitions, so it can be exercised without a window or renderer.

mod ids;
pub use ids::*;

mod tabs;
pub use tabs::*;

mod accordion;
pub use accordion::*;

mod form;
pub use form::*;

mod showcase;
pub use showcase::*;
