//! Theme system providing colors, typography, and layout dimensions.
//!
//! Themes carry a light and a dark variant with the same semantic color
//! tokens; [`Appearance`] picks which one is active.

mod schema;
pub use schema::*;

mod deserializers;

mod appearance;
pub use appearance::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
