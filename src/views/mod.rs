pub mod content;

mod docs_panel;
pub use docs_panel::*;

mod examples_panel;
pub use examples_panel::*;

mod form_panel;
pub use form_panel::*;

mod showcase;
pub use showcase::*;
