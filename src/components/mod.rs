mod accordion;
pub use accordion::*;

mod alert;
pub use alert::*;

mod badge;
pub use badge::*;

mod button;
pub use button::*;

mod card;
pub use card::*;

mod checkbox;
pub use checkbox::*;

mod icon;
pub use icon::*;

mod label;
pub use label::*;

mod progress;
pub use progress::*;

mod separator;
pub use separator::*;

mod switch;
pub use switch::*;

mod tabs;
pub use tabs::*;

mod text_field;
pub use text_field::*;
