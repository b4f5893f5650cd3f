//! Small form controls shared by the basket views.
pub mod checkbox;
pub mod foundation;
pub mod radio;
pub mod text_field;

pub use checkbox::Checkbox;
pub use radio::Radio;
pub use text_field::TextField;
