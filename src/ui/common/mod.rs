//! Shared UI building blocks: form fields, popover menus, spinners and
//! inline messages.

pub mod form;
pub mod message;
pub mod popover;
pub mod spinner;

pub use form::{CheckboxField, FormField, SelectField};
pub use message::{ErrorMessage, InfoNote};
pub use popover::{Popover, PopoverItem};
pub use spinner::InlineSpinner;
