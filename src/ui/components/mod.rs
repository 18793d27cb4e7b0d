mod footer;
mod form;
mod notice;
mod roster;
mod text_input;
pub mod theme;

pub use footer::Footer;
pub use form::{FormField, StudentForm, StudentFormState, FIELD_COUNT};
pub use notice::{Notice, NoticeSeverity, NoticeState};
pub use roster::{Roster, RosterState};
pub use text_input::TextInputState;
pub use theme::{ACCENT_ERROR, ACCENT_PRIMARY, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};
