/// Which surface receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// The entry form has the cursor
    #[default]
    Form,
    /// A modal notice is up and swallows everything but dismissal
    Notice,
}
