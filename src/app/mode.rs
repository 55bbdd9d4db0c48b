use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Form,   // Typing generator inputs
    Result, // Password shown, copy available
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Form => write!(f, "FORM"),
            Mode::Result => write!(f, "RESULT"),
        }
    }
}
