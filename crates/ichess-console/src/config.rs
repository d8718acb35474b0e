//! Session settings adjustable at runtime with `set`.

/// Configuration knobs for a console session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Render the board after every command that changes it.
    pub auto_show: bool,
    /// Text written before each line of input is read.
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auto_show: true,
            prompt: String::from("> "),
        }
    }
}
