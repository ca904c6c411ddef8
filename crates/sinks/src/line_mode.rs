//! crates/sinks/src/line_mode.rs
//! Newline policy for line-oriented targets.

/// Controls whether a [`WriterTarget`](crate::WriterTarget) terminates each
/// rendered message with a newline.
///
/// Most diagnostics want one message per line; progress-style output that is
/// overwritten in place wants the raw rendering.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Append `\n` after every message.
    #[default]
    WithNewline,
    /// Emit the rendered message exactly as formatted.
    WithoutNewline,
}

impl LineMode {
    /// Returns true when this mode appends a trailing newline.
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_appends_newlines() {
        assert_eq!(LineMode::default(), LineMode::WithNewline);
        assert!(LineMode::WithNewline.append_newline());
        assert!(!LineMode::WithoutNewline.append_newline());
    }
}
