//! Configuration for a word-wrap session.

/// Characters that may break a word without being discarded.
pub const DEFAULT_BREAKPOINTS: &[char] = &['-'];

/// Characters treated as explicit line terminators.
pub const DEFAULT_NEWLINES: &[char] = &['\n'];

/// Immutable wrap parameters.
///
/// A `limit` of `0` disables wrapping entirely and turns the session
/// into a byte-for-byte copier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapOptions {
    /// Target width in visible columns.
    pub limit: usize,
    /// Valid in-word break points, kept literally in the output.
    pub breakpoints: Vec<char>,
    /// Characters treated as line terminators in the input.
    pub newlines: Vec<char>,
    /// When false, each written chunk is trimmed and its newlines become spaces.
    pub keep_newlines: bool,
    /// Force breaks at exactly `limit` columns, even inside a word.
    pub hard_wrap: bool,
    /// Substituted for tabs in hard-wrap mode
    pub tab_replacement: String,
    /// Flush trailing whitespace before a break instead of dropping it.
    pub preserve_spaces: bool,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            limit: 0,
            breakpoints: DEFAULT_BREAKPOINTS.to_vec(),
            newlines: DEFAULT_NEWLINES.to_vec(),
            keep_newlines: true,
            hard_wrap: false,
            tab_replacement: String::new(),
            preserve_spaces: false,
        }
    }
}

impl WrapOptions {
    /// Default options wrapping at `limit` columns.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn breakpoints(mut self, breakpoints: impl IntoIterator<Item = char>) -> Self {
        self.breakpoints = breakpoints.into_iter().collect();
        self
    }

    pub fn newlines(mut self, newlines: impl IntoIterator<Item = char>) -> Self {
        self.newlines = newlines.into_iter().collect();
        self
    }

    pub fn keep_newlines(mut self, keep: bool) -> Self {
        self.keep_newlines = keep;
        self
    }

    /// Enable hard wrapping, replacing tabs with `tab_replacement`.
    ///
    /// Tabs have no fixed width, so they cannot be counted exactly.
    pub fn hard_wrap(mut self, tab_replacement: impl Into<String>) -> Self {
        self.hard_wrap = true;
        self.tab_replacement = tab_replacement.into();
        self
    }

    pub fn preserve_spaces(mut self, preserve: bool) -> Self {
        self.preserve_spaces = preserve;
        self
    }

    /// Whether wrapping is switched off (`limit == 0`).
    pub fn is_passthrough(&self) -> bool {
        self.limit == 0
    }

    pub(crate) fn is_breakpoint(&self, c: char) -> bool {
        self.breakpoints.contains(&c)
    }

    pub(crate) fn is_newline(&self, c: char) -> bool {
        self.newlines.contains(&c)
    }
}
