//! Compiled patterns
//!
//! A pattern keeps its source text and flags alongside the compiled matcher,
//! so it can always be rebuilt. The `last_index` cursor is mutable state that
//! is not part of construction input.

use regress::{Flags, Regex};
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A compiled pattern with a match cursor
#[derive(Debug)]
pub struct JsRegExp {
    /// The regex pattern
    pub source: String,
    /// The regex flags
    pub flags: String,
    /// Cursor used by global and sticky matching
    last_index: AtomicUsize,
    /// The compiled regex (if compilation succeeded)
    native_regex: Option<Regex>,
}

impl JsRegExp {
    /// Compile a new pattern; the cursor starts at 0
    pub fn new(source: impl Into<String>, flags: impl Into<String>) -> Self {
        let source = source.into();
        let flags = flags.into();
        let native_regex = Regex::with_flags(&source, Flags::from(flags.as_str())).ok();
        Self {
            source,
            flags,
            last_index: AtomicUsize::new(0),
            native_regex,
        }
    }

    /// Check if compilation succeeded
    pub fn is_compiled(&self) -> bool {
        self.native_regex.is_some()
    }

    /// Current cursor position
    pub fn last_index(&self) -> usize {
        self.last_index.load(Ordering::Relaxed)
    }

    /// Move the cursor
    pub fn set_last_index(&self, index: usize) {
        self.last_index.store(index, Ordering::Relaxed);
    }

    /// Check for the `g` flag
    pub fn is_global(&self) -> bool {
        self.flags.contains('g')
    }

    /// Check for the `y` flag
    pub fn is_sticky(&self) -> bool {
        self.flags.contains('y')
    }

    /// Find the next match, honoring and advancing the cursor for global and
    /// sticky patterns
    pub fn exec(&self, input: &str) -> Option<Range<usize>> {
        let re = self.native_regex.as_ref()?;
        let uses_cursor = self.is_global() || self.is_sticky();
        let start = if uses_cursor { self.last_index() } else { 0 };

        if start > input.len() || !input.is_char_boundary(start) {
            self.set_last_index(0);
            return None;
        }

        let found = re
            .find_from(input, start)
            .next()
            .filter(|m| !self.is_sticky() || m.start() == start);

        match found {
            Some(m) => {
                if uses_cursor {
                    self.set_last_index(m.end());
                }
                Some(m.start()..m.end())
            }
            None => {
                if uses_cursor {
                    self.set_last_index(0);
                }
                None
            }
        }
    }

    /// Check whether the pattern matches
    pub fn test(&self, input: &str) -> bool {
        self.exec(input).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_match() {
        let re = JsRegExp::new("b+", "");
        assert!(re.is_compiled());
        assert_eq!(re.exec("abbbc"), Some(1..4));
        assert_eq!(re.last_index(), 0);
    }

    #[test]
    fn test_case_insensitive() {
        let re = JsRegExp::new("abc", "i");
        assert!(re.test("xxABCxx"));
    }

    #[test]
    fn test_global_advances_cursor() {
        let re = JsRegExp::new("a", "g");
        assert_eq!(re.exec("aXa"), Some(0..1));
        assert_eq!(re.last_index(), 1);
        assert_eq!(re.exec("aXa"), Some(2..3));
        assert_eq!(re.last_index(), 3);
        assert_eq!(re.exec("aXa"), None);
        assert_eq!(re.last_index(), 0);
    }

    #[test]
    fn test_sticky_requires_match_at_cursor() {
        let re = JsRegExp::new("a", "y");
        re.set_last_index(1);
        assert_eq!(re.exec("aXa"), None);
        assert_eq!(re.last_index(), 0);
    }

    #[test]
    fn test_invalid_pattern() {
        let re = JsRegExp::new("(", "");
        assert!(!re.is_compiled());
        assert!(!re.test("("));
    }
}
