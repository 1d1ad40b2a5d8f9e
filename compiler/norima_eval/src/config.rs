//! Evaluator configuration.

/// Default bound on nested user function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

/// How a call frame finds names it does not bind itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scoping {
    /// The call frame's parent is the caller's frame at the call site, so a
    /// function body sees the caller's variables.
    #[default]
    Dynamic,
    /// The call frame's parent is the frame the function definition was
    /// found in.
    Lexical,
}

impl Scoping {
    /// Parse a scoping mode name (`dynamic` or `lexical`, case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("dynamic") {
            Some(Scoping::Dynamic)
        } else if s.eq_ignore_ascii_case("lexical") {
            Some(Scoping::Lexical)
        } else {
            None
        }
    }
}

/// Interpreter settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    pub scoping: Scoping,
    /// Maximum nesting of user function calls; `None` for unlimited.
    pub max_call_depth: Option<usize>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            scoping: Scoping::default(),
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EvalConfig::default();
        assert_eq!(config.scoping, Scoping::Dynamic);
        assert_eq!(config.max_call_depth, Some(DEFAULT_MAX_CALL_DEPTH));
    }

    #[test]
    fn test_parse_scoping() {
        assert_eq!(Scoping::parse("lexical"), Some(Scoping::Lexical));
        assert_eq!(Scoping::parse("Dynamic"), Some(Scoping::Dynamic));
        assert_eq!(Scoping::parse("static"), None);
    }
}
