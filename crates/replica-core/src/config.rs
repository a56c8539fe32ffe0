//! Copy configuration

use serde::Deserialize;

/// Remaining composite descents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthBudget {
    /// No limit
    Unbounded,
    /// Descents left before truncation
    Remaining(usize),
}

impl DepthBudget {
    /// Consume one descent. `None` means the budget is exhausted.
    pub fn descend(self) -> Option<Self> {
        match self {
            Self::Unbounded => Some(Self::Unbounded),
            Self::Remaining(0) => None,
            Self::Remaining(n) => Some(Self::Remaining(n - 1)),
        }
    }
}

/// Options for a copy call.
///
/// Can be loaded from any serde format:
///
/// ```json
/// { "max_depth": 3 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CopyOptions {
    /// Maximum composite nesting to reproduce. Deeper branches are replaced
    /// by the truncation marker.
    /// Default: None (unbounded). `Some(0)` is not a valid depth and is also
    /// treated as unbounded.
    pub max_depth: Option<usize>,
}

impl CopyOptions {
    /// Create options with defaults (unbounded)
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the copy to `max_depth` levels of nesting
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Depth budget for a fresh call
    pub fn budget(&self) -> DepthBudget {
        match self.max_depth {
            Some(n) if n > 0 => DepthBudget::Remaining(n),
            _ => DepthBudget::Unbounded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_from_options() {
        assert_eq!(CopyOptions::new().budget(), DepthBudget::Unbounded);
        assert_eq!(
            CopyOptions::new().with_max_depth(0).budget(),
            DepthBudget::Unbounded
        );
        assert_eq!(
            CopyOptions::new().with_max_depth(2).budget(),
            DepthBudget::Remaining(2)
        );
    }

    #[test]
    fn test_descend() {
        let budget = DepthBudget::Remaining(1);
        assert_eq!(budget.descend(), Some(DepthBudget::Remaining(0)));
        assert_eq!(DepthBudget::Remaining(0).descend(), None);
        assert_eq!(
            DepthBudget::Unbounded.descend(),
            Some(DepthBudget::Unbounded)
        );
    }

    #[test]
    fn test_deserialize() {
        let opts: CopyOptions = serde_json::from_str(r#"{"max_depth": 3}"#).unwrap();
        assert_eq!(opts.max_depth, Some(3));

        let opts: CopyOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, CopyOptions::default());

        assert!(serde_json::from_str::<CopyOptions>(r#"{"depth": 3}"#).is_err());
    }
}
