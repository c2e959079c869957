use serde::{Deserialize, Serialize};

/// The checked exception the analyzer tracks.
pub const CHECKED_EXCEPTION_FQN: &str = "com.keyboardr.kotlinexceptiontest.CheckedException";

/// Annotation marking a higher-order function as safe to receive closures
/// that throw the checked exception.
pub const SAFE_FOR_CHECKED_EXCEPTION_FQN: &str =
    "com.keyboardr.kotlinexceptiontest.SafeForCheckedException";

/// Helper that runs a throwing block and converts the exception to a result.
pub const SAFE_CALL_HELPER: &str = "callSafely";

/// Identifiers the analysis compares against. Fixed per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub checked_exception: String,
    pub safe_marker: String,
    pub safe_call_helper: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            checked_exception: CHECKED_EXCEPTION_FQN.to_string(),
            safe_marker: SAFE_FOR_CHECKED_EXCEPTION_FQN.to_string(),
            safe_call_helper: SAFE_CALL_HELPER.to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Build a config tracking a different exception/marker pair, for hosts
    /// that embed the analyzer with their own types.
    pub fn new(checked_exception: &str, safe_marker: &str) -> Self {
        Self {
            checked_exception: checked_exception.to_string(),
            safe_marker: safe_marker.to_string(),
            safe_call_helper: SAFE_CALL_HELPER.to_string(),
        }
    }

    /// Exact qualified-name match against the checked exception.
    pub fn is_checked(&self, qualified_name: &str) -> bool {
        qualified_name == self.checked_exception
    }

    /// True if any of the names is the checked exception.
    pub fn contains_checked<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().any(|n| self.is_checked(n.as_ref()))
    }
}
