//! `{{ env.VAR }}` interpolation for datasource files

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use searchlink_core::SearchlinkError;

/// Placeholder pattern: `{{ env.VAR_NAME }}` or `{{ env.VAR_NAME | fallback }}`
static ENV_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*env\.([A-Za-z_][A-Za-z0-9_]*)\s*(?:\|\s*([^}]*?)\s*)?\}\}").unwrap()
});

/// Replaces environment placeholders with their values
pub struct EnvInterpolator {
    /// Whether to fail on variables that are unset and have no fallback
    strict: bool,
}

impl EnvInterpolator {
    /// Strict mode: unset variables without a fallback are an error
    pub fn new() -> Self {
        Self { strict: true }
    }

    /// Lenient mode: unresolved placeholders are left untouched
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    /// Interpolate using the process environment
    pub fn interpolate(&self, content: &str) -> Result<String, SearchlinkError> {
        self.interpolate_with(content, |name| std::env::var(name).ok())
    }

    /// Interpolate using a custom variable lookup
    pub fn interpolate_with<F>(&self, content: &str, lookup: F) -> Result<String, SearchlinkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing: Vec<String> = Vec::new();

        let output = ENV_PATTERN.replace_all(content, |caps: &Captures| {
            let name = &caps[1];
            match lookup(name).or_else(|| caps.get(2).map(|m| m.as_str().to_string())) {
                Some(value) => value,
                None => {
                    if !missing.iter().any(|m| m == name) {
                        missing.push(name.to_string());
                    }
                    caps[0].to_string()
                }
            }
        });

        if self.strict && !missing.is_empty() {
            return Err(SearchlinkError::EnvVarNotFound(missing.join(", ")));
        }

        Ok(output.into_owned())
    }

    /// Check if a string contains environment placeholders
    pub fn has_placeholders(content: &str) -> bool {
        ENV_PATTERN.is_match(content)
    }

    /// Extract the referenced variable names, in order of appearance
    pub fn extract_var_names(content: &str) -> Vec<String> {
        ENV_PATTERN
            .captures_iter(content)
            .map(|cap| cap[1].to_string())
            .collect()
    }
}

impl Default for EnvInterpolator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_has_placeholders() {
        assert!(EnvInterpolator::has_placeholders("{{ env.ES_PASSWORD }}"));
        assert!(EnvInterpolator::has_placeholders("{{env.ES_HOST|localhost}}"));
        assert!(!EnvInterpolator::has_placeholders("host: localhost"));
        assert!(!EnvInterpolator::has_placeholders("{{ inputs.id }}"));
    }

    #[test]
    fn test_extract_var_names() {
        let content = "user: {{ env.ES_USER }}, pass: {{ env.ES_PASSWORD | changeme }}";
        assert_eq!(
            EnvInterpolator::extract_var_names(content),
            vec!["ES_USER".to_string(), "ES_PASSWORD".to_string()]
        );
    }

    #[test]
    fn test_interpolate_with_lookup() {
        let env = vars(&[("ES_USER", "elastic")]);
        let result = EnvInterpolator::new()
            .interpolate_with("username: {{ env.ES_USER }}", |n| env.get(n).cloned())
            .unwrap();
        assert_eq!(result, "username: elastic");
    }

    #[test]
    fn test_interpolate_fallback() {
        let env = vars(&[("ES_PORT", "9300")]);
        let interpolator = EnvInterpolator::new();

        let result = interpolator
            .interpolate_with("{{ env.ES_HOST | localhost }}:{{ env.ES_PORT | 9200 }}", |n| {
                env.get(n).cloned()
            })
            .unwrap();
        assert_eq!(result, "localhost:9300");
    }

    #[test]
    fn test_interpolate_missing_strict() {
        let err = EnvInterpolator::new()
            .interpolate_with("{{ env.A }} {{ env.B }} {{ env.A }}", |_| None)
            .unwrap_err();
        assert!(matches!(err, SearchlinkError::EnvVarNotFound(ref names) if names == "A, B"));
    }

    #[test]
    fn test_interpolate_missing_lenient() {
        let result = EnvInterpolator::lenient()
            .interpolate_with("password: {{ env.NOPE }}", |_| None)
            .unwrap();
        assert_eq!(result, "password: {{ env.NOPE }}");
    }

    #[test]
    fn test_interpolate_process_env() {
        let result = EnvInterpolator::new()
            .interpolate("{{ env.SEARCHLINK_SURELY_UNSET_VAR | fallback }}")
            .unwrap();
        assert_eq!(result, "fallback");
    }
}
