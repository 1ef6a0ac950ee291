//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Only complete `${...}` spans are handed to shellexpand; text around them,
/// including bare `$VAR` and `$5`, is copied verbatim. An unclosed `${` is
/// kept as literal text.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        let Some(close) = rest[start..].find('}') else {
            break;
        };
        let end = start + close + 1;
        out.push_str(&rest[..start]);
        out.push_str(&expand_span(&rest[start..end], field)?);
        rest = &rest[end..];
    }
    out.push_str(rest);

    Ok(out)
}

/// Expand a single `${VAR}` or `${VAR:-default}` span.
fn expand_span(span: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(span, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("APIDOC_TEST_SIMPLE", "hello");
        }
        let result = expand_env("${APIDOC_TEST_SIMPLE}", "macros.greeting").unwrap();
        assert_eq!(result, "hello");
        unsafe {
            std::env::remove_var("APIDOC_TEST_SIMPLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("APIDOC_TEST_UNSET");
        }
        let result = expand_env("v${APIDOC_TEST_UNSET:-1}", "macros.version").unwrap();
        assert_eq!(result, "v1");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("APIDOC_TEST_MISSING");
        }
        let err = expand_env("${APIDOC_TEST_MISSING}", "output.dir").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("APIDOC_TEST_MISSING"));
        assert!(err.to_string().contains("output.dir"));
    }

    #[test]
    fn test_bare_dollar_next_to_var_not_expanded() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("APIDOC_TEST_TIER", "Pro");
        }
        let result = expand_env("${APIDOC_TEST_TIER} costs $5", "macros.plan").unwrap();
        assert_eq!(result, "Pro costs $5");
        let result = expand_env("${APIDOC_TEST_TIER} home=$HOME", "macros.plan").unwrap();
        assert_eq!(result, "Pro home=$HOME");
        unsafe {
            std::env::remove_var("APIDOC_TEST_TIER");
        }
    }

    #[test]
    fn test_default_next_to_bare_dollar() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("APIDOC_TEST_PLAN_UNSET");
        }
        let result =
            expand_env("${APIDOC_TEST_PLAN_UNSET:-Pro} costs $5", "macros.plan").unwrap();
        assert_eq!(result, "Pro costs $5");
    }

    #[test]
    fn test_unclosed_brace_kept() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("APIDOC_TEST_OPEN", "x");
        }
        let result = expand_env("${APIDOC_TEST_OPEN} and ${oops", "macros.open").unwrap();
        assert_eq!(result, "x and ${oops");
        unsafe {
            std::env::remove_var("APIDOC_TEST_OPEN");
        }
    }

    #[test]
    fn test_expand_literal_unchanged() {
        let result = expand_env("Acme $5 plan", "macros.plan").unwrap();
        assert_eq!(result, "Acme $5 plan");
    }
}
