//! Account name validation.
//!
//! Valid account names:
//! - Must be non-empty
//! - Are one or more components joined by a single `:`
//! - Must not start or end with `:` nor contain `::`
//! - Each component starts with an uppercase ASCII letter or a digit
//! - The rest of a component is ASCII letters, digits, or `-`
//!
//! Only the general syntax is checked. Whether the first component names a
//! known root category is left to callers.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{AccountError, Result};
use crate::SEP;

/// Pattern matched by a single account component.
const COMPONENT_PATTERN: &str = r"[A-Z0-9][A-Za-z0-9\-]*";

/// Compiled account grammar, built on first use and read-only afterwards.
static ACCOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!("^{COMPONENT_PATTERN}(?:{SEP}{COMPONENT_PATTERN})*$");
    debug!(%pattern, "compiled account name pattern");
    Regex::new(&pattern).expect("account name pattern must compile")
});

/// Return `true` if `account` is a syntactically valid account name.
///
/// # Examples
///
/// ```
/// use tally_account::is_account_valid;
///
/// assert!(is_account_valid("Assets:BofA:Checking"));
/// assert!(!is_account_valid("assets:bofa"));
/// assert!(!is_account_valid("Assets::Checking"));
/// assert!(!is_account_valid(""));
/// ```
pub fn is_account_valid(account: &str) -> bool {
    ACCOUNT_RE.is_match(account)
}

/// Validate an account name, returning `Ok(())` if valid.
///
/// Accepts exactly the names [`is_account_valid`] accepts, and reports the
/// first rule a rejected name breaks.
///
/// ```
/// use tally_account::validate_account;
///
/// assert!(validate_account("Expenses:Food:Restaurant").is_ok());
/// assert!(validate_account("Expenses:").is_err());
/// ```
pub fn validate_account(name: &str) -> Result<()> {
    match account_violation(name) {
        None => Ok(()),
        Some(reason) => {
            debug!(account = name, %reason, "rejected account name");
            Err(AccountError::InvalidAccountName {
                name: name.to_string(),
                reason,
            })
        }
    }
}

/// Validate a single account component such as `BofA` or `2024`.
pub fn validate_component(component: &str) -> Result<()> {
    let violation = if component.contains(SEP) {
        Some(format!("component must not contain '{SEP}'"))
    } else {
        component_violation(component)
    };
    match violation {
        None => Ok(()),
        Some(reason) => Err(AccountError::InvalidComponent {
            component: component.to_string(),
            reason,
        }),
    }
}

fn account_violation(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("account name must not be empty".into());
    }
    if name.starts_with(SEP) {
        return Some(format!("must not start with '{SEP}'"));
    }
    if name.ends_with(SEP) {
        return Some(format!("must not end with '{SEP}'"));
    }
    if name.contains("::") {
        return Some("must not contain consecutive separators '::'".into());
    }
    name.split(SEP).find_map(component_violation)
}

fn component_violation(component: &str) -> Option<String> {
    let mut chars = component.chars();
    let first = match chars.next() {
        Some(ch) => ch,
        None => return Some("components must not be empty".into()),
    };
    if !(first.is_ascii_uppercase() || first.is_ascii_digit()) {
        return Some(format!(
            "component must start with an uppercase letter or digit: {component:?}"
        ));
    }
    chars
        .find(|ch| !(ch.is_ascii_alphanumeric() || *ch == '-'))
        .map(|ch| format!("component {component:?} contains forbidden character {ch:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_simple_names() {
        assert!(is_account_valid("Assets"));
        assert!(is_account_valid("Assets:BofA:Checking"));
        assert!(is_account_valid("Liabilities:US:Chase-Slate"));
        assert!(is_account_valid("Expenses:Taxes:Y2024:StateNY"));
    }

    #[test]
    fn digits_may_lead_a_component() {
        assert!(is_account_valid("Assets:401k"));
        assert!(is_account_valid("2024:Archive"));
    }

    #[test]
    fn reject_empty_name() {
        assert!(!is_account_valid(""));
        assert!(validate_account("").is_err());
    }

    #[test]
    fn reject_lowercase_components() {
        assert!(!is_account_valid("assets:bofa"));
        assert!(!is_account_valid("Assets:bofa"));
    }

    #[test]
    fn reject_separator_boundaries() {
        assert!(!is_account_valid(":Assets"));
        assert!(!is_account_valid("Assets:"));
        assert!(!is_account_valid("Assets::Checking"));
        assert!(!is_account_valid(":"));
    }

    #[test]
    fn reject_forbidden_chars() {
        assert!(!is_account_valid("Assets:Bof A"));
        assert!(!is_account_valid("Assets:Bof_A"));
        assert!(!is_account_valid("Assets:BofA\n"));
        assert!(!is_account_valid("Assets:Café"));
        assert!(!is_account_valid("-Assets"));
    }

    #[test]
    fn validate_agrees_with_pattern() {
        let samples = [
            "Assets",
            "Assets:BofA:Checking",
            "Assets:401k",
            "",
            ":Assets",
            "Assets:",
            "Assets::Checking",
            "assets",
            "Assets:bofa",
            "Assets:Bof_A",
            "Assets:Café",
            "A-:B-1",
        ];
        for sample in samples {
            assert_eq!(
                is_account_valid(sample),
                validate_account(sample).is_ok(),
                "disagreement on {sample:?}"
            );
        }
    }

    #[test]
    fn validate_reports_first_violation() {
        let err = validate_account("Assets::Checking").unwrap_err();
        match err {
            AccountError::InvalidAccountName { name, reason } => {
                assert_eq!(name, "Assets::Checking");
                assert!(reason.contains("'::'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = validate_account("Assets:checking").unwrap_err();
        assert!(err.to_string().contains("uppercase letter or digit"));

        let err = validate_account("Assets:Check!ng").unwrap_err();
        assert!(err.to_string().contains("'!'"));
    }

    #[test]
    fn shared_pattern_across_threads() {
        let samples = ["Assets:BofA:Checking", "assets:bofa", "Assets::Checking", "Income:US:Acme"];
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| samples.iter().map(|s| is_account_valid(s)).collect::<Vec<_>>())
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), [true, false, false, true]);
            }
        });
    }

    #[test]
    fn validate_single_component() {
        assert!(validate_component("BofA").is_ok());
        assert!(validate_component("2024").is_ok());
        assert!(validate_component("").is_err());
        assert!(validate_component("bofa").is_err());
        assert!(matches!(
            validate_component("BofA:Checking"),
            Err(AccountError::InvalidComponent { .. })
        ));
    }
}
