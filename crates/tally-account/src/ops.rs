//! Structural operations on account names.
//!
//! These functions work on the colon-delimited shape of their input and never
//! validate it: `parent_account("lower:case")` happily returns `"lower"`.
//! Callers that need a guarantee run [`crate::validate_account`] first.
//! All of them are total and fall back to an empty result at the edges.

use crate::SEP;

/// Join components with the account separator.
///
/// ```
/// use tally_account::join_account;
///
/// assert_eq!(join_account(["Assets", "BofA", "Checking"]), "Assets:BofA:Checking");
/// assert_eq!(join_account(Vec::<String>::new()), "");
/// ```
pub fn join_account<I, S>(components: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, component) in components.into_iter().enumerate() {
        if i > 0 {
            joined.push(SEP);
        }
        joined.push_str(component.as_ref());
    }
    joined
}

/// Split an account name into its components.
///
/// The empty string splits into a single empty component, so that
/// `join_account(split_account(x)) == x` holds for every `x`.
pub fn split_account(account: &str) -> Vec<String> {
    account.split(SEP).map(str::to_owned).collect()
}

/// Name of the parent account, or `""` for a single-component account.
pub fn parent_account(account: &str) -> String {
    match account.rfind(SEP) {
        Some(pos) => account[..pos].to_owned(),
        None => String::new(),
    }
}

/// The last component of an account name.
pub fn leaf_account(account: &str) -> String {
    match account.rfind(SEP) {
        Some(pos) => account[pos + 1..].to_owned(),
        None => account.to_owned(),
    }
}

/// The account name without its root component.
///
/// ```
/// use tally_account::account_sans_root;
///
/// assert_eq!(account_sans_root("Assets:BofA:Checking"), "BofA:Checking");
/// assert_eq!(account_sans_root("Assets"), "");
/// ```
pub fn account_sans_root(account: &str) -> String {
    account
        .split_once(SEP)
        .map(|(_, rest)| rest.to_owned())
        .unwrap_or_default()
}

/// The first `num_components` components of an account name.
///
/// The result borrows from `account`. Asking for zero or a negative number of
/// components yields `""`; asking for at least as many components as the
/// account has yields the whole input.
///
/// ```
/// use tally_account::account_root;
///
/// assert_eq!(account_root("Assets:BofA:Checking", 2), "Assets:BofA");
/// assert_eq!(account_root("Assets:BofA:Checking", 0), "");
/// assert_eq!(account_root("Assets:BofA:Checking", -1), "");
/// assert_eq!(account_root("Assets:BofA:Checking", 10), "Assets:BofA:Checking");
/// ```
pub fn account_root(account: &str, num_components: isize) -> &str {
    match usize::try_from(num_components) {
        Ok(n) => leading_components(account, n),
        Err(_) => "",
    }
}

fn leading_components(account: &str, num_components: usize) -> &str {
    if num_components == 0 {
        return "";
    }
    match account.match_indices(SEP).nth(num_components - 1) {
        Some((pos, _)) => &account[..pos],
        None => account,
    }
}

/// Return `true` if `component` is one of the account's components.
///
/// Components must match whole: `NY` is not in `Expenses:Taxes:StateNY`.
pub fn has_account_component(account: &str, component: &str) -> bool {
    account.split(SEP).any(|c| c == component)
}

/// The longest run of leading components shared by all `accounts`.
///
/// Comparison is per component, never per character: `Expenses` and
/// `Explore` share nothing.
///
/// ```
/// use tally_account::common_prefix;
///
/// let accounts = ["Assets:BofA:Checking", "Assets:BofA:Savings"];
/// assert_eq!(common_prefix(&accounts), "Assets:BofA");
/// assert_eq!(common_prefix(&["Assets:BofA", "Liabilities:Visa"]), "");
/// ```
pub fn common_prefix<S: AsRef<str>>(accounts: &[S]) -> String {
    let Some((first, rest)) = accounts.split_first() else {
        return String::new();
    };
    let first = first.as_ref();
    let mut shared = first.split(SEP).count();
    for account in rest {
        let matching = first
            .split(SEP)
            .zip(account.as_ref().split(SEP))
            .take_while(|(a, b)| a == b)
            .count();
        shared = shared.min(matching);
        if shared == 0 {
            break;
        }
    }
    leading_components(first, shared).to_owned()
}

/// Iterate over an account and each of its ancestors, nearest first.
///
/// ```
/// use tally_account::parents;
///
/// let chain: Vec<&str> = parents("Assets:BofA:Checking").collect();
/// assert_eq!(chain, ["Assets:BofA:Checking", "Assets:BofA", "Assets"]);
/// ```
pub fn parents(account: &str) -> Parents<'_> {
    Parents {
        next: (!account.is_empty()).then_some(account),
    }
}

/// Iterator returned by [`parents`].
#[derive(Clone, Debug)]
pub struct Parents<'a> {
    next: Option<&'a str>,
}

impl<'a> Iterator for Parents<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let current = self.next?;
        self.next = current
            .rfind(SEP)
            .map(|pos| &current[..pos])
            .filter(|parent| !parent.is_empty());
        Some(current)
    }
}

/// Build a predicate matching `account` and all of its descendants.
///
/// ```
/// use tally_account::parent_matcher;
///
/// let is_bofa = parent_matcher("Assets:BofA");
/// assert!(is_bofa("Assets:BofA"));
/// assert!(is_bofa("Assets:BofA:Checking"));
/// assert!(!is_bofa("Assets:BofAmerica"));
/// ```
pub fn parent_matcher(account: &str) -> impl Fn(&str) -> bool {
    let account = account.to_owned();
    move |name: &str| match name.strip_prefix(account.as_str()) {
        Some(rest) => rest.is_empty() || rest.starts_with(SEP),
        None => false,
    }
}
