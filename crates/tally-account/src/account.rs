//! The validated [`Account`] name type.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AccountError, Result};
use crate::names::{validate_account, validate_component};
use crate::ops::{self, Parents};
use crate::SEP;

/// An account name that is known to be syntactically valid.
///
/// Every constructor runs [`validate_account`], so code holding an `Account`
/// can use the structural operations without re-checking. Serializes as a
/// plain string; deserialization validates.
///
/// ```
/// use tally_account::Account;
///
/// let checking: Account = "Assets:BofA:Checking".parse().unwrap();
/// assert_eq!(checking.leaf(), "Checking");
/// assert_eq!(checking.parent().unwrap().as_str(), "Assets:BofA");
/// assert!("assets".parse::<Account>().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Account(String);

impl Account {
    /// Validate and wrap an account name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_account(&name)?;
        Ok(Self(name))
    }

    /// Join components and validate the result.
    pub fn from_components<I, S>(components: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(ops::join_account(components))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the components, root first.
    pub fn components(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.split(SEP)
    }

    /// Number of components.
    pub fn depth(&self) -> usize {
        self.components().count()
    }

    /// The root component, e.g. `Assets`.
    pub fn root_component(&self) -> &str {
        ops::account_root(&self.0, 1)
    }

    /// The last component.
    pub fn leaf(&self) -> &str {
        match self.0.rfind(SEP) {
            Some(pos) => &self.0[pos + 1..],
            None => &self.0,
        }
    }

    /// The first `num_components` components. See [`ops::account_root`].
    pub fn root(&self, num_components: isize) -> &str {
        ops::account_root(&self.0, num_components)
    }

    /// The parent account, or `None` for a root-level account.
    pub fn parent(&self) -> Option<Account> {
        self.0
            .rfind(SEP)
            .map(|pos| Account(self.0[..pos].to_owned()))
    }

    /// The account without its root component, or `None` for a root-level
    /// account.
    pub fn sans_root(&self) -> Option<Account> {
        self.0
            .split_once(SEP)
            .map(|(_, rest)| Account(rest.to_owned()))
    }

    /// Return `true` if `component` is one of this account's components.
    pub fn has_component(&self, component: &str) -> bool {
        ops::has_account_component(&self.0, component)
    }

    /// This account and its ancestors, nearest first.
    pub fn parents(&self) -> Parents<'_> {
        ops::parents(&self.0)
    }

    /// Return `true` if `self` is `other` or one of its ancestors.
    pub fn is_ancestor_of(&self, other: &Account) -> bool {
        match other.0.strip_prefix(self.0.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with(SEP),
            None => false,
        }
    }

    /// A child account one level below this one.
    pub fn child(&self, component: &str) -> Result<Account> {
        validate_component(component)?;
        Ok(Account(format!("{}{SEP}{component}", self.0)))
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account({})", self.0)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Account {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Account {
    type Error = AccountError;

    fn try_from(name: String) -> Result<Self> {
        Self::new(name)
    }
}

impl TryFrom<&str> for Account {
    type Error = AccountError;

    fn try_from(name: &str) -> Result<Self> {
        Self::new(name)
    }
}

impl From<Account> for String {
    fn from(account: Account) -> Self {
        account.0
    }
}

impl AsRef<str> for Account {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Account {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Deref for Account {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}
