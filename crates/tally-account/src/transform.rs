//! Rendering account names with an alternate separator.

use serde::{Deserialize, Serialize};

use crate::SEP;

/// Converts account names to and from a replacement separator.
///
/// Useful where `:` cannot appear, e.g. when account names become file or
/// directory names. With no replacement separator both directions are the
/// identity.
///
/// ```
/// use tally_account::AccountTransformer;
///
/// let xf = AccountTransformer::new(Some("__".into()));
/// assert_eq!(xf.render("Assets:BofA:Checking"), "Assets__BofA__Checking");
/// assert_eq!(xf.parse("Assets__BofA__Checking"), "Assets:BofA:Checking");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTransformer {
    /// Separator written in place of `:`. `None` leaves names untouched.
    #[serde(default)]
    pub rsep: Option<String>,
}

impl AccountTransformer {
    pub fn new(rsep: Option<String>) -> Self {
        Self { rsep }
    }

    /// Render an account name with the replacement separator.
    pub fn render(&self, account: &str) -> String {
        match &self.rsep {
            Some(rsep) => account.replace(SEP, rsep),
            None => account.to_owned(),
        }
    }

    /// Turn a rendered name back into an account name.
    pub fn parse(&self, transformed: &str) -> String {
        let mut buf = [0u8; 4];
        match self.rsep.as_deref() {
            Some(rsep) if !rsep.is_empty() => transformed.replace(rsep, SEP.encode_utf8(&mut buf)),
            _ => transformed.to_owned(),
        }
    }
}
