//! Account names for the Tally ledger.
//!
//! An account name is a colon-delimited path of capitalized components, such
//! as `Assets:BofA:Checking`, naming a place in the ledger's account tree.
//! This crate only deals with the names: accounts carrying balances or
//! postings live elsewhere and consume the strings produced and checked here.
//!
//! # Modules
//!
//! - [`error`] — Error types for validation
//! - [`names`] — Syntax validation: [`is_account_valid`], [`validate_account`]
//! - [`ops`] — Structural operations: split, join, parent, leaf, root,
//!   component membership, common prefix, ancestry
//! - [`transform`] — [`AccountTransformer`] for alternate separators
//! - [`account`] — The validated [`Account`] type
//!
//! Everything in [`ops`] is total: malformed input yields an empty string or
//! `false` rather than an error.

pub mod account;
pub mod error;
pub mod names;
pub mod ops;
pub mod transform;

pub use account::Account;
pub use error::{AccountError, Result};
pub use names::{is_account_valid, validate_account, validate_component};
pub use ops::{
    account_root, account_sans_root, common_prefix, has_account_component, join_account,
    leaf_account, parent_account, parent_matcher, parents, split_account, Parents,
};
pub use transform::AccountTransformer;

/// Separator between the components of an account name.
pub const SEP: char = ':';
