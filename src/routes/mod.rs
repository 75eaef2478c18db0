/// Router Module Index
///
/// Splits the site's routes by concern. Access control is not applied here; the
/// access gate in `crate::gate` wraps the assembled router as a whole.

/// Content pages, declared as a static route table.
pub mod pages;

/// Login form, login submission and logout.
pub mod account;
