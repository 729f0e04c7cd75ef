//! Declarative content checks for the Google Fonts Showcase site.
//!
//! A check table names ordered predicates (substring, compound substring,
//! regex) over the site's `index.html` and `styles.css`. A run loads the
//! files once, evaluates every predicate, and reports a single verdict.
//!
//! - **[`core`]**: Pure evaluation logic. No I/O.
//! - **[`io`]**: Config, table files, and input loading.
//!
//! [`verify`] ties the two together; [`render`] turns a run into report text.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod render;
pub mod tables;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod verify;
