//! Pure check logic: predicates, checks, reports, previews, statistics.
//!
//! Nothing here touches the filesystem; callers hand in already-loaded text.

pub mod check;
pub mod note;
pub mod predicate;
pub mod preview;
pub mod stats;
