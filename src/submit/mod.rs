//! Group Submission Module
//!
//! Signs every transaction group and submits them concurrently. Groups do
//! not depend on each other's confirmation, so all are dispatched at once
//! and joined; each group's outcome is reported on its own.

mod dispatcher;

#[cfg(test)]
mod tests;

pub use dispatcher::submit_groups;
