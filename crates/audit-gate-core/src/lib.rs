//! Audit Gate core library
//!
//! Assertion evaluation, budget conversion and structural diffs over
//! performance-audit reports. The modules are public for the CLI and for
//! integration tests.

pub mod assertions;
pub mod budget;
pub mod commands;
pub mod diff;
pub mod report;
pub mod statistics;
pub mod utils;
