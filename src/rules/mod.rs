// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit message validation.
//!
//! Rules live in a static table tagged with an execution tier. Validations
//! run in tier 1 and see the message as written; rewrites run afterwards.

mod builtin;
mod engine;
mod outcome;

pub use builtin::*;
pub use engine::{LintReport, RuleEngine};
pub use outcome::{Outcome, RuleOutcome};
