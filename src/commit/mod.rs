// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message handling.

mod message;
pub mod wrap;

pub use message::CommitMessage;
