// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git hook entry points.

mod commit_msg;

pub use commit_msg::{merge_msg_path, CommitMsgHook, HookOutcome, MERGE_MSG_FILE};
