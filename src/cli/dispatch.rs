// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook execution for the parsed command line.

use crate::config::{output_config_from_env, LintConfig};
use crate::error::Result;
use crate::hooks::{CommitMsgHook, HookOutcome};
use crate::report::TerminalReporter;

use super::args::Cli;

/// Run the hook for the given arguments.
pub fn run(cli: Cli) -> Result<HookOutcome> {
    tracing::debug!("msglint {}", crate::version::version_string());

    let output = output_config_from_env();
    let mut reporter = TerminalReporter::stderr(output);

    let hook = CommitMsgHook::new(LintConfig::default());
    let outcome = hook.run(&cli.message_file, &mut reporter)?;

    tracing::debug!("Hook finished: {:?}", outcome);
    Ok(outcome)
}
