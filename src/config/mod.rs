// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for msglint.
//!
//! Rule limits are fixed defaults; there are no configuration files. The only
//! value taken from the environment is whether diagnostics are coloured,
//! computed once at startup and passed down explicitly.

mod loader;
mod schema;

pub use loader::{output_config_from, output_config_from_env};
pub use schema::*;
