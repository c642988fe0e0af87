// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

#![warn(clippy::needless_borrow)]
#![allow(clippy::upper_case_acronyms)]

//! lambda-invoke asks for an AWS profile, a Lambda function name and two file
//! paths, invokes the function with the input file as payload and writes the
//! response envelope to the output file.

pub mod args;
pub mod config;
pub mod error;
pub mod lambda;
pub mod profile;
pub mod prompt;
pub mod rainbow;
pub mod session;

pub use config::{Defaults, SessionConfig};
pub use error::{LambdaInvokeError, Result};
pub use lambda::{InvocationOutput, Invoker, RusotoInvoker};
pub use prompt::{Prompter, TerminalPrompter};
pub use session::Session;
