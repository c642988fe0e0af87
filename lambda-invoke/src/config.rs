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

//! Configuration settings for a lambda-invoke session.
//!
//! Defaults are embedded from `config.toml` and may be overridden by a file
//! given on the command line. The answers collected by the prompts are kept in
//! a [`SessionConfig`] that lives for exactly one run.

use crate::error::{LambdaInvokeError, Result};
use ini::Ini;
use lazy_static::lazy_static;

lazy_static! {
    /// Built-in settings.
    pub static ref DEFAULT_CONF: Ini = Ini::load_from_str(include_str!("./config.toml")).unwrap();
}

/// Settings that seed the prompts and drive the invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    /// Credential profile offered at the first prompt.
    pub profile: String,
    /// Input file offered at the input path prompt.
    pub input_path: String,
    /// Output file offered at the output path prompt.
    pub output_path: String,
    /// Environment variable that selects the credential profile.
    pub profile_variable: String,
    /// Lambda invocation type, `RequestResponse` for a synchronous call.
    pub invocation_type: String,
}

impl Defaults {
    /// Reads the settings from `conf`, falling back to the built-in value for
    /// every key the file does not define.
    pub fn from_ini(conf: &Ini) -> Result<Self> {
        Ok(Defaults {
            profile: setting(conf, "session", "profile")?,
            input_path: setting(conf, "session", "input_path")?,
            output_path: setting(conf, "session", "output_path")?,
            profile_variable: setting(conf, "aws", "profile_variable")?,
            invocation_type: setting(conf, "aws", "invocation_type")?,
        })
    }

    /// Loads the settings from an optional override file.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Defaults::from_ini(&Ini::load_from_file(path)?),
            None => Defaults::from_ini(&DEFAULT_CONF),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults::from_ini(&DEFAULT_CONF).unwrap()
    }
}

fn setting(conf: &Ini, section: &str, key: &str) -> Result<String> {
    conf.get_from(Some(section), key)
        .or_else(|| DEFAULT_CONF.get_from(Some(section), key))
        .map(str::to_string)
        .ok_or_else(|| LambdaInvokeError::Config(format!("missing [{}] {}", section, key)))
}

/// The record collected by one session. It is created once per run and
/// handed to every pipeline step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Value of the profile variable when the session started, restored on exit.
    pub original_profile: Option<String>,
    /// Credential profile selected for the invocation.
    pub profile: String,
    /// Target function. Never empty once the function name prompt returns.
    pub function_name: String,
    /// File whose bytes become the invocation payload.
    pub input_path: String,
    /// File the response envelope is written to.
    pub output_path: String,
}

impl SessionConfig {
    pub fn new(defaults: &Defaults, original_profile: Option<String>) -> Self {
        SessionConfig {
            original_profile,
            profile: defaults.profile.clone(),
            function_name: String::new(),
            input_path: defaults.input_path.clone(),
            output_path: defaults.output_path.clone(),
        }
    }
}
