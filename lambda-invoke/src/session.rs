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

//! One interactive invocation, from the first prompt to teardown.
//!
//! The pipeline runs strictly in order:
//!
//! 1. ask for the credential profile,
//! 2. ask for the function name until a non-blank one is given,
//! 3. ask for the input path,
//! 4. ask for the output path,
//! 5. read the input file,
//! 6. invoke the function with the selected profile active,
//! 7. write the response envelope to the output file.
//!
//! Any failure stops the pipeline and is logged once. Teardown always
//! restores the profile variable and releases the prompter.

use crate::config::{Defaults, SessionConfig};
use crate::error::{LambdaInvokeError, Result};
use crate::lambda::{InvocationOutput, Invoker};
use crate::profile::ProfileGuard;
use crate::prompt::{ask_or_keep, is_blank, Prompter};
use bytes::Bytes;
use log::{debug, error, warn};
use std::fs;
use std::io::Write;

const SEPARATOR: &str = "------";

/// Drives one run of the pipeline.
pub struct Session<P, I, W> {
    prompter: P,
    invoker: I,
    out: W,
    profile_variable: String,
    config: SessionConfig,
}

impl<P, I, W> Session<P, I, W>
where
    P: Prompter,
    I: Invoker,
    W: Write,
{
    /// Creates a session seeded with `defaults`. Progress lines go to `out`.
    pub fn new(defaults: &Defaults, prompter: P, invoker: I, out: W) -> Self {
        Session {
            prompter,
            invoker,
            out,
            profile_variable: defaults.profile_variable.clone(),
            config: SessionConfig::new(defaults, None),
        }
    }

    /// Runs the pipeline and tears down. Errors are logged, never returned.
    ///
    /// Returns `true` when the output file was written.
    pub async fn run(mut self) -> bool {
        let mut guard = ProfileGuard::capture(&self.profile_variable);
        self.config.original_profile = guard.original().map(str::to_string);

        let completed = match self.pipeline(&mut guard).await {
            Ok(()) => true,
            Err(e) => {
                error!("{}", e);
                false
            }
        };

        // Teardown.
        guard.restore();
        let Session { prompter, .. } = self;
        drop(prompter);
        debug!("session closed");

        completed
    }

    async fn pipeline(&mut self, guard: &mut ProfileGuard) -> Result<()> {
        self.ask_profile()?;
        self.ask_function_name()?;
        self.ask_input_path()?;
        self.ask_output_path()?;
        let input = self.read_input()?;
        let output = self.invoke_function(guard, input).await?;
        self.write_output(&output)
    }

    fn ask_profile(&mut self) -> Result<()> {
        ask_or_keep(
            &mut self.prompter,
            "Select AWS profile",
            &mut self.config.profile,
        )?;
        let line = format!("Selected profile: {}", self.config.profile);
        self.log_with_separator(&[line.as_str()])
    }

    /// Repeats the question until the answer is non-blank.
    fn ask_function_name(&mut self) -> Result<()> {
        loop {
            let answer = self.prompter.question("Select AWS Lambda Function Name: ")?;
            if !is_blank(&answer) {
                self.config.function_name = answer;
                break;
            }
            self.log(&["Please inform a Lambda Function name!"])?;
        }
        let line = format!("Selected function: {}", self.config.function_name);
        self.log_with_separator(&[line.as_str()])
    }

    fn ask_input_path(&mut self) -> Result<()> {
        ask_or_keep(
            &mut self.prompter,
            "Select input path",
            &mut self.config.input_path,
        )?;
        let line = format!("Selected input path: {}", self.config.input_path);
        self.log_with_separator(&[line.as_str()])
    }

    fn ask_output_path(&mut self) -> Result<()> {
        ask_or_keep(
            &mut self.prompter,
            "Select output path",
            &mut self.config.output_path,
        )?;
        let line = format!("Selected output path: {}", self.config.output_path);
        self.log_with_separator(&[line.as_str()])
    }

    fn read_input(&mut self) -> Result<Bytes> {
        self.log(&["Trying to read input", "..."])?;

        let input = fs::read(&self.config.input_path).map_err(|e| {
            LambdaInvokeError::FileIo(format!("reading {}", self.config.input_path), e)
        })?;
        debug!("read {} bytes from {}", input.len(), self.config.input_path);

        let text = String::from_utf8_lossy(&input).into_owned();
        self.log_with_separator(&["Successfully read input", text.as_str()])?;

        Ok(Bytes::from(input))
    }

    async fn invoke_function(
        &mut self,
        guard: &mut ProfileGuard,
        input: Bytes,
    ) -> Result<InvocationOutput> {
        guard.activate(&self.config.profile);

        self.log(&["Trying to invoke lambda function", "..."])?;

        let output = self
            .invoker
            .invoke(&self.config.function_name, input)
            .await?;
        if let Some(ref function_error) = output.function_error {
            warn!(
                "{} returned a function error: {}",
                self.config.function_name, function_error
            );
        }

        let json = output.to_json()?;
        self.log_with_separator(&["Successfully invoked lambda function", json.as_str()])?;

        Ok(output)
    }

    fn write_output(&mut self, output: &InvocationOutput) -> Result<()> {
        fs::write(&self.config.output_path, output.to_json()?).map_err(|e| {
            LambdaInvokeError::FileIo(format!("writing {}", self.config.output_path), e)
        })?;
        let line = format!("Successfully wrote output to {}", self.config.output_path);
        self.log_with_separator(&[line.as_str()])
    }

    fn log(&mut self, messages: &[&str]) -> Result<()> {
        for message in messages {
            writeln!(self.out, "{}", message)?;
        }
        Ok(())
    }

    fn log_with_separator(&mut self, messages: &[&str]) -> Result<()> {
        self.log(messages)?;
        self.log(&[SEPARATOR])
    }
}
