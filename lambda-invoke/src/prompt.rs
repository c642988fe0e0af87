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

//! Interactive questions asked by a session.

use crate::error::{LambdaInvokeError, Result};
use rustyline::error::ReadlineError;
use rustyline::Editor;

/// A source of answers to the session's questions.
pub trait Prompter {
    /// Shows `message` and waits for one line of input, without its line
    /// terminator.
    fn question(&mut self, message: &str) -> Result<String>;
}

/// Reads answers from the terminal with line editing.
pub struct TerminalPrompter {
    editor: Editor<()>,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        TerminalPrompter {
            editor: Editor::<()>::new(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn question(&mut self, message: &str) -> Result<String> {
        match self.editor.readline(message) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted) => Err(LambdaInvokeError::Prompt(
                "interrupted while waiting for input".to_string(),
            )),
            Err(ReadlineError::Eof) => Err(LambdaInvokeError::Prompt(
                "input closed while waiting for an answer".to_string(),
            )),
            Err(err) => Err(LambdaInvokeError::Prompt(err.to_string())),
        }
    }
}

/// Empty and whitespace-only answers keep the current value.
pub fn is_blank(answer: &str) -> bool {
    answer.trim().is_empty()
}

/// Asks `label`, offering `current` as the default, and replaces `current`
/// with the answer unless it is blank.
pub fn ask_or_keep<P: Prompter + ?Sized>(
    prompter: &mut P,
    label: &str,
    current: &mut String,
) -> Result<()> {
    let answer = prompter.question(&format!("{}: ({}) ", label, current))?;
    if !is_blank(&answer) {
        *current = answer;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) use self::scripted::ScriptedPrompter;

#[cfg(test)]
mod scripted {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    /// Answers questions from a fixed script. Running out of answers behaves
    /// like a closed terminal.
    pub(crate) struct ScriptedPrompter {
        answers: VecDeque<String>,
        asked: Arc<Mutex<Vec<String>>>,
        closed: Arc<AtomicBool>,
    }

    impl ScriptedPrompter {
        pub(crate) fn new(answers: &[&str]) -> Self {
            ScriptedPrompter {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                asked: Arc::new(Mutex::new(vec![])),
                closed: Arc::new(AtomicBool::new(false)),
            }
        }

        /// Questions shown so far, readable after the prompter is moved.
        pub(crate) fn asked(&self) -> Arc<Mutex<Vec<String>>> {
            self.asked.clone()
        }

        /// Set once the prompter has been dropped.
        pub(crate) fn closed(&self) -> Arc<AtomicBool> {
            self.closed.clone()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn question(&mut self, message: &str) -> Result<String> {
            self.asked.lock().unwrap().push(message.to_string());
            self.answers
                .pop_front()
                .ok_or_else(|| LambdaInvokeError::Prompt("script exhausted".to_string()))
        }
    }

    impl Drop for ScriptedPrompter {
        fn drop(&mut self) {
            self.closed.store(true, Ordering::SeqCst);
        }
    }
}
