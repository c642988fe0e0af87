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

//! Scoped access to the credential profile environment variable.
//!
//! The AWS credential chain reads the selected profile from a process-wide
//! environment variable. [`ProfileGuard`] snapshots that variable when a
//! session starts and puts the snapshot back when the session ends, whether
//! the run succeeded, failed or unwound.

use log::debug;
use std::env;

/// Restores the credential profile variable to its value at capture time.
#[derive(Debug)]
pub struct ProfileGuard {
    variable: String,
    original: Option<String>,
    restored: bool,
}

impl ProfileGuard {
    /// Snapshots the current value of `variable`.
    pub fn capture(variable: &str) -> Self {
        let original = env::var(variable).ok();
        debug!("captured {}={:?}", variable, original);
        ProfileGuard {
            variable: variable.to_string(),
            original,
            restored: false,
        }
    }

    /// Value of the variable when the guard was created.
    pub fn original(&self) -> Option<&str> {
        self.original.as_deref()
    }

    /// Selects `profile` for every AWS client created until the guard is
    /// restored.
    pub fn activate(&mut self, profile: &str) {
        debug!("setting {}={}", self.variable, profile);
        env::set_var(&self.variable, profile);
        self.restored = false;
    }

    /// Puts back the captured value. An absent original removes the variable.
    pub fn restore(&mut self) {
        match self.original {
            Some(ref value) => env::set_var(&self.variable, value),
            None => env::remove_var(&self.variable),
        }
        debug!("restored {}={:?}", self.variable, self.original);
        self.restored = true;
    }
}

impl Drop for ProfileGuard {
    fn drop(&mut self) {
        if !self.restored {
            self.restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restores_previous_value() {
        let var = "LAMBDA_INVOKE_TEST_PROFILE_SET";
        env::set_var(var, "prod");

        let mut guard = ProfileGuard::capture(var);
        assert_eq!(guard.original(), Some("prod"));
        guard.activate("staging");
        assert_eq!(env::var(var).unwrap(), "staging");
        guard.restore();

        assert_eq!(env::var(var).unwrap(), "prod");
        env::remove_var(var);
    }

    #[test]
    fn removes_variable_that_was_absent() {
        let var = "LAMBDA_INVOKE_TEST_PROFILE_UNSET";
        env::remove_var(var);

        let mut guard = ProfileGuard::capture(var);
        guard.activate("staging");
        guard.restore();

        assert!(env::var(var).is_err());
    }

    #[test]
    fn drop_restores_without_explicit_call() {
        let var = "LAMBDA_INVOKE_TEST_PROFILE_DROP";
        env::set_var(var, "dev");

        {
            let mut guard = ProfileGuard::capture(var);
            guard.activate("staging");
        }

        assert_eq!(env::var(var).unwrap(), "dev");
        env::remove_var(var);
    }

    #[test]
    fn restoring_before_activation_keeps_value() {
        let var = "LAMBDA_INVOKE_TEST_PROFILE_IDLE";
        env::set_var(var, "dev");

        ProfileGuard::capture(var).restore();

        assert_eq!(env::var(var).unwrap(), "dev");
        env::remove_var(var);
    }
}
