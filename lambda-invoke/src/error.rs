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

//! Lambda invoke error types

use std::error;
use std::fmt::{Display, Formatter};
use std::io;
use std::result;

/// Result type for operations that could result in a [LambdaInvokeError]
pub type Result<T> = result::Result<T, LambdaInvokeError>;

/// Lambda invoke error
#[derive(Debug)]
pub enum LambdaInvokeError {
    /// Error associated to I/O operations on the input and output files.
    IoError(io::Error),
    /// Error returned when reading or writing a named file fails. The first
    /// field says what was done to which path.
    FileIo(String, io::Error),
    /// Error returned when the interactive input is closed or interrupted
    /// while a prompt is waiting for an answer.
    Prompt(String),
    /// Error returned when a configuration file cannot be loaded.
    Config(String),
    /// Error returned when serde_json failed to serialize the response.
    SerdeJson(serde_json::Error),
    /// Error returned when invoking the AWS Lambda function fails, including
    /// credential resolution, transport and service-side faults.
    AWS(String),
    /// Error returned when an internal invariant is not verified.
    Internal(String),
}

impl From<io::Error> for LambdaInvokeError {
    fn from(e: io::Error) -> Self {
        LambdaInvokeError::IoError(e)
    }
}

impl From<serde_json::Error> for LambdaInvokeError {
    fn from(e: serde_json::Error) -> Self {
        LambdaInvokeError::SerdeJson(e)
    }
}

impl From<ini::Error> for LambdaInvokeError {
    fn from(e: ini::Error) -> Self {
        LambdaInvokeError::Config(e.to_string())
    }
}

impl From<ini::ParseError> for LambdaInvokeError {
    fn from(e: ini::ParseError) -> Self {
        LambdaInvokeError::Config(e.to_string())
    }
}

impl Display for LambdaInvokeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            LambdaInvokeError::IoError(ref desc) => write!(f, "IO error: {}", desc),
            LambdaInvokeError::FileIo(ref context, ref desc) => {
                write!(f, "IO error {}: {}", context, desc)
            }
            LambdaInvokeError::Prompt(ref desc) => write!(f, "Prompt error: {}", desc),
            LambdaInvokeError::Config(ref desc) => write!(f, "Config error: {}", desc),
            LambdaInvokeError::SerdeJson(ref desc) => write!(f, "serde_json error: {:?}", desc),
            LambdaInvokeError::AWS(ref desc) => write!(f, "AWS error: {}", desc),
            LambdaInvokeError::Internal(ref desc) => write!(f, "Internal error: {}", desc),
        }
    }
}

impl error::Error for LambdaInvokeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            LambdaInvokeError::IoError(ref e) => Some(e),
            LambdaInvokeError::FileIo(_, ref e) => Some(e),
            LambdaInvokeError::SerdeJson(ref e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_keep_their_source() {
        let err: LambdaInvokeError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.to_string(), "IO error: gone");
        assert!(error::Error::source(&err).is_some());
    }

    #[test]
    fn file_errors_name_the_path() {
        let err = LambdaInvokeError::FileIo(
            "reading ./input/input.json".to_string(),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "IO error reading ./input/input.json: gone");
        assert!(error::Error::source(&err).is_some());
    }
}
