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

//! Invokes AWS Lambda functions.

use crate::error::{LambdaInvokeError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use log::info;
use rusoto_core::Region;
use rusoto_lambda::{InvocationRequest, InvocationResponse, Lambda, LambdaClient};
use serde::{Serialize, Serializer};

/// Sends one payload to a named function and returns the response envelope.
#[async_trait]
pub trait Invoker {
    async fn invoke(&self, function_name: &str, payload: Bytes) -> Result<InvocationOutput>;
}

/// Invokes functions through the AWS Lambda API.
#[derive(Debug, Clone)]
pub struct RusotoInvoker {
    invocation_type: String,
}

impl RusotoInvoker {
    pub fn new(invocation_type: &str) -> Self {
        RusotoInvoker {
            invocation_type: invocation_type.to_string(),
        }
    }
}

#[async_trait]
impl Invoker for RusotoInvoker {
    /// Invoke the lambda function with the given payload.
    ///
    /// # Arguments
    /// * `function_name` - The name of the lambda function.
    /// * `payload` - The payload to be passed to the lambda function, as is.
    ///
    /// # Returns
    /// The response envelope. A function-side error is still a successful
    /// invocation; it shows up in `function_error`.
    async fn invoke(&self, function_name: &str, payload: Bytes) -> Result<InvocationOutput> {
        // Built per call: region and credentials are resolved from the profile
        // variable, which is only set right before the invocation.
        let client = LambdaClient::new(Region::default());
        let request = InvocationRequest {
            function_name: function_name.to_string(),
            payload: Some(payload),
            invocation_type: Some(self.invocation_type.clone()),
            ..Default::default()
        };

        info!("invoking {} ({})", function_name, self.invocation_type);
        let response = client
            .invoke(request)
            .await
            .map_err(|e| LambdaInvokeError::AWS(e.to_string()))?;

        Ok(response.into())
    }
}

/// The response envelope of one invocation, serialised with the AWS field
/// names. Absent fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvocationOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_version: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_payload"
    )]
    pub payload: Option<Bytes>,
}

impl InvocationOutput {
    /// Renders the envelope as JSON indented with four spaces.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| LambdaInvokeError::Internal(e.to_string()))
    }
}

impl From<InvocationResponse> for InvocationOutput {
    fn from(response: InvocationResponse) -> Self {
        InvocationOutput {
            status_code: response.status_code,
            function_error: response.function_error,
            log_result: response.log_result,
            executed_version: response.executed_version,
            payload: response.payload,
        }
    }
}

// The payload is embedded without being parsed: text when it is UTF-8,
// byte values otherwise.
fn serialize_payload<S>(
    payload: &Option<Bytes>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match payload {
        Some(bytes) => match std::str::from_utf8(bytes) {
            Ok(text) => serializer.serialize_str(text),
            Err(_) => serializer.collect_seq(bytes.iter()),
        },
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
pub(crate) use self::stub::StubInvoker;
