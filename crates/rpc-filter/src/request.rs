//! JSON-RPC request bindings
use crate::{encoding::FilterRequest, error::FilterError, serde_helpers::sequence};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A JSON-RPC request object, a method call
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RpcMethodCall {
    /// The version of the protocol
    pub jsonrpc: Version,
    /// The name of the method to execute
    pub method: String,
    /// The filter object, sent as the only element of the `params` array
    #[serde(with = "sequence")]
    pub params: serde_json::Value,
    /// The identifier for this request issued by the client.
    pub id: Id,
}

// === impl RpcMethodCall ===

impl RpcMethodCall {
    /// Creates a call of `method` with `filter` as its only parameter.
    pub fn new(method: FilterMethod, id: Id, filter: &FilterRequest) -> Result<Self, FilterError> {
        let params = filter.to_params()?;
        debug!(
            target: "rpc_filter",
            %method,
            %id,
            encoding = %filter.encoding(),
            "created rpc call"
        );
        Ok(Self { jsonrpc: Version::V2, method: method.to_string(), params, id })
    }

    /// `eth_newFilter` call
    pub fn new_filter(id: Id, filter: &FilterRequest) -> Result<Self, FilterError> {
        Self::new(FilterMethod::NewFilter, id, filter)
    }

    /// `eth_getLogs` call
    pub fn get_logs(id: Id, filter: &FilterRequest) -> Result<Self, FilterError> {
        Self::new(FilterMethod::GetLogs, id, filter)
    }

    pub fn id(&self) -> Id {
        self.id.clone()
    }

    /// Returns the JSON text of this call.
    pub fn to_json(&self) -> Result<String, FilterError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// The methods that take a filter object as their only parameter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterMethod {
    #[default]
    #[serde(rename = "eth_newFilter")]
    NewFilter,
    #[serde(rename = "eth_getLogs")]
    GetLogs,
}

impl FilterMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NewFilter => "eth_newFilter",
            Self::GetLogs => "eth_getLogs",
        }
    }
}

impl fmt::Display for FilterMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eth_newFilter" | "new-filter" | "newFilter" => Ok(Self::NewFilter),
            "eth_getLogs" | "get-logs" | "getLogs" => Ok(Self::GetLogs),
            _ => Err(format!("unsupported filter method: {s}")),
        }
    }
}

/// Represents the version of the RPC protocol
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Version {
    #[serde(rename = "2.0")]
    V2,
}

/// Request Id
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    String(String),
    Number(i64),
    Null,
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => s.fmt(f),
            Self::Number(n) => n.fmt(f),
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<i64> for Id {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}
