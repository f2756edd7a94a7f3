//! # rpc-filter
//!
//! Log filter requests for `eth_newFilter`/`eth_getLogs` with a selectable wire encoding for the
//! `address` field.
//!
//! Most nodes accept `address` as either a single value or an array. Ganache only accepts the
//! single string form, so filters aimed at it are built as a [`SingleAddressFilter`] instead of a
//! plain [`FilterSpec`]. Both types expose the same [`addresses`](FilterSpec::addresses) accessor;
//! only the JSON shape differs.
//!
//! ```
//! use alloy_eips::BlockNumberOrTag;
//! use alloy_primitives::address;
//! use rpc_filter::SingleAddressFilter;
//!
//! let filter = SingleAddressFilter::new(
//!     BlockNumberOrTag::Earliest,
//!     BlockNumberOrTag::Latest,
//!     address!("0xabc1230000000000000000000000000000000001"),
//! );
//! assert_eq!(
//!     serde_json::to_string(&filter).unwrap(),
//!     r#"{"fromBlock":"earliest","toBlock":"latest","address":"0xabc1230000000000000000000000000000000001"}"#
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate tracing;

pub mod config;
pub use config::FilterConfig;

pub mod encoding;
pub use encoding::{AddressEncoding, FilterRequest};

pub mod error;
pub use error::{ExtractConfigError, FilterError};

pub mod filter;
pub use filter::{FilterSpec, Topic};

pub mod request;
pub use request::{FilterMethod, Id, RpcMethodCall, Version};

pub mod serde_helpers;

pub mod single;
pub use single::SingleAddressFilter;
