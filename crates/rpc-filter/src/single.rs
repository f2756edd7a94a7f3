//! Filter requests that encode `address` as a single string.
//!
//! Ganache rejects the array form of `address` in `eth_newFilter`, see
//! <https://github.com/web3j/web3j/issues/543>. A [`SingleAddressFilter`] holds exactly one address
//! and serializes it as `"address": "0x.."`. Everything else is delegated to the wrapped
//! [`FilterSpec`].

use crate::{
    error::FilterError,
    filter::{FilterSpec, Topic, parse_address},
};
use alloy_eips::BlockNumberOrTag;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize, Serializer};
use std::ops::Deref;

/// A [`FilterSpec`] with exactly one address, encoded as a plain string on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "FilterSpec")]
pub struct SingleAddressFilter(FilterSpec);

// === impl SingleAddressFilter ===

impl SingleAddressFilter {
    /// Creates a filter over the given block range and `address`.
    pub fn new(
        from_block: impl Into<BlockNumberOrTag>,
        to_block: impl Into<BlockNumberOrTag>,
        address: Address,
    ) -> Self {
        Self(FilterSpec::new(from_block, to_block, [address]))
    }

    /// Parses `address` and creates the filter.
    ///
    /// Fails with [`FilterError::EmptyAddress`] for an empty string, there is no encoding for
    /// "no address" in this form.
    pub fn parse(
        from_block: impl Into<BlockNumberOrTag>,
        to_block: impl Into<BlockNumberOrTag>,
        address: &str,
    ) -> Result<Self, FilterError> {
        Ok(Self::new(from_block, to_block, parse_address(address)?))
    }

    /// Returns the only address.
    pub fn address(&self) -> Address {
        self.0.addresses[0]
    }

    /// Returns the general form of this filter.
    pub fn as_spec(&self) -> &FilterSpec {
        &self.0
    }

    /// Returns the general form of this filter, which serializes `address` as an array.
    pub fn into_spec(self) -> FilterSpec {
        self.0
    }
}

impl Deref for SingleAddressFilter {
    type Target = FilterSpec;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<FilterSpec> for SingleAddressFilter {
    type Error = FilterError;

    fn try_from(spec: FilterSpec) -> Result<Self, Self::Error> {
        match spec.addresses.len() {
            1 => Ok(Self(spec)),
            n => Err(FilterError::AddressCount(n)),
        }
    }
}

impl From<SingleAddressFilter> for FilterSpec {
    fn from(filter: SingleAddressFilter) -> Self {
        filter.into_spec()
    }
}

/// Wire shape of a [`SingleAddressFilter`].
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SingleAddressRepr<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    from_block: Option<BlockNumberOrTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to_block: Option<BlockNumberOrTag>,
    address: &'a Address,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    topics: &'a Vec<Topic>,
}

impl Serialize for SingleAddressFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let spec = &self.0;
        SingleAddressRepr {
            from_block: spec.from_block,
            to_block: spec.to_block,
            address: &spec.addresses[0],
            topics: &spec.topics,
        }
        .serialize(serializer)
    }
}
