use crate::{error::FilterError, serde_helpers::lenient_addresses};
use alloy_eips::BlockNumberOrTag;
use alloy_primitives::{Address, B256};
use alloy_rpc_types_eth::{Filter, ValueOrArray};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single topic position: `null` matches anything, otherwise one hash or any of several.
pub type Topic = Option<ValueOrArray<B256>>;

/// The parameter object of an `eth_newFilter`/`eth_getLogs` call.
///
/// Serializes `address` as an array, and omits it when no address is set. See
/// [`SingleAddressFilter`](crate::SingleAddressFilter) for the single-string form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Integer block number, or "latest", "earliest", "pending", "safe", "finalized".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) from_block: Option<BlockNumberOrTag>,
    /// Same domain as `from_block`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) to_block: Option<BlockNumberOrTag>,
    /// Contract addresses from which logs should originate.
    #[serde(
        rename = "address",
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "lenient_addresses"
    )]
    pub(crate) addresses: Vec<Address>,
    /// Topics are order-dependent. Each topic can also be an array with "or" options.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) topics: Vec<Topic>,
}

// === impl FilterSpec ===

impl FilterSpec {
    /// Creates a filter over the given block range and addresses.
    ///
    /// An empty `addresses` means "no address filter".
    pub fn new(
        from_block: impl Into<BlockNumberOrTag>,
        to_block: impl Into<BlockNumberOrTag>,
        addresses: impl IntoIterator<Item = Address>,
    ) -> Self {
        Self {
            from_block: Some(from_block.into()),
            to_block: Some(to_block.into()),
            addresses: addresses.into_iter().collect(),
            topics: Vec::new(),
        }
    }

    /// Sets the lower block bound.
    pub fn with_from_block(mut self, block: impl Into<BlockNumberOrTag>) -> Self {
        self.from_block = Some(block.into());
        self
    }

    /// Sets the upper block bound.
    pub fn with_to_block(mut self, block: impl Into<BlockNumberOrTag>) -> Self {
        self.to_block = Some(block.into());
        self
    }

    /// Appends an address.
    pub fn with_address(mut self, address: Address) -> Self {
        self.addresses.push(address);
        self
    }

    /// Appends all addresses.
    pub fn with_addresses(mut self, addresses: impl IntoIterator<Item = Address>) -> Self {
        self.addresses.extend(addresses);
        self
    }

    /// Parses and appends all addresses, failing on the first malformed one.
    pub fn try_with_addresses<I>(mut self, addresses: I) -> Result<Self, FilterError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for address in addresses {
            self.addresses.push(parse_address(address.as_ref())?);
        }
        Ok(self)
    }

    /// Sets the topic at position `idx`, padding skipped positions with wildcards.
    pub fn with_topic(mut self, idx: usize, topic: ValueOrArray<B256>) -> Self {
        if self.topics.len() <= idx {
            self.topics.resize(idx + 1, None);
        }
        self.topics[idx] = Some(topic);
        self
    }

    /// Replaces all topics.
    pub fn with_topics(mut self, topics: impl IntoIterator<Item = Topic>) -> Self {
        self.topics = topics.into_iter().collect();
        self
    }

    pub fn from_block(&self) -> Option<BlockNumberOrTag> {
        self.from_block
    }

    pub fn to_block(&self) -> Option<BlockNumberOrTag> {
        self.to_block
    }

    /// Returns all addresses, regardless of how they are encoded on the wire.
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Returns the numeric value of the `fromBlock` field
    pub fn get_from_block_number(&self) -> Option<u64> {
        self.from_block.and_then(|block| block.as_number())
    }

    /// Returns the numeric value of the `toBlock` field
    pub fn get_to_block_number(&self) -> Option<u64> {
        self.to_block.and_then(|block| block.as_number())
    }
}

impl From<&FilterSpec> for Filter {
    fn from(spec: &FilterSpec) -> Self {
        let mut filter = Self::new();
        if let Some(from_block) = spec.from_block {
            filter = filter.from_block(from_block);
        }
        if let Some(to_block) = spec.to_block {
            filter = filter.to_block(to_block);
        }
        if !spec.addresses.is_empty() {
            filter = filter.address(ValueOrArray::Array(spec.addresses.clone()));
        }
        for (idx, topic) in spec.topics.iter().enumerate().take(4) {
            if let Some(topic) = topic {
                filter.topics[idx] = topic.clone().into();
            }
        }
        filter
    }
}

impl From<FilterSpec> for Filter {
    fn from(spec: FilterSpec) -> Self {
        Self::from(&spec)
    }
}

/// Parses a 20-byte hex address, with or without `0x` prefix.
pub fn parse_address(s: &str) -> Result<Address, FilterError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(FilterError::EmptyAddress);
    }
    Address::from_str(s).map_err(|err| FilterError::InvalidAddress {
        input: s.to_string(),
        reason: err.to_string(),
    })
}

/// Parses a block number (decimal or `0x` hex) or a block tag.
pub fn parse_block(s: &str) -> Result<BlockNumberOrTag, FilterError> {
    let s = s.trim();
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse::<u64>().map(BlockNumberOrTag::Number).map_err(|err| {
            FilterError::InvalidBlock { input: s.to_string(), reason: err.to_string() }
        });
    }
    BlockNumberOrTag::from_str(s).map_err(|err| FilterError::InvalidBlock {
        input: s.to_string(),
        reason: err.to_string(),
    })
}

/// Parses a 32-byte hex topic.
pub fn parse_topic(s: &str) -> Result<B256, FilterError> {
    let s = s.trim();
    B256::from_str(s).map_err(|err| FilterError::InvalidTopic {
        input: s.to_string(),
        reason: err.to_string(),
    })
}
