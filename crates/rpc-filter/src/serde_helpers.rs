//! custom serde helper functions

use crate::filter::parse_block;
use alloy_eips::BlockNumberOrTag;
use alloy_primitives::Address;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum AddressOrSeq {
    Single(Address),
    Seq(Vec<Address>),
}

/// Deserializes the `address` member of a filter: `null`, `"0x.."` or `["0x..", ..]`.
///
/// Geth emits arrays, ganache emits single strings; both normalize to a sequence.
pub fn lenient_addresses<'de, D>(deserializer: D) -> Result<Vec<Address>, D::Error>
where
    D: Deserializer<'de>,
{
    let addresses = match Option::<AddressOrSeq>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(AddressOrSeq::Single(address)) => vec![address],
        Some(AddressOrSeq::Seq(addresses)) => addresses,
    };
    Ok(addresses)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientBlockNumber {
    Num(u64),
    Str(String),
}

/// Deserializes an optional block selector given either as an integer or as a string.
///
/// Strings may be a tag, a `0x` hex quantity or a decimal number. Environment variables reach the
/// config as integers, so `RPC_FILTER_FROM_BLOCK=16` must be accepted as well.
pub fn lenient_block_number<'de, D>(
    deserializer: D,
) -> Result<Option<BlockNumberOrTag>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<LenientBlockNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(LenientBlockNumber::Num(num)) => Ok(Some(BlockNumberOrTag::Number(num))),
        Some(LenientBlockNumber::Str(s)) => {
            parse_block(&s).map(Some).map_err(serde::de::Error::custom)
        }
    }
}

/// (De)serializes a value as a sequence with exactly one element: `[value]`
pub mod sequence {
    use serde::{
        Deserialize, Deserializer, Serialize, Serializer, de::DeserializeOwned, ser::SerializeSeq,
    };

    pub fn serialize<S, T>(val: &T, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        let mut seq = s.serialize_seq(Some(1))?;
        seq.serialize_element(val)?;
        seq.end()
    }

    pub fn deserialize<'de, T, D>(d: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let mut seq = Vec::<T>::deserialize(d)?;
        if seq.len() != 1 {
            return Err(serde::de::Error::custom(format!(
                "expected params sequence with length 1 but got {}",
                seq.len()
            )));
        }
        seq.pop().ok_or_else(|| serde::de::Error::custom("empty params sequence"))
    }
}
