//! Selecting how `address` is written on the wire.

use crate::{error::FilterError, filter::FilterSpec, single::SingleAddressFilter};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// How the `address` member of a filter is encoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressEncoding {
    /// `"address": ["0x.."]`, what geth and most nodes expect
    #[default]
    #[serde(alias = "standard")]
    Array,
    /// `"address": "0x.."`, required by ganache
    #[serde(alias = "ganache")]
    Single,
}

impl AddressEncoding {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Single => "single",
        }
    }
}

impl fmt::Display for AddressEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "array" | "standard" => Ok(Self::Array),
            "single" | "ganache" => Ok(Self::Single),
            _ => Err(format!("unknown address encoding: {s}, expected `array` or `single`")),
        }
    }
}

/// A filter ready to be sent, in the encoding the caller picked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterRequest {
    /// `address` as an array
    Standard(FilterSpec),
    /// `address` as a single string
    SingleAddress(SingleAddressFilter),
}

// === impl FilterRequest ===

impl FilterRequest {
    /// Wraps `spec` so that it serializes with the given `encoding`.
    ///
    /// Fails if [`AddressEncoding::Single`] is requested and `spec` doesn't hold exactly one
    /// address.
    pub fn new(spec: FilterSpec, encoding: AddressEncoding) -> Result<Self, FilterError> {
        trace!(
            target: "rpc_filter",
            %encoding,
            addresses = spec.addresses().len(),
            "building filter request"
        );
        match encoding {
            AddressEncoding::Array => Ok(Self::Standard(spec)),
            AddressEncoding::Single => SingleAddressFilter::try_from(spec).map(Self::SingleAddress),
        }
    }

    /// Returns the encoding this request serializes with.
    pub fn encoding(&self) -> AddressEncoding {
        match self {
            Self::Standard(_) => AddressEncoding::Array,
            Self::SingleAddress(_) => AddressEncoding::Single,
        }
    }

    /// Returns the general form of the filter, independent of the encoding.
    pub fn spec(&self) -> &FilterSpec {
        match self {
            Self::Standard(spec) => spec,
            Self::SingleAddress(filter) => filter.as_spec(),
        }
    }

    /// Returns the JSON parameter object.
    pub fn to_params(&self) -> Result<serde_json::Value, FilterError> {
        Ok(serde_json::to_value(self)?)
    }
}

impl From<FilterSpec> for FilterRequest {
    fn from(spec: FilterSpec) -> Self {
        Self::Standard(spec)
    }
}

impl From<SingleAddressFilter> for FilterRequest {
    fn from(filter: SingleAddressFilter) -> Self {
        Self::SingleAddress(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_eips::BlockNumberOrTag;
    use alloy_primitives::{Address, address};
    use serde_json::json;
    use similar_asserts::assert_eq;

    const A: Address = address!("0xabc1230000000000000000000000000000000001");

    #[test]
    fn parses_encoding() {
        assert_eq!("array".parse::<AddressEncoding>().unwrap(), AddressEncoding::Array);
        assert_eq!("Single".parse::<AddressEncoding>().unwrap(), AddressEncoding::Single);
        assert_eq!("ganache".parse::<AddressEncoding>().unwrap(), AddressEncoding::Single);
        assert!("both".parse::<AddressEncoding>().is_err());
        assert_eq!(AddressEncoding::default(), AddressEncoding::Array);
        assert_eq!(serde_json::to_value(AddressEncoding::Single).unwrap(), json!("single"));
        assert_eq!(
            serde_json::from_value::<AddressEncoding>(json!("ganache")).unwrap(),
            AddressEncoding::Single
        );
        assert_eq!(
            serde_json::from_value::<AddressEncoding>(json!("standard")).unwrap(),
            AddressEncoding::Array
        );
    }

    #[test]
    fn selects_wire_shape() {
        let spec = FilterSpec::new(BlockNumberOrTag::Earliest, BlockNumberOrTag::Latest, [A]);

        let standard = FilterRequest::new(spec.clone(), AddressEncoding::Array).unwrap();
        assert_eq!(standard.encoding(), AddressEncoding::Array);
        assert_eq!(
            standard.to_params().unwrap()["address"],
            json!(["0xabc1230000000000000000000000000000000001"])
        );

        let single = FilterRequest::new(spec.clone(), AddressEncoding::Single).unwrap();
        assert_eq!(single.encoding(), AddressEncoding::Single);
        assert_eq!(
            single.to_params().unwrap()["address"],
            json!("0xabc1230000000000000000000000000000000001")
        );

        assert_eq!(standard.spec(), single.spec());
        assert_eq!(single.spec(), &spec);
    }

    #[test]
    fn single_requires_one_address() {
        let spec = FilterSpec::new(BlockNumberOrTag::Earliest, BlockNumberOrTag::Latest, []);
        let err = FilterRequest::new(spec, AddressEncoding::Single).unwrap_err();
        assert!(matches!(err, FilterError::AddressCount(0)));
    }
}
