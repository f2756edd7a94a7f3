use alloy_eips::BlockNumberOrTag;
use alloy_primitives::{Address, hex};
use proptest::prelude::*;
use rpc_filter::{AddressEncoding, FilterRequest, FilterSpec, SingleAddressFilter};
use serde_json::Value;

fn addresses(min: usize, max: usize) -> impl Strategy<Value = Vec<Address>> {
    prop::collection::vec(any::<[u8; 20]>().prop_map(Address::from), min..max)
}

fn block() -> impl Strategy<Value = BlockNumberOrTag> {
    prop_oneof![
        Just(BlockNumberOrTag::Earliest),
        Just(BlockNumberOrTag::Latest),
        Just(BlockNumberOrTag::Pending),
        any::<u64>().prop_map(BlockNumberOrTag::Number),
    ]
}

proptest! {
    #[test]
    fn array_encoding_keeps_order(from in block(), to in block(), addrs in addresses(1, 8)) {
        let spec = FilterSpec::new(from, to, addrs.clone());
        let value = serde_json::to_value(&spec).unwrap();
        let expected: Vec<Value> =
            addrs.iter().map(|a| Value::String(hex::encode_prefixed(a))).collect();
        prop_assert_eq!(&value["address"], &Value::Array(expected));
    }

    #[test]
    fn single_encoding_is_a_string(from in block(), to in block(), addrs in addresses(1, 2)) {
        let addr = addrs[0];
        let filter = SingleAddressFilter::new(from, to, addr);
        let value = serde_json::to_value(&filter).unwrap();
        prop_assert_eq!(&value["address"], &Value::String(hex::encode_prefixed(addr)));
        prop_assert_eq!(filter.addresses(), &[addr][..]);
    }

    #[test]
    fn encodings_describe_the_same_filter(from in block(), to in block(), addrs in addresses(1, 2)) {
        let spec = FilterSpec::new(from, to, addrs);
        let single = FilterRequest::new(spec.clone(), AddressEncoding::Single).unwrap();

        let decoded: FilterSpec = serde_json::from_value(single.to_params().unwrap()).unwrap();
        prop_assert_eq!(&decoded, &spec);

        let standard = FilterRequest::new(decoded, AddressEncoding::Array).unwrap();
        let value = standard.to_params().unwrap();
        prop_assert!(value["address"].is_array());
        prop_assert_eq!(&value["address"][0], &single.to_params().unwrap()["address"]);
    }

    #[test]
    fn empty_addresses_are_omitted(from in block(), to in block()) {
        let spec = FilterSpec::new(from, to, []);
        let value = serde_json::to_value(&spec).unwrap();
        prop_assert!(value.get("address").is_none());
    }
}
