//! Filters as sent to ganache, which only accepts a single string for `address`
use crate::init_tracing;
use alloy_eips::BlockNumberOrTag;
use alloy_primitives::{Address, address};
use rpc_filter::{
    AddressEncoding, FilterError, FilterRequest, FilterSpec, Id, RpcMethodCall,
    SingleAddressFilter,
};
use serde_json::json;
use similar_asserts::assert_eq;

const CONTRACT: Address = address!("0xabc1230000000000000000000000000000000001");

#[test]
fn can_create_ganache_new_filter() {
    init_tracing();

    let filter = SingleAddressFilter::parse(
        BlockNumberOrTag::Earliest,
        BlockNumberOrTag::Latest,
        "0xabc1230000000000000000000000000000000001",
    )
    .unwrap();
    assert_eq!(
        serde_json::to_string(&filter).unwrap(),
        r#"{"fromBlock":"earliest","toBlock":"latest","address":"0xabc1230000000000000000000000000000000001"}"#
    );
    assert_eq!(filter.addresses(), &[CONTRACT]);

    let call = RpcMethodCall::new_filter(Id::Number(42), &filter.into()).unwrap();
    assert_eq!(
        serde_json::to_value(&call).unwrap(),
        json!({
            "jsonrpc": "2.0",
            "method": "eth_newFilter",
            "params": [{
                "fromBlock": "earliest",
                "toBlock": "latest",
                "address": "0xabc1230000000000000000000000000000000001"
            }],
            "id": 42
        })
    );
}

#[test]
fn empty_address_is_rejected() {
    let err =
        SingleAddressFilter::parse(BlockNumberOrTag::Earliest, BlockNumberOrTag::Latest, "")
            .unwrap_err();
    assert!(matches!(err, FilterError::EmptyAddress));

    let err =
        SingleAddressFilter::parse(BlockNumberOrTag::Earliest, BlockNumberOrTag::Latest, "   ")
            .unwrap_err();
    assert!(matches!(err, FilterError::EmptyAddress));
}

#[test]
fn ganache_response_can_be_resent_to_geth() {
    // the single string form decodes into the general filter
    let ganache = r#"{"fromBlock":"earliest","toBlock":"latest","address":"0xabc1230000000000000000000000000000000001"}"#;
    let spec: FilterSpec = serde_json::from_str(ganache).unwrap();
    assert_eq!(spec.addresses(), &[CONTRACT]);

    let request = FilterRequest::new(spec, AddressEncoding::Array).unwrap();
    assert_eq!(
        request.to_params().unwrap(),
        json!({
            "fromBlock": "earliest",
            "toBlock": "latest",
            "address": ["0xabc1230000000000000000000000000000000001"]
        })
    );
}

#[test]
fn get_logs_uses_the_same_params() {
    let spec = FilterSpec::new(0u64, BlockNumberOrTag::Pending, [CONTRACT]);
    let request = FilterRequest::new(spec, AddressEncoding::Single).unwrap();

    let new_filter = RpcMethodCall::new_filter(Id::Number(1), &request).unwrap();
    let get_logs = RpcMethodCall::get_logs(Id::Number(1), &request).unwrap();
    assert_eq!(get_logs.method.as_str(), "eth_getLogs");
    assert_eq!(new_filter.params, get_logs.params);
    assert_eq!(get_logs.params["address"], json!("0xabc1230000000000000000000000000000000001"));
}
