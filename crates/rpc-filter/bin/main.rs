#[macro_use]
extern crate tracing;

use alloy_rpc_types_eth::ValueOrArray;
use clap::Parser;
use eyre::{Result, WrapErr};
use rpc_filter::{
    AddressEncoding, FilterConfig, FilterMethod, FilterRequest, FilterSpec, Id, RpcMethodCall,
    filter::{parse_block, parse_topic},
};

/// Build `eth_newFilter`/`eth_getLogs` requests for nodes with different `address` encodings.
#[derive(Debug, Parser)]
#[command(name = "rpc-filter", version)]
struct Args {
    /// The lower block bound: a number or a tag (earliest, latest, pending, safe, finalized).
    #[arg(long, value_name = "BLOCK")]
    from_block: Option<String>,

    /// The upper block bound.
    #[arg(long, value_name = "BLOCK")]
    to_block: Option<String>,

    /// A contract address to filter by. Can be given several times.
    #[arg(long = "address", value_name = "ADDRESS")]
    addresses: Vec<String>,

    /// A topic hash, by position. Use `null` for a wildcard position.
    #[arg(long = "topic", value_name = "TOPIC")]
    topics: Vec<String>,

    /// How to encode `address`: `array`, or `single` for ganache.
    #[arg(long, value_name = "ENCODING")]
    encoding: Option<AddressEncoding>,

    /// The filter method: `new-filter` or `get-logs`.
    #[arg(long, value_name = "METHOD")]
    method: Option<FilterMethod>,

    /// The JSON-RPC request id.
    #[arg(long, value_name = "ID")]
    id: Option<i64>,

    /// Print only the filter object instead of the whole request.
    #[arg(long)]
    params_only: bool,
}

/// Initializes a tracing Subscriber for logging
fn subscriber() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    subscriber();
    let args = Args::parse();
    let config = FilterConfig::load()?;
    debug!(?config, "loaded config");
    println!("{}", run(args, config)?);
    Ok(())
}

fn run(args: Args, config: FilterConfig) -> Result<String> {
    let mut spec = FilterSpec::default().try_with_addresses(&args.addresses)?;
    let from_block = args.from_block.as_deref().map(parse_block).transpose()?;
    if let Some(block) = from_block.or(config.from_block) {
        spec = spec.with_from_block(block);
    }
    let to_block = args.to_block.as_deref().map(parse_block).transpose()?;
    if let Some(block) = to_block.or(config.to_block) {
        spec = spec.with_to_block(block);
    }

    let mut topics = Vec::with_capacity(args.topics.len());
    for topic in &args.topics {
        let topic = match topic.as_str() {
            "null" => None,
            topic => Some(ValueOrArray::Value(parse_topic(topic)?)),
        };
        topics.push(topic);
    }
    spec = spec.with_topics(topics);

    let encoding = args.encoding.unwrap_or(config.address_encoding);
    let request = FilterRequest::new(spec, encoding)
        .wrap_err_with(|| format!("failed to build filter with `{encoding}` address encoding"))?;

    if args.params_only {
        return Ok(serde_json::to_string(&request.to_params()?)?);
    }

    let method = args.method.unwrap_or(config.method);
    let id = Id::Number(args.id.unwrap_or(config.request_id));
    Ok(RpcMethodCall::new(method, id, &request)?.to_json()?)
}
