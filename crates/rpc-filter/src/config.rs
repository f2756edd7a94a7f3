//! Configuration for building filter requests.
//!
//! Values are merged from, in increasing priority: the defaults, `rpc-filter.toml` in the current
//! directory, and `RPC_FILTER_*` environment variables. The toml file is keyed by profile:
//!
//! ```toml
//! [default]
//! from_block = "earliest"
//!
//! [ganache]
//! address_encoding = "single"
//! ```
//!
//! The profile is selected with `RPC_FILTER_PROFILE`.

use crate::{
    encoding::AddressEncoding,
    error::{ExtractConfigError, FilterError},
    request::FilterMethod,
    serde_helpers::lenient_block_number,
};
use alloy_eips::BlockNumberOrTag;
use figment::{
    Figment, Metadata, Profile, Provider,
    providers::{Env, Format, Serialized, Toml},
    value::{Dict, Map},
};
use serde::{Deserialize, Serialize};

/// Defaults applied to every request built by the `rpc-filter` binary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// The selected profile, not part of the serialized values.
    #[serde(skip)]
    pub profile: Profile,
    /// How `address` is written on the wire.
    pub address_encoding: AddressEncoding,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_block_number")]
    pub from_block: Option<BlockNumberOrTag>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_block_number")]
    pub to_block: Option<BlockNumberOrTag>,
    /// The filter method to call.
    pub method: FilterMethod,
    /// The JSON-RPC request id.
    pub request_id: i64,
}

impl FilterConfig {
    /// The name of the config file.
    pub const FILE_NAME: &'static str = "rpc-filter.toml";

    /// Prefix of the environment variables that override config values.
    pub const ENV_PREFIX: &'static str = "RPC_FILTER_";

    /// The environment variable that selects the profile.
    pub const PROFILE_ENV: &'static str = "RPC_FILTER_PROFILE";

    /// Loads the config from the default [`figment`](Self::figment).
    pub fn load() -> Result<Self, FilterError> {
        Ok(Self::try_from(Self::figment())?)
    }

    /// Attempts to extract a `FilterConfig` from `provider`.
    pub fn try_from<T: Provider>(provider: T) -> Result<Self, ExtractConfigError> {
        trace!(target: "rpc_filter", "load config with provider: {:?}", provider.metadata());
        let figment = Figment::from(provider);
        let mut config = figment.extract::<Self>().map_err(ExtractConfigError::new)?;
        config.profile = figment.profile().clone();
        Ok(config)
    }

    /// Returns the figment merging defaults, the toml file and the environment.
    pub fn figment() -> Figment {
        let profile = Profile::from_env_or(Self::PROFILE_ENV, Profile::Default);
        Figment::from(Self::default())
            .merge(Toml::file(Self::FILE_NAME).nested())
            .merge(Env::prefixed(Self::ENV_PREFIX).ignore(&["PROFILE"]).global())
            .select(profile)
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            profile: Profile::Default,
            address_encoding: AddressEncoding::default(),
            from_block: None,
            to_block: None,
            method: FilterMethod::default(),
            request_id: 1,
        }
    }
}

impl Provider for FilterConfig {
    fn metadata(&self) -> Metadata {
        Metadata::named("rpc-filter defaults")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Serialized::defaults(self).data()
    }
}
