use crate::{
  context::{ChainContext, TransferPallet},
  error::{Error, Result},
};
use async_trait::async_trait;
use primitives::{Junction, MultiLocation};
use std::collections::HashMap;

pub const ALICE: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
pub const ALICE_HEX: &str = "0xd43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d";
pub const ETH_ADDRESS: &str = "0xfff9976782d46cc05630d1f6ebab18b2324d6b14";

pub const USDT_LOCATION: &str =
  r#"{"parents":"0","interior":{"X2":[{"PalletInstance":"50"},{"GeneralIndex":"1984"}]}}"#;
pub const USDC_LOCATION: &str =
  r#"{"parents":"0","interior":{"X2":[{"PalletInstance":"50"},{"GeneralIndex":"1337"}]}}"#;

/// In-memory chain with builder-style setters.
#[derive(Clone, Debug)]
pub struct MockChain {
  spec_name: String,
  chain_id: String,
  native_symbol: String,
  pallet: TransferPallet,
  tokens_pallet: bool,
  supported_versions: HashMap<MultiLocation, u32>,
  safe_version: Option<u32>,
  assets: HashMap<String, MultiLocation>,
  fail_queries: bool,
}

impl MockChain {
  pub fn new(spec_name: &str, chain_id: &str, native_symbol: &str) -> Self {
    Self {
      spec_name: spec_name.into(),
      chain_id: chain_id.into(),
      native_symbol: native_symbol.into(),
      pallet: TransferPallet::PolkadotXcm,
      tokens_pallet: false,
      supported_versions: HashMap::new(),
      safe_version: None,
      assets: HashMap::new(),
      fail_queries: false,
    }
  }

  /// Polkadot relay chain: `xcmPallet`, DOT at `Here`.
  pub fn polkadot() -> Self {
    Self::new("polkadot", "0", "DOT")
      .with_pallet(TransferPallet::XcmPallet)
      .with_asset("DOT", MultiLocation::here())
  }

  /// Asset Hub: DOT from the relay, USDT and USDC as local assets.
  pub fn asset_hub() -> Self {
    Self::new("asset-hub-polkadot", "1000", "DOT")
      .with_asset("DOT", MultiLocation::parent())
      .with_asset("USDT", asset(1984))
      .with_asset("USDC", asset(1337))
  }

  /// An orml parachain transferring through `xTokens`.
  pub fn moonbeam() -> Self {
    Self::new("moonbeam", "2004", "GLMR")
      .with_pallet(TransferPallet::XTokens)
      .with_tokens_pallet(true)
      .with_asset(
        "GLMR",
        MultiLocation::new(0, vec![Junction::PalletInstance(10)]),
      )
      .with_asset("DOT", MultiLocation::parent())
  }

  pub fn with_pallet(mut self, pallet: TransferPallet) -> Self {
    self.pallet = pallet;
    self
  }

  pub fn with_tokens_pallet(mut self, tokens_pallet: bool) -> Self {
    self.tokens_pallet = tokens_pallet;
    self
  }

  pub fn with_asset(mut self, symbol: &str, location: MultiLocation) -> Self {
    self.assets.insert(symbol.to_uppercase(), location);
    self
  }

  pub fn with_supported_version(mut self, destination: MultiLocation, version: u32) -> Self {
    self.supported_versions.insert(destination, version);
    self
  }

  pub fn with_safe_version(mut self, version: u32) -> Self {
    self.safe_version = Some(version);
    self
  }

  pub fn failing(mut self) -> Self {
    self.fail_queries = true;
    self
  }

  fn check(&self) -> Result<()> {
    if self.fail_queries {
      return Err(Error::ChainQuery("connection closed".into()));
    }
    Ok(())
  }
}

pub fn asset(general_index: u128) -> MultiLocation {
  MultiLocation::new(
    0,
    vec![
      Junction::PalletInstance(50),
      Junction::GeneralIndex(general_index),
    ],
  )
}

#[async_trait]
impl ChainContext for MockChain {
  fn spec_name(&self) -> &str {
    &self.spec_name
  }

  fn chain_id(&self) -> &str {
    &self.chain_id
  }

  fn native_asset_symbol(&self) -> &str {
    &self.native_symbol
  }

  fn transfer_pallet(&self) -> TransferPallet {
    self.pallet
  }

  fn has_tokens_pallet(&self) -> bool {
    self.tokens_pallet
  }

  async fn supported_version_for(
    &self,
    _version: u32,
    location: &MultiLocation,
  ) -> Result<Option<u32>> {
    self.check()?;
    Ok(self.supported_versions.get(location).copied())
  }

  async fn safe_version(&self) -> Result<Option<u32>> {
    self.check()?;
    Ok(self.safe_version)
  }

  async fn resolve_asset_metadata(&self, symbol: &str) -> Result<Option<MultiLocation>> {
    self.check()?;
    Ok(self.assets.get(&symbol.to_uppercase()).cloned())
  }
}
