//! Transfer orchestration.
//!
//! [`TransferBuilder::create_transfer`] validates a request, routes it, settles the XCM version
//! and assembles the payload through the matching version adapter.

use crate::{
  classify::{is_dest_chain_native_asset, is_destination_bridge, is_location},
  config::TransferConfig,
  context::{ChainContext, TransferPallet},
  disabled::{DISABLED_OPTIONS, DisabledOption, check_disabled_opts},
  error::{Error, Result},
  fees::{WireWeightLimit, XcmTypeOpts, create_fee_asset_item, create_weight_limit},
  local::{self, LocalTxType},
  negotiate::{check_xcm_version, negotiate},
  options::{OptionKey, TransferOpts},
  parse::{parse_amount, parse_location},
  resolver::{resolve, resolve_asset_id},
  versioned::{VersionedAssets, VersionedLocation, XcmAdapter},
};
use primitives::{
  Account, AssetId, MultiLocation, XcmVersion,
  chains::{RELAY_CHAIN_ID, is_system_chain},
};
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = "xcm-transfer::builder";

/// A transfer as submitted by a caller.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
  /// `"0"` for the relay chain, a parachain id, or a serialized location for bridges.
  pub dest_chain_id: String,
  pub dest_addr: String,
  #[serde(default)]
  pub asset_ids: Vec<String>,
  pub amounts: Vec<String>,
  #[serde(default)]
  pub opts: TransferOpts,
}

/// Direction of a cross-consensus transfer, seen from the origin.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
  RelayToPara,
  ParaToRelay,
  ParaToPara,
  ParaToBridge,
}

/// Extrinsic the payload is meant for.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum XcmMethod {
  TransferMultiassets,
  TransferAssets,
  LimitedTeleportAssets,
  LimitedReserveTransferAssets,
}

/// Version-correct arguments of a cross-consensus transfer.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XcmPayload {
  pub xcm_version: XcmVersion,
  pub direction: Direction,
  pub pallet: TransferPallet,
  pub method: XcmMethod,
  /// Absent for `xTokens`, whose beneficiary already names the destination.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub dest: Option<VersionedLocation>,
  pub beneficiary: VersionedLocation,
  pub assets: VersionedAssets,
  pub fee_asset_item: u32,
  pub weight_limit: WireWeightLimit,
  /// Asset the origin charges transaction fees in, when not the native one.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pays_with_fee_origin: Option<VersionedLocation>,
  /// Every transferred asset lives on the destination parachain.
  pub assets_native_to_destination: bool,
}

/// What the caller should submit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TransferPlan {
  Local {
    tx_type: LocalTxType,
    beneficiary: Account,
    /// `None` for the native asset.
    asset_id: Option<AssetId>,
    amount: u128,
    keep_alive: bool,
  },
  CrossConsensus(XcmPayload),
}

/// Where a cross-consensus transfer goes.
#[derive(Clone, Debug, Eq, PartialEq)]
enum Route {
  Relay,
  Parachain(u32),
  Bridge(MultiLocation),
}

impl Route {
  fn parse(dest_chain_id: &str) -> Result<Self> {
    let dest_chain_id = dest_chain_id.trim();
    if is_location(dest_chain_id) {
      let location = parse_location(dest_chain_id)?;
      if !location.is_global_consensus() {
        return Err(Error::InvalidInput(format!(
          "bridge destination `{dest_chain_id}` must start with a GlobalConsensus junction"
        )));
      }
      return Ok(Route::Bridge(location));
    }
    if dest_chain_id == RELAY_CHAIN_ID {
      return Ok(Route::Relay);
    }
    dest_chain_id.parse().map(Route::Parachain).map_err(|_| {
      Error::InvalidInput(format!(
        "destChainId `{dest_chain_id}` is neither a chain id nor a location"
      ))
    })
  }
}

pub struct TransferBuilder<C> {
  ctx: C,
  config: TransferConfig,
  disabled_options: &'static [DisabledOption],
}

impl<C: ChainContext> TransferBuilder<C> {
  pub fn new(ctx: C) -> Self {
    Self {
      ctx,
      config: TransferConfig::default(),
      disabled_options: DISABLED_OPTIONS,
    }
  }

  /// Replaces the configuration after validating it.
  pub fn with_config(mut self, config: TransferConfig) -> Result<Self> {
    config.validate()?;
    self.config = config;
    Ok(self)
  }

  pub fn with_disabled_options(mut self, policy: &'static [DisabledOption]) -> Self {
    self.disabled_options = policy;
    self
  }

  pub fn context(&self) -> &C {
    &self.ctx
  }

  pub fn config(&self) -> &TransferConfig {
    &self.config
  }

  pub async fn create_transfer(&self, request: TransferRequest) -> Result<TransferPlan> {
    let TransferRequest {
      dest_chain_id,
      dest_addr,
      asset_ids,
      amounts,
      opts,
    } = request;

    check_disabled_opts(&opts, self.ctx.spec_name(), self.disabled_options)?;
    let beneficiary = Account::parse(dest_addr.trim())?;

    if dest_chain_id.trim() == self.ctx.chain_id() {
      return self
        .local_transfer(beneficiary, &asset_ids, &amounts, &opts)
        .await;
    }

    let route = Route::parse(&dest_chain_id)?;
    let origin_is_relay = self.ctx.chain_id() == RELAY_CHAIN_ID;
    let (direction, destination) = match (&route, origin_is_relay) {
      (Route::Relay, true) => {
        return Err(Error::InvalidInput(
          "the relay chain cannot send a cross-consensus transfer to itself".into(),
        ));
      }
      (Route::Bridge(_), true) => {
        return Err(Error::InvalidInput(
          "bridge transfers must originate from a parachain".into(),
        ));
      }
      (Route::Parachain(id), true) => (Direction::RelayToPara, MultiLocation::parachain(0, *id)),
      (Route::Relay, false) => (Direction::ParaToRelay, MultiLocation::parent()),
      (Route::Parachain(id), false) => (Direction::ParaToPara, MultiLocation::parachain(1, *id)),
      (Route::Bridge(location), false) => (Direction::ParaToBridge, location.clone()),
    };
    log::debug!(
      target: LOG_TARGET,
      "{} -> {dest_chain_id}: {direction:?}",
      self.ctx.chain_id()
    );

    let xcm_version = self.xcm_version(&destination, &opts).await?;
    let adapter = XcmAdapter::new(xcm_version);

    let assets = resolve(asset_ids.as_slice(), amounts.as_slice(), &self.ctx).await?;
    let is_bridge = matches!(route, Route::Bridge(_)) || is_destination_bridge(asset_ids.as_slice());
    let assets_native_to_destination = matches!(route, Route::Parachain(_))
      && !asset_ids.is_empty()
      && asset_ids
        .iter()
        .all(|id| is_location(id) && is_dest_chain_native_asset(&dest_chain_id, id));

    let pallet = self.ctx.transfer_pallet();
    let (method, dest, beneficiary) = match pallet {
      TransferPallet::XTokens => {
        let beneficiary = match &route {
          Route::Parachain(id) => {
            adapter.create_xtokens_parachain_dest_beneficiary(&beneficiary, *id, 1)
          }
          Route::Relay => adapter.create_xtokens_dest_beneficiary(&beneficiary, 1),
          Route::Bridge(_) => {
            return Err(Error::InvalidInput(
              "xTokens cannot transfer across consensus systems".into(),
            ));
          }
        };
        (XcmMethod::TransferMultiassets, None, beneficiary)
      }
      TransferPallet::XcmPallet | TransferPallet::PolkadotXcm => {
        let method = if is_bridge {
          XcmMethod::TransferAssets
        } else if is_system_chain(self.ctx.chain_id()) && is_system_chain(dest_chain_id.trim()) {
          XcmMethod::LimitedTeleportAssets
        } else {
          XcmMethod::LimitedReserveTransferAssets
        };
        (
          method,
          Some(adapter.multi_location(&destination)?),
          adapter.create_beneficiary(&beneficiary, 0),
        )
      }
    };

    let type_opts = XcmTypeOpts::new(&opts, xcm_version);
    let fee_asset_item = create_fee_asset_item(&type_opts, &assets, &self.ctx).await?;
    let weight_limit = create_weight_limit(type_opts.weight_limit.as_ref())?;
    let pays_with_fee_origin = self.fee_origin_asset(&opts, &adapter).await?;

    log::debug!(
      target: LOG_TARGET,
      "built {method:?} via {pallet:?} at V{xcm_version}, {} asset(s)",
      assets.len()
    );
    Ok(TransferPlan::CrossConsensus(XcmPayload {
      xcm_version,
      direction,
      pallet,
      method,
      dest,
      beneficiary,
      assets: adapter.multi_assets(&assets)?,
      fee_asset_item,
      weight_limit: weight_limit.into(),
      pays_with_fee_origin,
      assets_native_to_destination,
    }))
  }

  async fn local_transfer(
    &self,
    beneficiary: Account,
    asset_ids: &[String],
    amounts: &[String],
    opts: &TransferOpts,
  ) -> Result<TransferPlan> {
    let tx_type = local::classify(asset_ids, amounts, &self.ctx)?;
    let asset_id = match (tx_type, asset_ids.first()) {
      (LocalTxType::Tokens, Some(asset_id)) => Some(resolve_asset_id(asset_id, &self.ctx).await?),
      _ => None,
    };
    Ok(TransferPlan::Local {
      tx_type,
      beneficiary,
      asset_id,
      amount: parse_amount(&amounts[0])?,
      keep_alive: opts.keep_alive.unwrap_or(false),
    })
  }

  /// Pinned versions are checked against the configured set; otherwise the destination is asked.
  async fn xcm_version(&self, destination: &MultiLocation, opts: &TransferOpts) -> Result<XcmVersion> {
    let supported = &self.config.supported_versions;
    if let Some(pinned) = opts.xcm_version.filter(|_| opts.is_set(OptionKey::XcmVersion)) {
      return check_xcm_version(pinned, supported);
    }

    let negotiated = negotiate(
      destination,
      self.config.latest_version(),
      self.config.fallback_version,
      supported,
      &self.ctx,
    )
    .await?;
    log::debug!(target: LOG_TARGET, "negotiated V{negotiated} for {destination:?}");
    check_xcm_version(negotiated.as_u32(), supported)
  }

  async fn fee_origin_asset(
    &self,
    opts: &TransferOpts,
    adapter: &XcmAdapter,
  ) -> Result<Option<VersionedLocation>> {
    let Some(asset_id) = opts
      .pays_with_fee_origin
      .as_deref()
      .filter(|_| opts.is_set(OptionKey::PaysWithFeeOrigin))
    else {
      return Ok(None);
    };
    let resolved = resolve_asset_id(asset_id, &self.ctx).await?;
    let location = resolved.as_location().ok_or_else(|| {
      Error::AssetNotFound(format!("paysWithFeeOrigin asset `{asset_id}` has no location"))
    })?;
    Ok(Some(adapter.multi_location(location)?))
  }
}
