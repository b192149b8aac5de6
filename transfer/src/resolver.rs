//! Asset resolution: raw `(asset_ids, amounts)` pairs into a sorted [`MultiAssets`].

use crate::{
  classify::is_location,
  context::ChainContext,
  error::{Error, Result},
  parse::{parse_amount, parse_location},
};
use primitives::{AssetId, FungibleAsset, MultiAssets};

const LOG_TARGET: &str = "xcm-transfer::resolver";

/// Resolves one identifier to its normalised id.
///
/// Serialized locations are parsed; anything else is a symbol looked up through the context.
pub async fn resolve_asset_id<C: ChainContext + ?Sized>(asset_id: &str, ctx: &C) -> Result<AssetId> {
  if is_location(asset_id) {
    return Ok(AssetId::Location(parse_location(asset_id)?));
  }

  let symbol = asset_id.trim();
  if symbol.is_empty() {
    return Err(Error::InvalidInput("asset id must not be empty".into()));
  }
  match ctx.resolve_asset_metadata(symbol).await? {
    Some(location) => {
      log::trace!(target: LOG_TARGET, "resolved {symbol} to {location:?}");
      Ok(AssetId::Location(location))
    }
    None => Err(Error::AssetNotFound(format!(
      "no asset `{symbol}` is registered on {}",
      ctx.spec_name()
    ))),
  }
}

/// Builds the sorted, deduplicated bundle for a transfer.
///
/// With no ids and a single amount, the chain's native asset is transferred. A repeated id is
/// rejected rather than summed.
pub async fn resolve<C, S, A>(asset_ids: &[S], amounts: &[A], ctx: &C) -> Result<MultiAssets>
where
  C: ChainContext + ?Sized,
  S: AsRef<str>,
  A: AsRef<str>,
{
  let native;
  let ids: Vec<&str> = if asset_ids.is_empty() && amounts.len() == 1 {
    native = ctx.native_asset_symbol().to_owned();
    vec![native.as_str()]
  } else if asset_ids.len() == amounts.len() {
    asset_ids.iter().map(AsRef::as_ref).collect()
  } else {
    return Err(Error::InvalidInput(format!(
      "assetIds and amounts must have the same length, got {} and {}",
      asset_ids.len(),
      amounts.len()
    )));
  };
  if ids.is_empty() {
    return Err(Error::InvalidInput("at least one amount is required".into()));
  }

  let mut assets = MultiAssets::new();
  for (asset_id, amount) in ids.into_iter().zip(amounts) {
    let id = resolve_asset_id(asset_id, ctx).await?;
    let amount = parse_amount(amount.as_ref())?;
    log::trace!(target: LOG_TARGET, "{asset_id} -> {id:?}, amount {amount}");

    assets
      .push(FungibleAsset::new(id, amount))
      .map_err(|_| Error::InvalidInput(format!("asset `{asset_id}` is listed more than once")))?;
  }
  Ok(assets)
}
