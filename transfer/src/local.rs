//! Local (same-chain) transfers.

use crate::{
  context::ChainContext,
  error::{Error, Result},
};

const LOG_TARGET: &str = "xcm-transfer::local";

/// Pallet carrying out a local transfer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LocalTxType {
  /// Native asset through `balances`.
  Balances,
  /// Any other asset through `tokens`.
  Tokens,
}

/// Picks the pallet for a same-chain transfer. Only single-asset transfers are supported.
pub fn classify<C, S, A>(asset_ids: &[S], amounts: &[A], ctx: &C) -> Result<LocalTxType>
where
  C: ChainContext + ?Sized,
  S: AsRef<str>,
  A: AsRef<str>,
{
  if asset_ids.len() > 1 || amounts.len() != 1 {
    return Err(Error::InvalidInput(
      "assetIds must be length 0 or 1, amounts must be length 1".into(),
    ));
  }

  let tx_type = if asset_ids.is_empty() {
    LocalTxType::Balances
  } else if ctx.has_tokens_pallet() {
    LocalTxType::Tokens
  } else {
    return Err(Error::PalletNotFound(format!(
      "no tokens pallet found on {} for a local transfer of {}",
      ctx.spec_name(),
      asset_ids[0].as_ref()
    )));
  };
  log::debug!(target: LOG_TARGET, "local transfer on {} via {tx_type:?}", ctx.spec_name());
  Ok(tx_type)
}
