//! Fee designation and weight limits.

use crate::{
  context::ChainContext,
  error::{Error, Result},
  options::{TransferOpts, WeightLimitOpts},
  resolver::resolve_asset_id,
};
use primitives::{MultiAssets, WeightLimit, XcmVersion};
use serde::Serialize;

/// Options derived from a request once routing has settled.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct XcmTypeOpts {
  /// Negotiated or pinned version. Every payload builder requires it.
  pub xcm_version: Option<XcmVersion>,
  pub pays_with_fee_dest: Option<String>,
  pub weight_limit: Option<WeightLimitOpts>,
}

impl XcmTypeOpts {
  pub fn new(opts: &TransferOpts, xcm_version: XcmVersion) -> Self {
    Self {
      xcm_version: Some(xcm_version),
      pays_with_fee_dest: opts.pays_with_fee_dest.clone(),
      weight_limit: opts.weight_limit.clone(),
    }
  }

  pub fn xcm_version(&self) -> Result<XcmVersion> {
    self
      .xcm_version
      .ok_or_else(|| Error::InternalError("xcmVersion must be set before building fees".into()))
  }
}

/// `Limited` only when both components are supplied.
pub fn create_weight_limit(weight_limit: Option<&WeightLimitOpts>) -> Result<WeightLimit> {
  let Some(opts) = weight_limit else {
    return Ok(WeightLimit::Unlimited);
  };
  let ref_time = opts.ref_time.as_deref().map(|v| weight_part("refTime", v)).transpose()?;
  let proof_size = opts.proof_size.as_deref().map(|v| weight_part("proofSize", v)).transpose()?;
  Ok(WeightLimit::from_parts(ref_time, proof_size))
}

fn weight_part(name: &str, value: &str) -> Result<u64> {
  value
    .trim()
    .parse()
    .map_err(|_| Error::InvalidInput(format!("{name} `{value}` is not an unsigned integer")))
}

/// Index in `assets` of the asset paying remote fees.
///
/// Single-asset bundles and requests without `paysWithFeeDest` always use item `0`.
pub async fn create_fee_asset_item<C: ChainContext + ?Sized>(
  opts: &XcmTypeOpts,
  assets: &MultiAssets,
  ctx: &C,
) -> Result<u32> {
  opts.xcm_version()?;

  let fee_asset = match opts.pays_with_fee_dest.as_deref() {
    Some(fee_asset) if !fee_asset.is_empty() && assets.len() > 1 => fee_asset,
    _ => return Ok(0),
  };

  let id = resolve_asset_id(fee_asset, ctx).await?;
  let index = assets.position(&id).ok_or_else(|| {
    Error::InvalidInput(format!(
      "paysWithFeeDest asset `{fee_asset}` is not among the transferred assets"
    ))
  })?;
  u32::try_from(index).map_err(|_| Error::InternalError(format!("fee asset index {index} overflows")))
}

/// Weight limit as emitted on the wire.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum WireWeightLimit {
  Unlimited,
  Limited {
    #[serde(rename = "refTime")]
    ref_time: String,
    #[serde(rename = "proofSize")]
    proof_size: String,
  },
}

impl From<WeightLimit> for WireWeightLimit {
  fn from(limit: WeightLimit) -> Self {
    match limit {
      WeightLimit::Unlimited => WireWeightLimit::Unlimited,
      WeightLimit::Limited {
        ref_time,
        proof_size,
      } => WireWeightLimit::Limited {
        ref_time: ref_time.to_string(),
        proof_size: proof_size.to_string(),
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn weights(ref_time: Option<&str>, proof_size: Option<&str>) -> WeightLimitOpts {
    WeightLimitOpts {
      ref_time: ref_time.map(Into::into),
      proof_size: proof_size.map(Into::into),
    }
  }

  #[test]
  fn weight_limit_needs_both_parts() {
    assert_eq!(create_weight_limit(None).unwrap(), WeightLimit::Unlimited);
    assert_eq!(
      create_weight_limit(Some(&weights(Some("1000"), None))).unwrap(),
      WeightLimit::Unlimited
    );
    assert_eq!(
      create_weight_limit(Some(&weights(Some("1000"), Some("2000")))).unwrap(),
      WeightLimit::Limited {
        ref_time: 1000,
        proof_size: 2000
      }
    );
    assert!(matches!(
      create_weight_limit(Some(&weights(Some("lots"), Some("2000")))),
      Err(Error::InvalidInput(_))
    ));
  }

  #[test]
  fn weight_limit_wire_shape() {
    assert_eq!(
      serde_json::to_value(WireWeightLimit::from(WeightLimit::Unlimited)).unwrap(),
      json!("Unlimited")
    );
    assert_eq!(
      serde_json::to_value(WireWeightLimit::from(WeightLimit::Limited {
        ref_time: 1000,
        proof_size: 2000
      }))
      .unwrap(),
      json!({ "Limited": { "refTime": "1000", "proofSize": "2000" } })
    );
  }
}
