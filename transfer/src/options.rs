//! Per-request transfer options.

use serde::{Deserialize, Deserializer};

/// Options a caller may attach to a transfer request, deserializable from camelCase JSON.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferOpts {
  /// Asset id the origin should charge execution fees in.
  pub pays_with_fee_origin: Option<String>,
  /// Asset id, from the transferred bundle, that pays for remote execution.
  pub pays_with_fee_dest: Option<String>,
  pub weight_limit: Option<WeightLimitOpts>,
  /// Pins the XCM version instead of negotiating it.
  pub xcm_version: Option<u32>,
  pub keep_alive: Option<bool>,
  pub transfer_liquid_token: Option<bool>,
  pub senders_addr: Option<String>,
}

/// Raw weight limit components. Numbers and decimal strings are both accepted.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WeightLimitOpts {
  #[serde(deserialize_with = "scalar_string")]
  pub ref_time: Option<String>,
  #[serde(deserialize_with = "scalar_string")]
  pub proof_size: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
  Text(String),
  Number(u64),
}

fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
  Ok(
    Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
      Scalar::Text(text) => text,
      Scalar::Number(number) => number.to_string(),
    }),
  )
}

/// Option keys in the order the disablement policy checks them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OptionKey {
  PaysWithFeeOrigin,
  PaysWithFeeDest,
  WeightLimit,
  XcmVersion,
  KeepAlive,
  TransferLiquidToken,
  SendersAddr,
}

impl OptionKey {
  pub const ALL: [OptionKey; 7] = [
    OptionKey::PaysWithFeeOrigin,
    OptionKey::PaysWithFeeDest,
    OptionKey::WeightLimit,
    OptionKey::XcmVersion,
    OptionKey::KeepAlive,
    OptionKey::TransferLiquidToken,
    OptionKey::SendersAddr,
  ];

  /// Name as it appears in request JSON.
  pub const fn as_str(self) -> &'static str {
    match self {
      OptionKey::PaysWithFeeOrigin => "paysWithFeeOrigin",
      OptionKey::PaysWithFeeDest => "paysWithFeeDest",
      OptionKey::WeightLimit => "weightLimit",
      OptionKey::XcmVersion => "xcmVersion",
      OptionKey::KeepAlive => "keepAlive",
      OptionKey::TransferLiquidToken => "transferLiquidToken",
      OptionKey::SendersAddr => "sendersAddr",
    }
  }
}

impl TransferOpts {
  /// Whether `key` is set to a value that enables it. Empty strings, `false` and version `0`
  /// count as unset.
  pub fn is_set(&self, key: OptionKey) -> bool {
    fn text(value: &Option<String>) -> bool {
      value.as_deref().is_some_and(|value| !value.is_empty())
    }

    match key {
      OptionKey::PaysWithFeeOrigin => text(&self.pays_with_fee_origin),
      OptionKey::PaysWithFeeDest => text(&self.pays_with_fee_dest),
      OptionKey::WeightLimit => self.weight_limit.is_some(),
      OptionKey::XcmVersion => self.xcm_version.is_some_and(|version| version != 0),
      OptionKey::KeepAlive => self.keep_alive.unwrap_or(false),
      OptionKey::TransferLiquidToken => self.transfer_liquid_token.unwrap_or(false),
      OptionKey::SendersAddr => text(&self.senders_addr),
    }
  }

  /// Set keys, in policy order.
  pub fn set_keys(&self) -> impl Iterator<Item = OptionKey> + '_ {
    OptionKey::ALL.into_iter().filter(|key| self.is_set(*key))
  }
}
