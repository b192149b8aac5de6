//! Per-chain option disablement.
//!
//! Some options make no sense on some chains (a relay chain has no asset conversion to pay fees
//! with, nor liquid tokens). The policy is a static table; callers can supply their own.

use crate::{
  error::{Error, Result},
  options::{OptionKey, TransferOpts},
};
use primitives::chains::RELAY_CHAIN_SPEC_NAMES;

/// Matches every chain.
pub const ALL_CHAINS: &str = "*";

/// One row of the disablement policy.
#[derive(Clone, Copy, Debug)]
pub struct DisabledOption {
  pub name: OptionKey,
  pub disabled: bool,
  /// Lower-cased spec names the option is disabled on, or [`ALL_CHAINS`].
  pub chains: &'static [&'static str],
  /// Renders the rejection from the option name and the matched scope.
  pub error: fn(&str, &str) -> String,
}

impl DisabledOption {
  /// Scope this row disables the option for on `spec_name`, if any.
  fn matched_scope<'a>(&self, spec_name: &'a str) -> Option<&'a str> {
    if !self.disabled {
      return None;
    }
    if self.chains.contains(&ALL_CHAINS) {
      return Some(ALL_CHAINS);
    }
    self
      .chains
      .iter()
      .any(|chain| *chain == spec_name)
      .then_some(spec_name)
  }
}

fn disabled_on(option: &str, scope: &str) -> String {
  if scope == ALL_CHAINS {
    format!("{option} is disabled for all chains.")
  } else {
    format!("{option} is disabled for {scope}.")
  }
}

const fn enabled(name: OptionKey) -> DisabledOption {
  DisabledOption {
    name,
    disabled: false,
    chains: &[],
    error: disabled_on,
  }
}

/// Default policy: asset-conversion fees and liquid tokens are unavailable on relay chains.
pub static DISABLED_OPTIONS: &[DisabledOption] = &[
  DisabledOption {
    name: OptionKey::PaysWithFeeOrigin,
    disabled: true,
    chains: &RELAY_CHAIN_SPEC_NAMES,
    error: disabled_on,
  },
  enabled(OptionKey::PaysWithFeeDest),
  enabled(OptionKey::WeightLimit),
  enabled(OptionKey::XcmVersion),
  enabled(OptionKey::KeepAlive),
  DisabledOption {
    name: OptionKey::TransferLiquidToken,
    disabled: true,
    chains: &RELAY_CHAIN_SPEC_NAMES,
    error: disabled_on,
  },
  enabled(OptionKey::SendersAddr),
];

/// Rejects the first set option that `policy` disables on `spec_name`.
pub fn check_disabled_opts(
  opts: &TransferOpts,
  spec_name: &str,
  policy: &[DisabledOption],
) -> Result<()> {
  let spec_name = spec_name.to_lowercase();
  for key in opts.set_keys() {
    let Some(entry) = policy.iter().find(|entry| entry.name == key) else {
      continue;
    };
    if let Some(scope) = entry.matched_scope(&spec_name) {
      return Err(Error::DisabledOption((entry.error)(key.as_str(), scope)));
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn relay_chains_reject_fee_origin_and_liquid_tokens() {
    let opts = TransferOpts {
      pays_with_fee_origin: Some("USDT".into()),
      ..Default::default()
    };
    let err = check_disabled_opts(&opts, "Polkadot", DISABLED_OPTIONS).unwrap_err();
    assert_eq!(err.to_string(), "paysWithFeeOrigin is disabled for polkadot.");
    assert!(check_disabled_opts(&opts, "asset-hub-polkadot", DISABLED_OPTIONS).is_ok());

    let opts = TransferOpts {
      transfer_liquid_token: Some(true),
      ..Default::default()
    };
    assert!(matches!(
      check_disabled_opts(&opts, "kusama", DISABLED_OPTIONS),
      Err(Error::DisabledOption(_))
    ));
  }

  #[test]
  fn unset_and_falsy_options_pass() {
    let opts = TransferOpts {
      transfer_liquid_token: Some(false),
      pays_with_fee_origin: Some(String::new()),
      ..Default::default()
    };
    assert!(check_disabled_opts(&opts, "polkadot", DISABLED_OPTIONS).is_ok());
  }

  #[test]
  fn wildcard_scope_and_first_violation_wins() {
    static POLICY: &[DisabledOption] = &[
      DisabledOption {
        name: OptionKey::KeepAlive,
        disabled: true,
        chains: &[ALL_CHAINS],
        error: disabled_on,
      },
      DisabledOption {
        name: OptionKey::WeightLimit,
        disabled: true,
        chains: &["moonbeam"],
        error: disabled_on,
      },
    ];
    let opts = TransferOpts {
      keep_alive: Some(true),
      weight_limit: Some(Default::default()),
      ..Default::default()
    };
    // weightLimit comes before keepAlive in policy order.
    assert_eq!(
      check_disabled_opts(&opts, "Moonbeam", POLICY)
        .unwrap_err()
        .to_string(),
      "weightLimit is disabled for moonbeam."
    );
    assert_eq!(
      check_disabled_opts(&opts, "astar", POLICY)
        .unwrap_err()
        .to_string(),
      "keepAlive is disabled for all chains."
    );
  }
}
