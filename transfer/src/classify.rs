//! String-level location predicates.
//!
//! These run on the textual form of an asset or chain identifier, before (or instead of) a full
//! structural parse. They are heuristics with fixed pass/fail boundaries: `is_location` only
//! checks the two-key shape, the bridge and native-asset checks are substring tests. Deeper
//! validation is left to [`crate::parse`].

use serde_json::{Map, Value};

const PARENTS_MARKER: &str = "parents";
const INTERIOR_MARKER: &str = "interior";
const GLOBAL_CONSENSUS_MARKER: &str = "globalconsensus";
const PARACHAIN_MARKER: &str = "\"parachain\":";

/// Whether `s` is a serialized location rather than an asset symbol.
///
/// True iff the lower-cased string mentions both `parents` and `interior` and the string parses
/// as a JSON object with exactly two top-level keys. A malformed `interior` still passes.
pub fn is_location(s: &str) -> bool {
  let lowered = s.to_lowercase();
  if !lowered.contains(PARENTS_MARKER) || !lowered.contains(INTERIOR_MARKER) {
    return false;
  }

  serde_json::from_str::<Map<String, Value>>(s)
    .map(|object| object.len() == 2)
    .unwrap_or(false)
}

/// Whether the transfer targets another consensus system.
///
/// Only the first identifier is inspected.
pub fn is_destination_bridge<S: AsRef<str>>(asset_ids: &[S]) -> bool {
  asset_ids
    .first()
    .map(|first| first.as_ref().to_lowercase().contains(GLOBAL_CONSENSUS_MARKER))
    .unwrap_or(false)
}

/// Whether `asset_location` names an asset living on parachain `dest_chain_id`.
///
/// Substring containment of a `"parachain":` junction whose scalar, quoted or bare, equals
/// `dest_chain_id`. Whitespace is ignored; the rest of the location is not inspected.
pub fn is_dest_chain_native_asset(dest_chain_id: &str, asset_location: &str) -> bool {
  let compact: String = asset_location
    .to_lowercase()
    .chars()
    .filter(|c| !c.is_whitespace())
    .collect();
  let id = dest_chain_id.trim();

  let quoted = format!("{PARACHAIN_MARKER}\"{id}\"");
  if compact.contains(&quoted) {
    return true;
  }

  let bare = format!("{PARACHAIN_MARKER}{id}");
  compact.match_indices(&bare).any(|(index, _)| {
    // The bare scalar must end here, so `20` does not match `2004`.
    !compact[index + bare.len()..]
      .chars()
      .next()
      .map(|next| next.is_ascii_digit())
      .unwrap_or(false)
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn location_needs_both_keys() {
    assert!(!is_location(r#"{"parents":"1"}"#));
    assert!(!is_location(r#"{"interior":"Here"}"#));
    assert!(is_location(
      r#"{"parents":"1","interior":{"X1":{"Parachain":"2004"}}}"#
    ));
  }

  #[test]
  fn location_needs_exactly_two_keys() {
    assert!(!is_location(
      r#"{"parents":"1","interior":"Here","extra":true}"#
    ));
    // Both markers present but nested one level down.
    assert!(!is_location(
      r#"{"location":{"parents":"1","interior":"Here"}}"#
    ));
  }

  #[test]
  fn location_accepts_malformed_interior() {
    assert!(is_location(r#"{"parents":"1","interior":{"X9":"nonsense"}}"#));
  }

  #[test]
  fn symbols_are_not_locations() {
    assert!(!is_location("DOT"));
    assert!(!is_location("usdt"));
    assert!(!is_location(""));
    assert!(!is_location("parents interior"));
  }

  #[test]
  fn location_markers_are_case_insensitive() {
    assert!(is_location(r#"{"Parents":"1","Interior":"Here"}"#));
  }

  #[test]
  fn classification_is_repeatable() {
    let inputs = [
      r#"{"parents":"1","interior":{"X1":{"Parachain":"2004"}}}"#,
      "DOT",
      r#"{"parents":"2","interior":{"X1":{"GlobalConsensus":"Kusama"}}}"#,
    ];
    for input in inputs {
      assert_eq!(is_location(input), is_location(input));
      assert_eq!(is_destination_bridge(&[input]), is_destination_bridge(&[input]));
    }
  }

  #[test]
  fn bridge_detection_checks_first_identifier() {
    let empty: [&str; 0] = [];
    assert!(!is_destination_bridge(&empty));
    assert!(is_destination_bridge(&[
      r#"{"parents":"2","interior":{"X1":{"GlobalConsensus":{"Ethereum":{"chainId":"1"}}}}}"#
    ]));
    assert!(!is_destination_bridge(&["DOT"]));
    // A bridged asset in second position is not inspected.
    assert!(!is_destination_bridge(&[
      "DOT",
      r#"{"parents":"2","interior":{"X1":{"GlobalConsensus":"Kusama"}}}"#,
    ]));
  }

  #[test]
  fn native_asset_matches_quoted_and_bare_ids() {
    assert!(is_dest_chain_native_asset(
      "2004",
      r#"{"parents":"1","interior":{"X1":{"Parachain":"2004"}}}"#
    ));
    assert!(is_dest_chain_native_asset(
      "2004",
      r#"{"parents": 1, "interior": {"X2": [{"Parachain": 2004}, {"PalletInstance": 10}]}}"#
    ));
  }

  #[test]
  fn native_asset_rejects_other_chains() {
    assert!(!is_dest_chain_native_asset(
      "2000",
      r#"{"parents":"1","interior":{"X1":{"Parachain":"2004"}}}"#
    ));
    assert!(!is_dest_chain_native_asset(
      "20",
      r#"{"parents":1,"interior":{"X1":{"Parachain":2004}}}"#
    ));
    assert!(!is_dest_chain_native_asset("2004", "GLMR"));
  }
}
