//! Normalisation of serialized locations and amounts.
//!
//! Serialized locations arrive in any of the JSON dialects produced by chain clients: V2/V3 style
//! bare `X1` junctions or V4+ style arrays, scalars as numbers or as (possibly comma-grouped)
//! strings, `"Here"` or `{"Here": null}`. All of them normalise to the same [`MultiLocation`].

use crate::error::{Error, Result};
use primitives::{Junction, MultiLocation, NetworkId, chains::MAX_JUNCTIONS};
use serde_json::{Map, Value};

/// Parses a serialized location into its normalised form.
pub fn parse_location(serialized: &str) -> Result<MultiLocation> {
  let value: Value = serde_json::from_str(serialized)
    .map_err(|err| invalid(serialized, &format!("not valid JSON ({err})")))?;
  location_from_value(&value).map_err(|reason| invalid(serialized, &reason))
}

/// Parses a decimal amount. Comma or underscore digit grouping is accepted.
pub fn parse_amount(amount: &str) -> Result<u128> {
  let digits: String = amount
    .trim()
    .chars()
    .filter(|c| *c != ',' && *c != '_')
    .collect();
  digits
    .parse::<u128>()
    .map_err(|_| Error::InvalidInput(format!("amount `{amount}` is not an unsigned integer")))
}

fn invalid(serialized: &str, reason: &str) -> Error {
  Error::InvalidInput(format!("invalid location `{serialized}`: {reason}"))
}

type ParseResult<T> = core::result::Result<T, String>;

fn location_from_value(value: &Value) -> ParseResult<MultiLocation> {
  let object = value.as_object().ok_or("expected an object")?;
  let parents = object.get("parents").ok_or("missing `parents`")?;
  let interior = object.get("interior").ok_or("missing `interior`")?;

  let parents = scalar::<u8>(parents).ok_or("`parents` must fit in a u8")?;
  let interior = junctions(interior)?;
  Ok(MultiLocation::new(parents, interior))
}

fn junctions(value: &Value) -> ParseResult<Vec<Junction>> {
  match value {
    Value::String(here) if here.eq_ignore_ascii_case("here") => Ok(Vec::new()),
    Value::Object(object) => {
      let (key, inner) = single_entry(object)?;
      if key.eq_ignore_ascii_case("here") {
        return Ok(Vec::new());
      }
      let count = key
        .strip_prefix('X')
        .or_else(|| key.strip_prefix('x'))
        .and_then(|n| n.parse::<usize>().ok())
        .filter(|n| (1..=MAX_JUNCTIONS).contains(n))
        .ok_or_else(|| format!("unknown junctions container `{key}`"))?;

      let items: Vec<&Value> = match inner {
        Value::Array(items) => items.iter().collect(),
        single if count == 1 => vec![single],
        _ => return Err(format!("`{key}` must hold an array of {count} junctions")),
      };
      if items.len() != count {
        return Err(format!("`{key}` holds {} junctions", items.len()));
      }
      items.into_iter().map(junction).collect()
    }
    _ => Err("`interior` must be `Here` or an `X1`..`X8` object".into()),
  }
}

fn junction(value: &Value) -> ParseResult<Junction> {
  let object = value.as_object().ok_or("junction must be an object")?;
  let (kind, inner) = single_entry(object)?;

  let junction = match kind.to_ascii_lowercase().as_str() {
    "parachain" => Junction::Parachain(scalar(inner).ok_or("`Parachain` must be a u32")?),
    "palletinstance" => {
      Junction::PalletInstance(scalar(inner).ok_or("`PalletInstance` must be a u8")?)
    }
    "generalindex" => Junction::GeneralIndex(scalar(inner).ok_or("`GeneralIndex` must be a u128")?),
    "globalconsensus" => Junction::GlobalConsensus(
      network(inner)?.ok_or("`GlobalConsensus` requires a network")?,
    ),
    "accountid32" => {
      let fields = inner.as_object().ok_or("`AccountId32` must be an object")?;
      let id = fields.get("id").ok_or("`AccountId32` is missing `id`")?;
      Junction::AccountId32 {
        network: optional_network(fields)?,
        id: hex_bytes::<32>(id).ok_or("`AccountId32.id` must be 32 bytes of hex")?,
      }
    }
    "accountkey20" => {
      let fields = inner.as_object().ok_or("`AccountKey20` must be an object")?;
      let key = fields.get("key").ok_or("`AccountKey20` is missing `key`")?;
      Junction::AccountKey20 {
        network: optional_network(fields)?,
        key: hex_bytes::<20>(key).ok_or("`AccountKey20.key` must be 20 bytes of hex")?,
      }
    }
    _ => return Err(format!("unsupported junction `{kind}`")),
  };
  Ok(junction)
}

fn optional_network(fields: &Map<String, Value>) -> ParseResult<Option<NetworkId>> {
  match fields.get("network") {
    None => Ok(None),
    Some(value) => network(value),
  }
}

fn network(value: &Value) -> ParseResult<Option<NetworkId>> {
  match value {
    Value::Null => Ok(None),
    Value::String(name) => NetworkId::from_name(name)
      .map(Some)
      .ok_or_else(|| format!("unknown network `{name}`")),
    Value::Object(object) => {
      let (name, inner) = single_entry(object)?;
      match name.to_ascii_lowercase().as_str() {
        "ethereum" => {
          let chain_id = inner
            .get("chainId")
            .or_else(|| inner.get("chain_id"))
            .and_then(scalar::<u64>)
            .ok_or("`Ethereum` requires a numeric `chainId`")?;
          Ok(Some(NetworkId::Ethereum { chain_id }))
        }
        "bygenesis" => hex_bytes::<32>(inner)
          .map(|genesis| Some(NetworkId::ByGenesis(genesis)))
          .ok_or_else(|| "`ByGenesis` must be 32 bytes of hex".into()),
        _ if inner.is_null() => NetworkId::from_name(name)
          .map(Some)
          .ok_or_else(|| format!("unknown network `{name}`")),
        _ => Err(format!("unknown network `{name}`")),
      }
    }
    _ => Err("network must be a name or an object".into()),
  }
}

fn single_entry(object: &Map<String, Value>) -> ParseResult<(&String, &Value)> {
  let mut entries = object.iter();
  match (entries.next(), entries.next()) {
    (Some(entry), None) => Ok(entry),
    _ => Err(format!("expected exactly one key, found {}", object.len())),
  }
}

/// Reads an unsigned scalar given as a JSON number or a decimal string.
fn scalar<T: core::str::FromStr>(value: &Value) -> Option<T> {
  match value {
    Value::Number(number) => number.as_u64()?.to_string().parse().ok(),
    Value::String(text) => text
      .trim()
      .chars()
      .filter(|c| *c != ',')
      .collect::<String>()
      .parse()
      .ok(),
    _ => None,
  }
}

fn hex_bytes<const N: usize>(value: &Value) -> Option<[u8; N]> {
  let text = value.as_str()?;
  let body = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))?;
  let mut bytes = [0u8; N];
  hex::decode_to_slice(body, &mut bytes).ok()?;
  Some(bytes)
}
