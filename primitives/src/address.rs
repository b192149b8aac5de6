//! Raw address classification.
//!
//! The junction variant used for an account is decided by the shape of the address string, not
//! by caller intent: `0x` followed by 20 bytes of hex is an `AccountKey20`, `0x` followed by 32
//! bytes of hex or a checksum-valid SS58 string is an `AccountId32`.

use blake2::{Blake2b512, Digest};
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

const SS58_PREFIX: &[u8] = b"SS58PRE";
const SS58_CHECKSUM_LEN: usize = 2;

/// Which account junction an address maps to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AddressKind {
  AccountId32,
  AccountKey20,
}

/// A validated account, ready to be placed in a location.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  Hash,
  MaxEncodedLen,
  Ord,
  PartialEq,
  PartialOrd,
  TypeInfo,
)]
pub enum Account {
  Id32([u8; 32]),
  Key20([u8; 20]),
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum AddressError {
  /// Not hex of a known length and not a valid SS58 string.
  #[error("`{0}` is neither a 20-byte nor a 32-byte account address")]
  Unrecognized(String),
  /// SS58 string whose checksum does not match its payload.
  #[error("`{0}` has an invalid SS58 checksum")]
  BadChecksum(String),
}

impl Account {
  /// Classifies and decodes a raw address.
  pub fn parse(address: &str) -> Result<Self, AddressError> {
    let unrecognized = || AddressError::Unrecognized(address.to_string());

    if let Some(body) = address
      .strip_prefix("0x")
      .or_else(|| address.strip_prefix("0X"))
    {
      return match body.len() {
        40 => {
          let mut key = [0u8; 20];
          hex::decode_to_slice(body, &mut key).map_err(|_| unrecognized())?;
          Ok(Account::Key20(key))
        }
        64 => {
          let mut id = [0u8; 32];
          hex::decode_to_slice(body, &mut id).map_err(|_| unrecognized())?;
          Ok(Account::Id32(id))
        }
        _ => Err(unrecognized()),
      };
    }

    decode_ss58(address).map(Account::Id32)
  }

  pub fn kind(&self) -> AddressKind {
    match self {
      Account::Id32(_) => AddressKind::AccountId32,
      Account::Key20(_) => AddressKind::AccountKey20,
    }
  }

  /// Lowercase `0x`-prefixed hex of the raw account bytes.
  pub fn to_hex(&self) -> String {
    match self {
      Account::Id32(id) => format!("0x{}", hex::encode(id)),
      Account::Key20(key) => format!("0x{}", hex::encode(key)),
    }
  }
}

fn decode_ss58(address: &str) -> Result<[u8; 32], AddressError> {
  let unrecognized = || AddressError::Unrecognized(address.to_string());

  let data = bs58::decode(address).into_vec().map_err(|_| unrecognized())?;
  let prefix_len = match data.first().copied() {
    Some(0..=63) => 1,
    Some(64..=127) => 2,
    _ => return Err(unrecognized()),
  };
  if data.len() != prefix_len + 32 + SS58_CHECKSUM_LEN {
    return Err(unrecognized());
  }

  let (body, checksum) = data.split_at(data.len() - SS58_CHECKSUM_LEN);
  let hash = Blake2b512::new()
    .chain_update(SS58_PREFIX)
    .chain_update(body)
    .finalize();
  if hash[..SS58_CHECKSUM_LEN] != *checksum {
    return Err(AddressError::BadChecksum(address.to_string()));
  }

  let mut id = [0u8; 32];
  id.copy_from_slice(&body[prefix_len..]);
  Ok(id)
}
