//! CIP-37 base32 checksum addresses.
//!
//! An address is written `<prefix>[:type.<kind>]:<payload>` where the payload is the base32
//! encoding of a version byte, the 20 bytes of the account and a 40-bit checksum computed over
//! the prefix and the data. Addresses are either entirely lowercase or entirely uppercase.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Error;

pub const MAINNET_PREFIX: &str = "cfx";
pub const TESTNET_PREFIX: &str = "cfxtest";
const CUSTOM_NETWORK_PREFIX: &str = "net";

const ALPHABET: &[u8; 32] = b"abcdefghjkmnprstuvwxyz0123456789";
const GENERATORS: [u64; 5] = [0x98f2bc8e61, 0x79b76d99e2, 0xf33e5fb3c4, 0xae2eabe2a8, 0x1e4f43e470];

const VERSION_BYTE: u8 = 0;
const BODY_LENGTH: usize = 20;
const CHECKSUM_LENGTH: usize = 8;
const PAYLOAD_LENGTH: usize = 42;

/// Kind of account, derived from the first bits of the address body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    Null,
    Builtin,
    User,
    Contract,
    Unknown,
}

impl AddressType {
    fn from_body(body: &[u8; BODY_LENGTH]) -> Self {
        if body.iter().all(|b| *b == 0) {
            return Self::Null;
        }

        match body[0] >> 4 {
            0x0 => Self::Builtin,
            0x1 => Self::User,
            0x8 => Self::Contract,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Builtin => "builtin",
            Self::User => "user",
            Self::Contract => "contract",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    prefix: String,
    body: [u8; BODY_LENGTH],
}

impl Address {
    /// Parse and validate a base32 address. The optional `type.<kind>` segment must match
    /// the kind of the account.
    pub fn parse(value: &str) -> Result<Self, Error> {
        Self::decode(value).map_err(|reason| Error::InvalidAddress(format!("{}: {}", value, reason)))
    }

    /// Network prefix, always lowercase
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn address_type(&self) -> AddressType {
        AddressType::from_body(&self.body)
    }

    /// Hex representation of the account, `0x` prefixed
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.body))
    }

    fn decode(value: &str) -> Result<Self, String> {
        if value.is_empty() {
            return Err("empty address".to_string());
        }

        let lowered = value.to_lowercase();
        if value != lowered && value != value.to_uppercase() {
            return Err("mixed case".to_string());
        }

        let parts: Vec<&str> = lowered.split(':').collect();
        let (prefix, rest) = parts.split_first().ok_or("missing network prefix")?;
        let (payload, options) = rest.split_last().ok_or("missing network prefix")?;

        validate_prefix(prefix)?;

        if payload.len() != PAYLOAD_LENGTH {
            return Err(format!("payload must be {} characters long", PAYLOAD_LENGTH));
        }

        let words = payload
            .bytes()
            .map(|c| ALPHABET.iter().position(|x| *x == c).map(|x| x as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or("invalid base32 character")?;

        if polymod(prefix_words(prefix).chain(words.iter().copied())) != 0 {
            return Err("invalid checksum".to_string());
        }

        let data = from_words(&words[..words.len() - CHECKSUM_LENGTH])?;
        let (version, body) = data.split_first().ok_or("missing version byte")?;
        if *version != VERSION_BYTE {
            return Err(format!("unsupported version byte {}", version));
        }

        let body: [u8; BODY_LENGTH] = body.try_into().map_err(|_| "invalid account length".to_string())?;
        let address = Self {
            prefix: prefix.to_string(),
            body,
        };

        for option in options {
            match option.split_once('.') {
                Some(("type", kind)) if kind == address.address_type().as_str() => {},
                Some(("type", kind)) => return Err(format!("type mismatch, address is {} not {}", address.address_type().as_str(), kind)),
                _ => return Err(format!("unknown option {}", option)),
            }
        }

        Ok(address)
    }

    fn encode(&self) -> String {
        let mut data = Vec::with_capacity(1 + BODY_LENGTH);
        data.push(VERSION_BYTE);
        data.extend_from_slice(&self.body);

        let words = to_words(&data);
        let checksum = polymod(
            prefix_words(&self.prefix)
                .chain(words.iter().copied())
                .chain([0u8; CHECKSUM_LENGTH]),
        );

        let checksum_words = (0..CHECKSUM_LENGTH).rev().map(|i| ((checksum >> (5 * i)) & 0x1f) as u8);

        let mut encoded = String::with_capacity(self.prefix.len() + 1 + PAYLOAD_LENGTH);
        encoded.push_str(&self.prefix);
        encoded.push(':');
        encoded.extend(words.into_iter().chain(checksum_words).map(|w| ALPHABET[w as usize] as char));

        encoded
    }
}

fn validate_prefix(prefix: &str) -> Result<(), String> {
    if prefix == MAINNET_PREFIX || prefix == TESTNET_PREFIX {
        return Ok(());
    }

    let id = prefix
        .strip_prefix(CUSTOM_NETWORK_PREFIX)
        .and_then(|id| id.parse::<u32>().ok())
        .filter(|id| format!("{}{}", CUSTOM_NETWORK_PREFIX, id) == prefix)
        .ok_or_else(|| format!("unknown network prefix {}", prefix))?;

    match id {
        1 | 1029 => Err(format!("network {} must use its named prefix", id)),
        _ => Ok(()),
    }
}

fn prefix_words(prefix: &str) -> impl Iterator<Item = u8> + '_ {
    prefix.bytes().map(|b| b & 0x1f).chain(std::iter::once(0))
}

fn polymod(values: impl IntoIterator<Item = u8>) -> u64 {
    let mut checksum: u64 = 1;
    for value in values {
        let top = checksum >> 35;
        checksum = ((checksum & 0x07_ffff_ffff) << 5) ^ u64::from(value);
        for (i, generator) in GENERATORS.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                checksum ^= generator;
            }
        }
    }

    checksum ^ 1
}

fn to_words(bytes: &[u8]) -> Vec<u8> {
    let mut words = Vec::with_capacity((bytes.len() * 8).div_ceil(5));
    let mut accumulator: u32 = 0;
    let mut bits = 0;

    for byte in bytes {
        accumulator = (accumulator << 8) | u32::from(*byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            words.push(((accumulator >> bits) & 0x1f) as u8);
        }
        accumulator &= (1 << bits) - 1;
    }

    if bits > 0 {
        words.push(((accumulator << (5 - bits)) & 0x1f) as u8);
    }

    words
}

fn from_words(words: &[u8]) -> Result<Vec<u8>, String> {
    let mut bytes = Vec::with_capacity(words.len() * 5 / 8);
    let mut accumulator: u32 = 0;
    let mut bits = 0;

    for word in words {
        accumulator = (accumulator << 5) | u32::from(*word);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            bytes.push((accumulator >> bits) as u8);
        }
        accumulator &= (1 << bits) - 1;
    }

    if bits >= 5 || accumulator != 0 {
        return Err("invalid padding".to_string());
    }

    Ok(bytes)
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}
