use std::{fs, path::Path};

use alloy::primitives::B256;
use log::debug;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use serde_with::serde_as;

use crate::{
    error::{Error, Result},
    limbs::{merge_limbs, to_bytes32, Limb},
    sol::encoder::SolTuple,
};

/// Deserializes a JSON string or number into its decimal text.
///
/// Numbers keep the exact digits of the document, so values wider than
/// 64 bits are not rounded.
pub struct DecimalString;

impl<'de> serde_with::DeserializeAs<'de, String> for DecimalString {
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(value) => Ok(value),
            Value::Number(value) => Ok(value.to_string()),
            other => Err(serde::de::Error::custom(format!(
                "expected a decimal string or number, got {other}"
            ))),
        }
    }
}

/// One job output as written by the prover, every value in decimal.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawOutputRecord {
    #[serde_as(as = "DecimalString")]
    pub block_n_plus_one_parent_hash_low: String,
    #[serde_as(as = "DecimalString")]
    pub block_n_plus_one_parent_hash_high: String,
    #[serde_as(as = "DecimalString")]
    pub block_n_minus_r_plus_one_parent_hash_low: String,
    #[serde_as(as = "DecimalString")]
    pub block_n_minus_r_plus_one_parent_hash_high: String,
    #[serde_as(as = "DecimalString")]
    pub mmr_last_root_poseidon: String,
    #[serde_as(as = "DecimalString")]
    pub mmr_last_root_keccak_low: String,
    #[serde_as(as = "DecimalString")]
    pub mmr_last_root_keccak_high: String,
    #[serde_as(as = "DecimalString")]
    pub mmr_last_len: String,
    #[serde_as(as = "DecimalString")]
    pub new_mmr_root_poseidon: String,
    #[serde_as(as = "DecimalString")]
    pub new_mmr_root_keccak_low: String,
    #[serde_as(as = "DecimalString")]
    pub new_mmr_root_keccak_high: String,
    #[serde_as(as = "DecimalString")]
    pub new_mmr_len: String,
}

/// Reads the JSON array of job outputs at `path`.
pub fn load_outputs(path: &Path) -> Result<Vec<RawOutputRecord>> {
    if !path.is_file() {
        return Err(Error::Argument(format!(
            "{} is not an existing file",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let outputs: Vec<RawOutputRecord> = serde_json::from_str(&content)?;

    debug!("Loaded {} job outputs from {}", outputs.len(), path.display());
    Ok(outputs)
}

/// A job output merged into the seven words the verifier expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackedOutputRecord {
    pub block_n_plus_one_parent_hash: B256,
    pub block_n_minus_r_plus_one_parent_hash: B256,
    pub mmr_previous_root_poseidon: B256,
    pub mmr_previous_root_keccak: B256,
    pub mmr_new_root_poseidon: B256,
    pub mmr_new_root_keccak: B256,
    /// Previous MMR length in the low limb, new MMR length in the high limb.
    pub mmr_sizes_packed: B256,
}

impl PackedOutputRecord {
    pub const FIELD_COUNT: usize = 7;

    /// Packs the record at position `index` of a batch.
    ///
    /// Errors name the record index and the JSON key of the failing value.
    pub fn pack(index: usize, raw: &RawOutputRecord) -> Result<Self> {
        let limb = |field: &'static str, value: &str| {
            Limb::from_decimal(value).map_err(|source| Error::Field {
                index,
                field,
                source,
            })
        };
        let word = |field: &'static str, value: &str| {
            to_bytes32(value).map_err(|source| Error::Field {
                index,
                field,
                source,
            })
        };

        Ok(Self {
            block_n_plus_one_parent_hash: merge_limbs(
                limb(
                    "block_n_plus_one_parent_hash_low",
                    &raw.block_n_plus_one_parent_hash_low,
                )?,
                limb(
                    "block_n_plus_one_parent_hash_high",
                    &raw.block_n_plus_one_parent_hash_high,
                )?,
            ),
            block_n_minus_r_plus_one_parent_hash: merge_limbs(
                limb(
                    "block_n_minus_r_plus_one_parent_hash_low",
                    &raw.block_n_minus_r_plus_one_parent_hash_low,
                )?,
                limb(
                    "block_n_minus_r_plus_one_parent_hash_high",
                    &raw.block_n_minus_r_plus_one_parent_hash_high,
                )?,
            ),
            mmr_previous_root_poseidon: word(
                "mmr_last_root_poseidon",
                &raw.mmr_last_root_poseidon,
            )?,
            mmr_previous_root_keccak: merge_limbs(
                limb("mmr_last_root_keccak_low", &raw.mmr_last_root_keccak_low)?,
                limb("mmr_last_root_keccak_high", &raw.mmr_last_root_keccak_high)?,
            ),
            mmr_new_root_poseidon: word("new_mmr_root_poseidon", &raw.new_mmr_root_poseidon)?,
            mmr_new_root_keccak: merge_limbs(
                limb("new_mmr_root_keccak_low", &raw.new_mmr_root_keccak_low)?,
                limb("new_mmr_root_keccak_high", &raw.new_mmr_root_keccak_high)?,
            ),
            mmr_sizes_packed: merge_limbs(
                limb("mmr_last_len", &raw.mmr_last_len)?,
                limb("new_mmr_len", &raw.new_mmr_len)?,
            ),
        })
    }

    /// The seven words in encoding order.
    pub fn words(&self) -> [B256; Self::FIELD_COUNT] {
        [
            self.block_n_plus_one_parent_hash,
            self.block_n_minus_r_plus_one_parent_hash,
            self.mmr_previous_root_poseidon,
            self.mmr_previous_root_keccak,
            self.mmr_new_root_poseidon,
            self.mmr_new_root_keccak,
            self.mmr_sizes_packed,
        ]
    }

    /// Splits `mmr_sizes_packed` back into `(previous, new)` MMR lengths.
    pub fn mmr_sizes(&self) -> (u128, u128) {
        let mut high = [0u8; 16];
        let mut low = [0u8; 16];
        high.copy_from_slice(&self.mmr_sizes_packed[..16]);
        low.copy_from_slice(&self.mmr_sizes_packed[16..]);
        (u128::from_be_bytes(low), u128::from_be_bytes(high))
    }
}

impl SolTuple for PackedOutputRecord {
    fn fields(&self) -> Vec<&[u8]> {
        vec![
            self.block_n_plus_one_parent_hash.as_slice(),
            self.block_n_minus_r_plus_one_parent_hash.as_slice(),
            self.mmr_previous_root_poseidon.as_slice(),
            self.mmr_previous_root_keccak.as_slice(),
            self.mmr_new_root_poseidon.as_slice(),
            self.mmr_new_root_keccak.as_slice(),
            self.mmr_sizes_packed.as_slice(),
        ]
    }
}

impl TryFrom<&[B256]> for PackedOutputRecord {
    type Error = Error;

    fn try_from(words: &[B256]) -> Result<Self> {
        let words: [B256; Self::FIELD_COUNT] = words.try_into().map_err(|_| {
            Error::Decode(format!(
                "Expected {} words per output, got {}",
                Self::FIELD_COUNT,
                words.len()
            ))
        })?;
        let [block_n_plus_one_parent_hash, block_n_minus_r_plus_one_parent_hash, mmr_previous_root_poseidon, mmr_previous_root_keccak, mmr_new_root_poseidon, mmr_new_root_keccak, mmr_sizes_packed] =
            words;

        Ok(Self {
            block_n_plus_one_parent_hash,
            block_n_minus_r_plus_one_parent_hash,
            mmr_previous_root_poseidon,
            mmr_previous_root_keccak,
            mmr_new_root_poseidon,
            mmr_new_root_keccak,
            mmr_sizes_packed,
        })
    }
}
