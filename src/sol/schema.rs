use std::fmt;

use alloy::dyn_abi::DynSolType;

/// Primitive Solidity types a tuple field can be encoded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    /// `bytes32`, emitted verbatim.
    FixedBytes32,
    /// `uint256`, emitted as a big-endian word.
    Uint256,
}

impl WireType {
    /// Number of bytes a field of this type must supply.
    pub const fn width(&self) -> usize {
        32
    }

    pub fn sol_type(&self) -> DynSolType {
        match self {
            WireType::FixedBytes32 => DynSolType::FixedBytes(32),
            WireType::Uint256 => DynSolType::Uint(256),
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireType::FixedBytes32 => f.write_str("bytes32"),
            WireType::Uint256 => f.write_str("uint256"),
        }
    }
}

/// Ordered field types of one tuple in the encoded array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingSchema {
    fields: Vec<WireType>,
}

impl EncodingSchema {
    pub fn new(fields: Vec<WireType>) -> Self {
        Self { fields }
    }

    /// Schema of the verifier's job outputs: six `bytes32` hashes and roots
    /// followed by the packed MMR sizes as `uint256`.
    pub fn job_outputs() -> Self {
        Self::new(vec![
            WireType::FixedBytes32, // blockNPlusOneParentHash
            WireType::FixedBytes32, // blockNMinusRPlusOneParentHash
            WireType::FixedBytes32, // mmrPreviousRootPoseidon
            WireType::FixedBytes32, // mmrPreviousRootKeccak
            WireType::FixedBytes32, // mmrNewRootPoseidon
            WireType::FixedBytes32, // mmrNewRootKeccak
            WireType::Uint256,      // mmrLastLen + newMmrLen
        ])
    }

    pub fn fields(&self) -> &[WireType] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Dynamic type of a single tuple.
    pub fn tuple_type(&self) -> DynSolType {
        DynSolType::Tuple(self.fields.iter().map(WireType::sol_type).collect())
    }

    /// Dynamic type of the whole payload, an array of tuples.
    pub fn array_type(&self) -> DynSolType {
        DynSolType::Array(Box::new(self.tuple_type()))
    }

    /// Solidity signature of the payload, e.g. `tuple(bytes32,uint256)[]`.
    pub fn sol_type_name(&self) -> String {
        let fields: Vec<String> = self.fields.iter().map(ToString::to_string).collect();
        format!("tuple({})[]", fields.join(","))
    }
}
