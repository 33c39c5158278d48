use alloy::{
    dyn_abi::DynSolValue,
    primitives::{B256, U256},
};
use log::debug;

use crate::{
    error::{Error, Result},
    sol::schema::{EncodingSchema, WireType},
};

/// Types that can be laid out as one tuple of an [`EncodingSchema`].
pub trait SolTuple {
    /// Raw bytes of every field, in schema order.
    fn fields(&self) -> Vec<&[u8]>;
}

/// ABI encoder for an array of fixed-shape tuples.
#[derive(Debug, Clone)]
pub struct TupleEncoder {
    schema: EncodingSchema,
}

impl TupleEncoder {
    pub fn new(schema: EncodingSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &EncodingSchema {
        &self.schema
    }

    /// Encodes `records` as a single `tuple(...)[]` parameter.
    ///
    /// Every record is checked against the schema before any byte is
    /// produced. The payload is the array's offset word, the element count,
    /// then each tuple's fields as 32-byte words.
    pub fn encode<T: SolTuple>(&self, records: &[T]) -> Result<Vec<u8>> {
        let tuples = records
            .iter()
            .enumerate()
            .map(|(index, record)| self.tokenize(index, record))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Encoding {} tuples as {}",
            tuples.len(),
            self.schema.sol_type_name()
        );
        Ok(DynSolValue::Array(tuples).abi_encode())
    }

    fn tokenize<T: SolTuple>(&self, index: usize, record: &T) -> Result<DynSolValue> {
        let fields = record.fields();
        if fields.len() != self.schema.len() {
            return Err(Error::SchemaMismatch {
                index,
                expected: self.schema.len(),
                actual: fields.len(),
            });
        }

        let tokens = self
            .schema
            .fields()
            .iter()
            .zip(fields)
            .enumerate()
            .map(|(position, (wire_type, field))| {
                if field.len() != wire_type.width() {
                    return Err(Error::Encoding {
                        index,
                        position,
                        wire_type: *wire_type,
                        expected: wire_type.width(),
                        actual: field.len(),
                    });
                }
                Ok(match wire_type {
                    WireType::FixedBytes32 => DynSolValue::FixedBytes(B256::from_slice(field), 32),
                    WireType::Uint256 => DynSolValue::Uint(U256::from_be_slice(field), 256),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DynSolValue::Tuple(tokens))
    }

    /// Decodes a payload produced by [`TupleEncoder::encode`] back into the
    /// 32-byte words of every tuple.
    pub fn decode(&self, payload: &[u8]) -> Result<Vec<Vec<B256>>> {
        let value = self
            .schema
            .array_type()
            .abi_decode(payload)
            .map_err(|err| Error::Decode(err.to_string()))?;
        let tuples = value
            .as_array()
            .ok_or(Error::Decode("Payload is not an array".to_owned()))?;

        tuples
            .iter()
            .map(|tuple| -> Result<Vec<B256>> {
                tuple
                    .as_tuple()
                    .ok_or(Error::Decode("Array element is not a tuple".to_owned()))?
                    .iter()
                    .map(|field| match field {
                        DynSolValue::FixedBytes(word, 32) => Ok(*word),
                        DynSolValue::Uint(value, 256) => Ok(B256::from(value.to_be_bytes::<32>())),
                        other => Err(Error::Decode(format!("Unexpected tuple field {other:?}"))),
                    })
                    .collect()
            })
            .collect()
    }
}

/// Renders bytes as a `0x`-prefixed lowercase hex string.
pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
