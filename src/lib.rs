use std::path::Path;

use log::{debug, info};

/// Error taxonomy of the encoder.
pub mod error;
/// Decimal parsing and 128-bit limb packing.
pub mod limbs;
/// Job output records and their packed form.
pub mod outputs;
/// Solidity ABI encoding.
pub mod sol;

use error::Result;
use outputs::{load_outputs, PackedOutputRecord, RawOutputRecord};
use sol::{
    encoder::{to_hex, TupleEncoder},
    schema::EncodingSchema,
};

/// Packs every raw output, failing on the first malformed record.
pub fn pack_outputs(outputs: &[RawOutputRecord]) -> Result<Vec<PackedOutputRecord>> {
    outputs
        .iter()
        .enumerate()
        .map(|(index, output)| PackedOutputRecord::pack(index, output))
        .collect()
}

/// Packs and ABI-encodes a batch of raw outputs with `encoder`'s schema.
pub fn encode_outputs(outputs: &[RawOutputRecord], encoder: &TupleEncoder) -> Result<Vec<u8>> {
    let packed = pack_outputs(outputs)?;
    debug!("Packed {} job outputs", packed.len());
    encoder.encode(&packed)
}

/// Reads the job outputs at `outputs_path` and returns the `0x`-prefixed hex
/// encoding the verifier accepts.
pub fn compute_outputs(outputs_path: &Path) -> Result<String> {
    let outputs = load_outputs(outputs_path)?;
    let encoder = TupleEncoder::new(EncodingSchema::job_outputs());

    let encoded = encode_outputs(&outputs, &encoder)?;
    info!(
        "Encoded {} job outputs into {} bytes",
        outputs.len(),
        encoded.len()
    );

    Ok(to_hex(&encoded))
}
