/// ABI encoding of tuple arrays.
pub mod encoder;
/// Field layout of the encoded tuples.
pub mod schema;
