//! # Scalar Codecs
//!
//! The building blocks every spectrum codec is assembled from. Each works on
//! plain slices and produces lowercase hex text:
//!
//! - [`hex`]: fixed-width bit patterns for single `f32`/`i32` values
//! - [`index`]: 16-bit permutations used to undo a sort
//! - [`delta`]: modular bit-pattern deltas with leading-zero elision
//! - [`quantize`]: log-domain lossy quantization with stored bounds

pub mod delta;
pub mod hex;
pub mod index;
pub mod quantize;

pub use delta::DeltaDecoder;
pub use hex::HexScalar;
pub use quantize::{LossyQuantizer, QuantizedValues};
