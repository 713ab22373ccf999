//! Bit-pattern delta coding with leading-zero elision
//!
//! A sequence is written as its first bit pattern followed by the modular
//! (mod 2^32) difference of each pattern from its predecessor. Every field is
//! an 8-digit hex number with its leading zeros stripped; the number of
//! stripped zeros is kept as one hex nibble per field in a trailer appended
//! in reverse order of production:
//!
//! ```text
//! [initial][diff 1][diff 2]...[diff n] [lz n]...[lz 2][lz 1][lz initial]
//! ```
//!
//! Decoding therefore consumes digits from the head and counts from the
//! tail. Closely spaced sorted floats have small differences with many
//! leading zeros, which is where the savings come from. Since the arithmetic
//! is on raw bit patterns rather than numeric values, every sequence
//! round-trips exactly whatever its order, sign, or magnitude.

use std::marker::PhantomData;

use log::trace;

use crate::codec::hex::{format_bits, parse_hex, HexScalar, FIELD_DIGITS};
use crate::error::{CodecError, Result};

/// Largest leading-zero count a single trailer nibble can hold
const MAX_NIBBLE: usize = 15;

/// Delta-encode a non-empty sequence of scalars.
///
/// Empty input is rejected; callers map empty arrays to their own empty
/// marker.
pub fn encode<T: HexScalar>(values: &[T]) -> Result<String> {
    let (first, rest) = values
        .split_first()
        .ok_or_else(|| CodecError::range("delta encoding requires at least one value"))?;

    let mut out = String::with_capacity(values.len() * (FIELD_DIGITS + 1));
    let mut counts = Vec::with_capacity(values.len());

    let mut previous = first.bit_pattern();
    counts.push(push_stripped(&mut out, previous));
    for value in rest {
        let bits = value.bit_pattern();
        counts.push(push_stripped(&mut out, bits.wrapping_sub(previous)));
        previous = bits;
    }

    for &count in counts.iter().rev() {
        out.push(count_nibble(count)?);
    }

    trace!(
        "delta encoded {} values into {} hex digits",
        values.len(),
        out.len()
    );
    Ok(out)
}

/// Delta-decode a string into a vector of scalars
pub fn decode<T: HexScalar>(s: &str) -> Result<Vec<T>> {
    DeltaDecoder::new(s).collect()
}

/// Append `field` without its leading zero digits, returning how many were dropped
fn push_stripped(out: &mut String, field: u32) -> usize {
    let zeros = (field.leading_zeros() / 4) as usize;
    out.push_str(&format_bits(field)[zeros..]);
    zeros
}

fn count_nibble(count: usize) -> Result<char> {
    if count > MAX_NIBBLE {
        return Err(CodecError::range(format!(
            "leading-zero count {} does not fit in one hex nibble",
            count
        )));
    }
    char::from_digit(count as u32, 16)
        .ok_or_else(|| CodecError::range(format!("leading-zero count {} has no hex digit", count)))
}

/// Lazy decoder over a delta-coded string.
///
/// Yields one scalar per field in original order. The first error ends the
/// iteration; a string that does not divide exactly into fields is reported
/// as corruption rather than decoded misaligned.
pub struct DeltaDecoder<'a, T> {
    rest: &'a [u8],
    current: Option<u32>,
    done: bool,
    _scalar: PhantomData<T>,
}

impl<'a, T: HexScalar> DeltaDecoder<'a, T> {
    /// Start decoding `s`
    pub fn new(s: &'a str) -> Self {
        Self {
            rest: s.as_bytes(),
            current: None,
            done: false,
            _scalar: PhantomData,
        }
    }

    fn next_field(&mut self) -> Result<u32> {
        let (&nibble, _) = self
            .rest
            .split_last()
            .ok_or_else(|| CodecError::decode("delta string is empty"))?;

        let count = (nibble as char)
            .to_digit(16)
            .ok_or_else(|| CodecError::decode(format!("invalid leading-zero nibble {:?}", nibble as char)))?
            as usize;
        if count > FIELD_DIGITS {
            return Err(CodecError::decode(format!(
                "leading-zero count {} exceeds field width {}",
                count, FIELD_DIGITS
            )));
        }

        let take = FIELD_DIGITS - count;
        let body_len = self.rest.len() - 1;
        if take > body_len {
            return Err(CodecError::decode(format!(
                "delta string truncated: field needs {} digits, {} remain",
                take, body_len
            )));
        }

        let digits = &self.rest[..take];
        self.rest = &self.rest[take..body_len];

        if digits.is_empty() {
            return Ok(0);
        }
        if digits[0] == b'0' {
            return Err(CodecError::decode(
                "delta field has unstripped leading zero; stride is misaligned",
            ));
        }
        let digits = std::str::from_utf8(digits)
            .map_err(|_| CodecError::decode("delta string contains non-ASCII bytes"))?;
        parse_hex(digits)
    }
}

impl<T: HexScalar> Iterator for DeltaDecoder<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || (self.current.is_some() && self.rest.is_empty()) {
            return None;
        }

        match self.next_field() {
            Ok(field) => {
                let bits = match self.current {
                    None => field,
                    Some(previous) => previous.wrapping_add(field),
                };
                self.current = Some(bits);
                Some(Ok(T::from_bit_pattern(bits)))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
