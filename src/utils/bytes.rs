//! Raw payload helpers: base58 decoding and fixed-offset integer reads

use crate::errors::{ErrorExt, ParseResult};

/// Decode a base58 instruction payload as delivered by the RPC node.
pub fn decode_base58(encoded: &str) -> ParseResult<Vec<u8>> {
    bs58::decode(encoded).into_vec().input_context("instruction data")
}

/// Byte order of an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

/// Read an unsigned integer of `width` bytes (1..=8) starting at `offset`.
///
/// Returns `None` when the slice is too short, or the width is out of range.
pub fn read_uint(data: &[u8], offset: usize, width: usize, endian: Endian) -> Option<u64> {
    if width == 0 || width > 8 {
        return None;
    }
    let end = offset.checked_add(width)?;
    let field = data.get(offset..end)?;

    let mut buf = [0u8; 8];
    match endian {
        Endian::Little => {
            buf[..width].copy_from_slice(field);
            Some(u64::from_le_bytes(buf))
        }
        Endian::Big => {
            buf[8 - width..].copy_from_slice(field);
            Some(u64::from_be_bytes(buf))
        }
    }
}
