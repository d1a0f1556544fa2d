//! Price decoding from marketplace instruction payloads

use log::debug;

use crate::constants::Marketplace;
use crate::errors::{ErrorContext, ParseError, ParseResult};
use crate::utils::bytes::read_uint;

/// Decode the embedded price, in lamports, of a marketplace instruction.
///
/// The layout is chosen from the program id alone. A payload that ends
/// before the price field does is an error, never a zero price.
pub fn decode_price(data: &[u8], program_id: &str) -> ParseResult<u64> {
    let context = ErrorContext::new("price_decoder", "decode_price")
        .with_program(program_id)
        .with_details(format!("data_len={}", data.len()));

    let marketplace = Marketplace::from_program_id(program_id)
        .ok_or_else(|| ParseError::decode(context.clone(), "no price layout registered"))?;
    let layout = marketplace.price_layout();

    let price = read_uint(data, layout.offset, layout.width, layout.endian).ok_or_else(|| {
        ParseError::decode(
            context,
            format!(
                "payload too short for price at offset {} (need {} bytes)",
                layout.offset,
                layout.required_len()
            ),
        )
    })?;

    debug!("Decoded {} price: {} lamports", marketplace, price);
    Ok(price)
}
