//! Payload size validation and body truncation.
//!
//! A payload over its ceiling is recovered by cutting the body text and
//! re-rendering. JSON escaping and multi-byte characters make the mapping
//! from body bytes to payload bytes non-linear, so every cut is followed by
//! a real re-measure instead of arithmetic on the first render. Overflow the
//! body cannot absorb is reported as [`PushPrismError::PayloadTooLarge`].

use crate::error::{PushPrismError, Result};
use crate::message::Message;
use crate::payload;
use crate::platform::Platform;

/// Marker appended to a body that had to be shortened.
pub const TRUNCATION_MARKER: &str = "…";

/// Render `platform`'s payload for `msg`, truncating the body text until the
/// serialized payload fits `limit` bytes.
///
/// The message itself is never modified; only the rendered copy shrinks.
pub fn render_within(msg: &Message, platform: Platform, limit: usize) -> Result<String> {
    let family = platform.family();
    let text = msg.default_text();
    let body = (!text.is_empty()).then_some(text);

    let rendered = payload::render(family, msg, body)?;
    if rendered.len() <= limit {
        return Ok(rendered);
    }

    // Body text is the only thing allowed to shrink. When the render does
    // not embed it, the overflow is structural and unrecoverable.
    if body.is_none() || !payload::embeds_body(family, msg) {
        return Err(PushPrismError::PayloadTooLarge {
            platform,
            size: rendered.len(),
            limit,
        });
    }

    let mut budget = text.len();
    let mut size = rendered.len();
    loop {
        let excess = size - limit;
        if budget <= excess {
            return Err(PushPrismError::PayloadTooLarge {
                platform,
                size,
                limit,
            });
        }
        budget -= excess;

        let short = truncate_marked(text, budget);
        let rendered = payload::render(family, msg, Some(&short))?;
        size = rendered.len();
        if size <= limit {
            tracing::debug!(
                platform = %platform,
                body_bytes = short.len(),
                payload_bytes = size,
                limit,
                "body truncated to fit payload ceiling"
            );
            return Ok(rendered);
        }
    }
}

/// First `budget` bytes of `text`, cut back to a char boundary, with the
/// truncation marker appended.
fn truncate_marked(text: &str, budget: usize) -> String {
    let mut cut = budget.min(text.len());
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    let mut out = String::with_capacity(cut + TRUNCATION_MARKER.len());
    out.push_str(&text[..cut]);
    out.push_str(TRUNCATION_MARKER);
    out
}
