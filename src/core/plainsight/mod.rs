//! Plainsight codec.
//!
//! Hides an arbitrary byte payload inside ordinary carrier text and gets it
//! back out. The payload is wrapped in a frame:
//!
//! ```text
//! "gp" ‖ version (1) ‖ reserved (1) ‖ length u32 BE ‖ payload ‖ sha256(payload)[..4]
//! ```
//!
//! The 8-byte frame prefix is written into the first 64 slots of the
//! carrier. The rest of the frame is spread across the remaining slots at
//! a fixed stride, which the decoder recomputes from the length it read.
//!
//! ## Adding a New Embedding
//!
//! 1. Implement the `Embedding` trait
//! 2. Add the implementation in a new file
//! 3. Use it through `encode_with` / `decode_with`

mod parity;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{CodecError, Result};

pub use parity::SpaceParity;

const FRAME_MAGIC: &[u8; 2] = b"gp";
const FRAME_VERSION: u8 = 1;
const PREFIX_LEN: usize = 8;
const CHECKSUM_LEN: usize = 4;
const PREFIX_BITS: usize = PREFIX_LEN * 8;

/// Bytes of framing added around every payload.
pub const FRAME_OVERHEAD: usize = PREFIX_LEN + CHECKSUM_LEN;

/// A reversible way of carrying bits in text.
///
/// Implementations must be deterministic, and the slots of an embedded
/// text must be the same slots as those of the original carrier.
pub trait Embedding {
    /// Number of bit-carrying slots in `text`.
    fn slots(&self, text: &str) -> usize;

    /// Rewrite `text` so that slot `i` carries `bits[i]`.
    ///
    /// Slots beyond `bits.len()` carry `false`.
    fn embed(&self, text: &str, bits: &[bool]) -> String;

    /// Read the bit carried by every slot of `text`.
    fn extract(&self, text: &str) -> Vec<bool>;
}

/// Payload bytes `carrier` can hold with the default embedding.
pub fn capacity(carrier: &str) -> usize {
    capacity_with(&SpaceParity, carrier)
}

/// Payload bytes `carrier` can hold with `embedding`.
///
/// A carrier with fewer slots than an empty frame needs reports 0 but cannot
/// hold even an empty payload.
pub fn capacity_with(embedding: &impl Embedding, carrier: &str) -> usize {
    (embedding.slots(carrier) / 8).saturating_sub(FRAME_OVERHEAD)
}

/// Embed `payload` in `carrier` with the default embedding.
///
/// # Errors
///
/// Returns `CodecError::CapacityExceeded` if the carrier is too small. The
/// check happens before anything is embedded.
pub fn encode(carrier: &str, payload: &[u8]) -> Result<String> {
    encode_with(&SpaceParity, carrier, payload)
}

/// Recover a payload embedded by [`encode`].
///
/// # Errors
///
/// Returns `CodecError::NoPayload` if the text carries no frame, or
/// `CodecError::IntegrityMismatch` if the checksum does not match.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    decode_with(&SpaceParity, text)
}

/// Embed `payload` in `carrier` using `embedding`.
pub fn encode_with(embedding: &impl Embedding, carrier: &str, payload: &[u8]) -> Result<String> {
    let slots = embedding.slots(carrier);
    let frame_bits_needed = payload
        .len()
        .saturating_add(FRAME_OVERHEAD)
        .saturating_mul(8);
    if frame_bits_needed > slots || payload.len() > u32::MAX as usize {
        return Err(CodecError::CapacityExceeded {
            needed: payload.len(),
            available: capacity_with(embedding, carrier),
        }
        .into());
    }

    let frame = frame(payload);
    let frame_bits = to_bits(&frame);

    let mut bits = vec![false; slots];
    bits[..PREFIX_BITS].copy_from_slice(&frame_bits[..PREFIX_BITS]);
    let body = &frame_bits[PREFIX_BITS..];
    let step = stride(slots, body.len());
    for (i, &bit) in body.iter().enumerate() {
        bits[PREFIX_BITS + i * step] = bit;
    }

    debug!(
        "embedding {} payload bytes in {} slots (stride {})",
        payload.len(),
        slots,
        step
    );
    Ok(embedding.embed(carrier, &bits))
}

/// Recover a payload embedded by [`encode_with`] with the same embedding.
pub fn decode_with(embedding: &impl Embedding, text: &str) -> Result<Vec<u8>> {
    let bits = embedding.extract(text);
    if bits.len() < PREFIX_BITS {
        return Err(CodecError::NoPayload.into());
    }

    let prefix = from_bits(&bits[..PREFIX_BITS]);
    if &prefix[..2] != FRAME_MAGIC || prefix[2] != FRAME_VERSION || prefix[3] != 0 {
        return Err(CodecError::NoPayload.into());
    }
    let len = u32::from_be_bytes([prefix[4], prefix[5], prefix[6], prefix[7]]) as usize;

    let body_bits = (len + CHECKSUM_LEN) * 8;
    if len > bits.len() / 8 || PREFIX_BITS + body_bits > bits.len() {
        return Err(CodecError::NoPayload.into());
    }

    let step = stride(bits.len(), body_bits);
    let body: Vec<bool> = (0..body_bits)
        .map(|i| bits[PREFIX_BITS + i * step])
        .collect();
    let body = from_bits(&body);
    let (payload, checksum) = body.split_at(len);

    if checksum != &digest(payload)[..] {
        return Err(CodecError::IntegrityMismatch.into());
    }

    Ok(payload.to_vec())
}

fn frame(payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(payload.len() + FRAME_OVERHEAD);
    frame.extend_from_slice(FRAME_MAGIC);
    frame.push(FRAME_VERSION);
    frame.push(0);
    frame.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    frame.extend_from_slice(payload);
    frame.extend_from_slice(&digest(payload));
    frame
}

fn digest(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = Sha256::digest(payload);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hash[..CHECKSUM_LEN]);
    out
}

/// Spacing between body bits so they spread over every slot after the prefix.
fn stride(slots: usize, body_bits: usize) -> usize {
    ((slots - PREFIX_BITS) / body_bits).max(1)
}

fn to_bits(bytes: &[u8]) -> Vec<bool> {
    bytes
        .iter()
        .flat_map(|byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
        .collect()
}

fn from_bits(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit)))
        .collect()
}
