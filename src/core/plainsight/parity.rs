//! Space-parity embedding.
//!
//! A slot is a single space between two non-whitespace characters, i.e. an
//! ordinary gap between words. An ASCII space carries `0`, a no-break space
//! (U+00A0) carries `1`. Nothing else in the carrier is touched, so the
//! words, punctuation and line layout survive and the slots found in an
//! encoded text are exactly the slots of the original carrier.

use super::Embedding;

const ZERO: char = ' ';
const ONE: char = '\u{00A0}';

/// Default plainsight embedding.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceParity;

impl SpaceParity {
    fn slot_positions(chars: &[char]) -> Vec<usize> {
        (1..chars.len().saturating_sub(1))
            .filter(|&i| {
                matches!(chars[i], ZERO | ONE)
                    && !chars[i - 1].is_whitespace()
                    && !chars[i + 1].is_whitespace()
            })
            .collect()
    }
}

impl Embedding for SpaceParity {
    fn slots(&self, text: &str) -> usize {
        let chars: Vec<char> = text.chars().collect();
        Self::slot_positions(&chars).len()
    }

    fn embed(&self, text: &str, bits: &[bool]) -> String {
        let mut chars: Vec<char> = text.chars().collect();
        let positions = Self::slot_positions(&chars);
        for (slot, &at) in positions.iter().enumerate() {
            let bit = bits.get(slot).copied().unwrap_or(false);
            chars[at] = if bit { ONE } else { ZERO };
        }
        chars.into_iter().collect()
    }

    fn extract(&self, text: &str) -> Vec<bool> {
        let chars: Vec<char> = text.chars().collect();
        Self::slot_positions(&chars)
            .into_iter()
            .map(|at| chars[at] == ONE)
            .collect()
    }
}
