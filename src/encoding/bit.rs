use tracing::warn;

/// A single binary digit of the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    /// Numeric value of the bit (0 or 1).
    pub fn value(self) -> u8 {
        match self {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }

    pub fn is_one(self) -> bool {
        matches!(self, Bit::One)
    }
}

/// Strict parse for one-shot CLI input: any character outside {0,1} is an
/// error naming the offender and its position.
pub fn parse_bits(input: &str) -> Result<Vec<Bit>, String> {
    input
        .chars()
        .enumerate()
        .map(|(i, c)| {
            Bit::from_char(c).ok_or_else(|| {
                format!(
                    "invalid character '{}' at position {}: binary input may only contain 0 and 1",
                    c, i
                )
            })
        })
        .collect()
}

/// Lossy filter for interactive input: characters outside {0,1} are
/// dropped, so pasted text with separators still yields a usable run.
pub fn sanitize_bits(input: &str) -> Vec<Bit> {
    let bits: Vec<Bit> = input.chars().filter_map(Bit::from_char).collect();
    let dropped = input.chars().count() - bits.len();
    if dropped > 0 {
        warn!("dropped {} non-binary character(s) from input", dropped);
    }
    bits
}

/// Reassemble the digit string, e.g. for prompts and dumps.
pub fn bits_to_string(bits: &[Bit]) -> String {
    bits.iter()
        .map(|bit| if bit.is_one() { '1' } else { '0' })
        .collect()
}
