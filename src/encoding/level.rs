use serde::{Serialize, Serializer};

/// One of the three voltage levels a line code can assert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalLevel {
    High,
    Zero,
    Low,
}

impl SignalLevel {
    /// Invert the level: high and low swap, zero stays zero.
    pub fn invert(self) -> Self {
        match self {
            SignalLevel::High => SignalLevel::Low,
            SignalLevel::Low => SignalLevel::High,
            SignalLevel::Zero => SignalLevel::Zero,
        }
    }

    /// Chart value of the level (+1, 0 or -1).
    pub fn as_i8(self) -> i8 {
        match self {
            SignalLevel::High => 1,
            SignalLevel::Zero => 0,
            SignalLevel::Low => -1,
        }
    }
}

// The chart data carries levels as bare integers.
impl Serialize for SignalLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i8(self.as_i8())
    }
}

/// Initial signal chosen by the user: the non-zero level every running
/// state is seeded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    High,
    Low,
}

impl Polarity {
    pub fn level(self) -> SignalLevel {
        match self {
            Polarity::High => SignalLevel::High,
            Polarity::Low => SignalLevel::Low,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Polarity::High => Polarity::Low,
            Polarity::Low => Polarity::High,
        }
    }

    /// Parse a CLI or prompt value. Accepts the level names and the
    /// signed chart values.
    pub fn from_arg(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" | "1" | "+1" => Some(Polarity::High),
            "low" | "-1" => Some(Polarity::Low),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Polarity::High => "+1",
            Polarity::Low => "-1",
        }
    }
}
