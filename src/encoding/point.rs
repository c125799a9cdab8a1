// Sample points of an encoding run: one category-axis slot holding the
// level every scheme asserts there.

use std::fmt;

use serde::{Serialize, Serializer};

use super::bit::Bit;
use super::level::SignalLevel;

/// Category-axis tag of a sample point. Sentinels mark the run start and
/// the bit boundaries; midpoint tags carry the bit value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Start,
    Boundary,
    Bit(Bit),
}

impl Position {
    /// Short label drawn under the chart column.
    pub fn axis_label(self) -> &'static str {
        match self {
            Position::Start => "init",
            Position::Boundary => "|",
            Position::Bit(Bit::Zero) => "0",
            Position::Bit(Bit::One) => "1",
        }
    }
}

// The chart data uses a mixed-type `time` field: sentinel strings for the
// start and boundary tags, bare numbers for bit midpoints.
impl Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Position::Start => serializer.serialize_str("initial"),
            Position::Boundary => serializer.serialize_str("|"),
            Position::Bit(bit) => serializer.serialize_u8(bit.value()),
        }
    }
}

/// The six line-coding schemes, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    NrzL,
    NrzI,
    BipolarAmi,
    Pseudoternary,
    Manchester,
    DiffManchester,
}

impl Scheme {
    pub const ALL: [Scheme; 6] = [
        Scheme::NrzL,
        Scheme::NrzI,
        Scheme::BipolarAmi,
        Scheme::Pseudoternary,
        Scheme::Manchester,
        Scheme::DiffManchester,
    ];

    /// Stable display identifier, also used as the JSON export key.
    pub fn name(self) -> &'static str {
        match self {
            Scheme::NrzL => "NRZ-L",
            Scheme::NrzI => "NRZ-I",
            Scheme::BipolarAmi => "Bipolar AMI",
            Scheme::Pseudoternary => "Pseudoternary",
            Scheme::Manchester => "Manchester",
            Scheme::DiffManchester => "Differential Manchester",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One time slot of the run: a position tag plus the level every scheme
/// asserts there. Equality is structural over the full record, which is
/// what the boundary-point dedup in the encoder compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SamplePoint {
    #[serde(rename = "time")]
    pub position: Position,
    #[serde(rename = "NRZ-L")]
    pub nrz_l: SignalLevel,
    #[serde(rename = "NRZ-I")]
    pub nrz_i: SignalLevel,
    #[serde(rename = "Bipolar AMI")]
    pub bipolar_ami: SignalLevel,
    #[serde(rename = "Pseudoternary")]
    pub pseudoternary: SignalLevel,
    #[serde(rename = "Manchester")]
    pub manchester: SignalLevel,
    #[serde(rename = "Differential Manchester")]
    pub diff_manchester: SignalLevel,
}

impl SamplePoint {
    /// Point with every scheme at the same level.
    pub fn uniform(position: Position, level: SignalLevel) -> Self {
        Self {
            position,
            nrz_l: level,
            nrz_i: level,
            bipolar_ami: level,
            pseudoternary: level,
            manchester: level,
            diff_manchester: level,
        }
    }

    /// Level this point holds for the given scheme.
    pub fn level(&self, scheme: Scheme) -> SignalLevel {
        match scheme {
            Scheme::NrzL => self.nrz_l,
            Scheme::NrzI => self.nrz_i,
            Scheme::BipolarAmi => self.bipolar_ami,
            Scheme::Pseudoternary => self.pseudoternary,
            Scheme::Manchester => self.manchester,
            Scheme::DiffManchester => self.diff_manchester,
        }
    }
}
