// Line-coding core: input bit strings, the three-valued signal level, and
// the per-scheme waveform generator.

pub mod bit;
pub mod encoder;
pub mod level;
pub mod point;

pub use bit::{Bit, bits_to_string, parse_bits, sanitize_bits};
pub use encoder::encode;
pub use level::{Polarity, SignalLevel};
pub use point::{Position, SamplePoint, Scheme};
