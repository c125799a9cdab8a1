// Per-bit transition rules, applied before the bit's points are emitted:
//   1-bit: NRZ-I and Bipolar AMI invert their running level
//   0-bit: Pseudoternary and Differential Manchester invert theirs
// NRZ-L and Manchester carry no state; their boundary level is a function
// of the bit alone. Manchester and Differential Manchester additionally
// invert at every mid-bit.

use super::bit::Bit;
use super::level::{Polarity, SignalLevel};
use super::point::{Position, SamplePoint};

/// Running levels of the four stateful schemes, seeded from the initial
/// polarity and updated once per bit.
struct RunningLevels {
    nrz_i: SignalLevel,
    bipolar_ami: SignalLevel,
    pseudoternary: SignalLevel,
    diff_manchester: SignalLevel,
}

impl RunningLevels {
    fn new(initial: SignalLevel) -> Self {
        Self {
            nrz_i: initial,
            bipolar_ami: initial,
            pseudoternary: initial,
            diff_manchester: initial,
        }
    }

    // Intentionally asymmetric: each bit value drives exactly one pair.
    fn transition(&mut self, bit: Bit) {
        match bit {
            Bit::One => {
                self.nrz_i = self.nrz_i.invert();
                self.bipolar_ami = self.bipolar_ami.invert();
            }
            Bit::Zero => {
                self.pseudoternary = self.pseudoternary.invert();
                self.diff_manchester = self.diff_manchester.invert();
            }
        }
    }
}

/// Encode a bit string into the step-plottable sample sequence of all six
/// schemes: a start point, then per bit a boundary point and a midpoint,
/// closed by a final boundary point repeating the last levels.
///
/// Pure function: identical inputs always yield the identical sequence.
pub fn encode(bits: &[Bit], initial: Polarity) -> Vec<SamplePoint> {
    if bits.is_empty() {
        // A single flat-zero point, so an empty input still renders.
        return vec![SamplePoint::uniform(
            Position::Bit(Bit::Zero),
            SignalLevel::Zero,
        )];
    }

    let seed = initial.level();
    let mut state = RunningLevels::new(seed);
    let mut points = Vec::with_capacity(2 * bits.len() + 2);

    points.push(SamplePoint::uniform(Position::Start, seed));

    // Last emitted point: dedup compares against it, the closing point
    // repeats it.
    let mut tail = points[0];

    for (i, &bit) in bits.iter().enumerate() {
        state.transition(bit);

        let boundary = SamplePoint {
            position: Position::Boundary,
            nrz_l: if bit.is_one() {
                SignalLevel::High
            } else {
                SignalLevel::Low
            },
            nrz_i: state.nrz_i,
            bipolar_ami: if bit.is_one() {
                state.bipolar_ami
            } else {
                SignalLevel::Zero
            },
            pseudoternary: if bit.is_one() {
                SignalLevel::Zero
            } else {
                state.pseudoternary
            },
            // Boundary convention is the inverse of NRZ-L; the mid-bit
            // inversion below restores the bit's own level.
            manchester: if bit.is_one() {
                SignalLevel::Low
            } else {
                SignalLevel::High
            },
            diff_manchester: state.diff_manchester,
        };

        // Skip a boundary snapshot identical to the previously emitted
        // point, position tag included. Structural equality only.
        if i == 0 || boundary != tail {
            points.push(boundary);
        }

        state.diff_manchester = state.diff_manchester.invert();
        let midpoint = SamplePoint {
            position: Position::Bit(bit),
            manchester: boundary.manchester.invert(),
            diff_manchester: state.diff_manchester,
            ..boundary
        };
        points.push(midpoint);
        tail = midpoint;
    }

    points.push(SamplePoint {
        position: Position::Boundary,
        ..tail
    });

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::bit::parse_bits;
    use crate::encoding::level::SignalLevel::{High as H, Low as L, Zero as Z};
    use crate::encoding::point::Scheme;

    fn bits(input: &str) -> Vec<Bit> {
        parse_bits(input).expect("test input is valid binary")
    }

    fn pt(position: Position, levels: [SignalLevel; 6]) -> SamplePoint {
        SamplePoint {
            position,
            nrz_l: levels[0],
            nrz_i: levels[1],
            bipolar_ami: levels[2],
            pseudoternary: levels[3],
            manchester: levels[4],
            diff_manchester: levels[5],
        }
    }

    /// Boundary points of the bit intervals, i.e. without the closing point.
    fn interval_boundaries(points: &[SamplePoint]) -> Vec<SamplePoint> {
        let mut found: Vec<SamplePoint> = points
            .iter()
            .filter(|p| p.position == Position::Boundary)
            .copied()
            .collect();
        found.pop();
        found
    }

    #[test]
    fn test_empty_input_flatline() {
        for initial in [Polarity::High, Polarity::Low] {
            let points = encode(&[], initial);
            assert_eq!(points.len(), 1);
            assert_eq!(points[0].position, Position::Bit(Bit::Zero));
            for scheme in Scheme::ALL {
                assert_eq!(points[0].level(scheme), Z);
            }
        }
    }

    #[test]
    fn test_start_point_seeds_every_scheme() {
        let points = encode(&bits("10110"), Polarity::High);
        assert_eq!(points[0], pt(Position::Start, [H, H, H, H, H, H]));

        let points = encode(&bits("10110"), Polarity::Low);
        assert_eq!(points[0], pt(Position::Start, [L, L, L, L, L, L]));
    }

    #[test]
    fn test_closing_point_repeats_final_levels() {
        for input in ["1", "0", "10110", "111", "000"] {
            let points = encode(&bits(input), Polarity::High);
            let last = points[points.len() - 1];
            let prev = points[points.len() - 2];
            assert_eq!(last.position, Position::Boundary);
            for scheme in Scheme::ALL {
                assert_eq!(last.level(scheme), prev.level(scheme));
            }
        }
    }

    #[test]
    fn test_nrz_l_boundary_levels_follow_bits() {
        let points = encode(&bits("10110"), Polarity::High);
        let levels: Vec<SignalLevel> = interval_boundaries(&points)
            .iter()
            .map(|p| p.nrz_l)
            .collect();
        assert_eq!(levels, vec![H, L, H, H, L]);
    }

    #[test]
    fn test_manchester_self_clocking() {
        // Every midpoint inverts the boundary level of its own interval,
        // so each bit carries a transition.
        for input in ["10110", "0000", "1111", "0101101"] {
            let points = encode(&bits(input), Polarity::Low);
            for i in 1..points.len() {
                if let Position::Bit(_) = points[i].position {
                    assert_eq!(points[i].manchester, points[i - 1].manchester.invert());
                }
            }
        }
    }

    #[test]
    fn test_diff_manchester_transitions() {
        // Mid-bit: always inverts relative to the preceding point.
        // Boundary: inverts exactly when the bit is 0.
        for input in ["10110", "0000", "1111", "1001101"] {
            let points = encode(&bits(input), Polarity::High);
            for i in 1..points.len() - 1 {
                match points[i].position {
                    Position::Bit(_) => {
                        assert_eq!(
                            points[i].diff_manchester,
                            points[i - 1].diff_manchester.invert()
                        );
                    }
                    Position::Boundary => {
                        let bit = match points[i + 1].position {
                            Position::Bit(bit) => bit,
                            other => panic!("boundary not followed by midpoint: {:?}", other),
                        };
                        let changed =
                            points[i].diff_manchester != points[i - 1].diff_manchester;
                        assert_eq!(changed, !bit.is_one());
                    }
                    Position::Start => unreachable!("start point after index 0"),
                }
            }
        }
    }

    #[test]
    fn test_nrz_i_inverts_only_on_ones() {
        let input = bits("1001101");
        let points = encode(&input, Polarity::High);
        let midpoints: Vec<SamplePoint> = points
            .iter()
            .filter(|p| matches!(p.position, Position::Bit(_)))
            .copied()
            .collect();
        assert_eq!(midpoints.len(), input.len());

        let mut expected = Polarity::High.level();
        for (bit, midpoint) in input.iter().zip(&midpoints) {
            if bit.is_one() {
                expected = expected.invert();
            }
            assert_eq!(midpoint.nrz_i, expected);
        }
    }

    #[test]
    fn test_ami_alternates_marks_and_zeroes_spaces() {
        let input = bits("1011011");
        let points = encode(&input, Polarity::High);
        let boundaries = interval_boundaries(&points);
        assert_eq!(boundaries.len(), input.len());

        let mut mark = Polarity::High.level();
        for (bit, boundary) in input.iter().zip(&boundaries) {
            if bit.is_one() {
                mark = mark.invert();
                assert_eq!(boundary.bipolar_ami, mark);
            } else {
                assert_eq!(boundary.bipolar_ami, Z);
            }
        }
    }

    #[test]
    fn test_pseudoternary_mirrors_ami() {
        let input = bits("0100100");
        let points = encode(&input, Polarity::Low);
        let boundaries = interval_boundaries(&points);

        let mut space = Polarity::Low.level();
        for (bit, boundary) in input.iter().zip(&boundaries) {
            if bit.is_one() {
                assert_eq!(boundary.pseudoternary, Z);
            } else {
                space = space.invert();
                assert_eq!(boundary.pseudoternary, space);
            }
        }
    }

    #[test]
    fn test_concrete_case_10110() {
        let expected = vec![
            pt(Position::Start, [H, H, H, H, H, H]),
            pt(Position::Boundary, [H, L, L, Z, L, H]),
            pt(Position::Bit(Bit::One), [H, L, L, Z, H, L]),
            pt(Position::Boundary, [L, L, Z, L, H, H]),
            pt(Position::Bit(Bit::Zero), [L, L, Z, L, L, L]),
            pt(Position::Boundary, [H, H, H, Z, L, L]),
            pt(Position::Bit(Bit::One), [H, H, H, Z, H, H]),
            pt(Position::Boundary, [H, L, L, Z, L, H]),
            pt(Position::Bit(Bit::One), [H, L, L, Z, H, L]),
            pt(Position::Boundary, [L, L, Z, H, H, H]),
            pt(Position::Bit(Bit::Zero), [L, L, Z, H, L, L]),
            pt(Position::Boundary, [L, L, Z, H, L, L]),
        ];
        assert_eq!(encode(&bits("10110"), Polarity::High), expected);
    }

    #[test]
    fn test_deterministic_and_length_bounded() {
        for input in ["0", "1", "01", "10", "10110", "0000000", "1111111"] {
            for initial in [Polarity::High, Polarity::Low] {
                let parsed = bits(input);
                let points = encode(&parsed, initial);
                assert_eq!(points, encode(&parsed, initial));

                let n = parsed.len();
                assert!(points.len() >= n + 1, "too few points for {:?}", input);
                assert!(points.len() <= 2 * n + 2, "too many points for {:?}", input);
            }
        }
    }

    #[test]
    fn test_zero_restricted_to_ternary_schemes() {
        // Outside the empty-input case, only Bipolar AMI and Pseudoternary
        // ever rest at zero.
        for input in ["10110", "0011", "1100", "1", "0"] {
            for initial in [Polarity::High, Polarity::Low] {
                for point in encode(&bits(input), initial) {
                    assert_ne!(point.nrz_l, Z);
                    assert_ne!(point.nrz_i, Z);
                    assert_ne!(point.manchester, Z);
                    assert_ne!(point.diff_manchester, Z);
                }
            }
        }
    }
}
