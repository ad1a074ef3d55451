/// A frequency ratio relative to some reference pitch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ratio(f64);

pub const CENTS_PER_OCTAVE: f64 = 1200.0;

pub const MIDI_NOTE_COUNT: usize = 128;
/// A4.
pub const MIDI_A4: u8 = 69;

impl Ratio {
    #[cfg(test)]
    pub const UNISON: Ratio = Ratio(1.0);

    #[cfg(test)]
    pub const fn new(r: f64) -> Self {
        Ratio(r)
    }
    /// Ratio of a single step of an equal division of the octave.
    pub fn step(divisions: u32) -> Self {
        Ratio(2f64.powf(1.0 / divisions as f64))
    }
    /// Raises this ratio to the n-th power, ie. stacks it n times.
    pub fn pow(&self, n: i32) -> Self {
        Ratio(self.0.powf(n as f64))
    }
    #[cfg(test)]
    pub fn value(&self) -> f64 {
        self.0
    }
    pub fn cents(&self) -> f64 {
        self.0.log2() * CENTS_PER_OCTAVE
    }
}

/// Whole cents, truncated toward zero.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub struct Cents(pub i16);

impl From<Ratio> for Cents {
    fn from(value: Ratio) -> Self {
        // trunc() keeps the toward-zero behaviour explicit, the cast saturates.
        Cents(value.cents().trunc() as i16)
    }
}

/// Cent offset of `note` from `reference` in an equal temperament with
/// `divisions` steps per octave.
pub fn offset(note: usize, reference: u8, divisions: u32) -> Cents {
    let steps = note as i32 - reference as i32;
    Ratio::step(divisions).pow(steps).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octave_is_1200_cents() {
        let octave = Ratio::step(12).pow(12);
        assert!((octave.value() - 2.0).abs() < 1e-12);
        assert_eq!(Cents::from(octave), Cents(1200));
        assert_eq!(Cents::from(Ratio::UNISON), Cents(0));
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 1200 / 19 = 63.157...
        assert_eq!(offset(70, MIDI_A4, 19), Cents(63));
        assert_eq!(offset(68, MIDI_A4, 19), Cents(-63));
        assert_eq!(Cents::from(Ratio::new(2f64.powf(-0.999 / 1200.0))), Cents(0));
    }

    #[test]
    fn test_saturates() {
        assert_eq!(Cents::from(Ratio::new(2f64.powf(40.0))), Cents(i16::MAX));
        assert_eq!(Cents::from(Ratio::new(2f64.powf(-40.0))), Cents(i16::MIN));
    }

    #[test]
    fn test_offset_12tet() {
        assert_eq!(offset(MIDI_A4 as usize, MIDI_A4, 12), Cents(0));
        assert_eq!(offset(0, MIDI_A4, 12), Cents(-6900));
        assert_eq!(offset(127, MIDI_A4, 12), Cents(5800));
        assert_eq!(offset(81, MIDI_A4, 12), Cents(1200));
    }
}
