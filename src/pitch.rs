//! Equal-tempered pitch and tempo math.
//!
//! Frequencies are computed from the semitone distance to middle C
//! (C4 = 261.63 Hz): `f = 261.63 * 2^(n/12)`, rounded to one decimal place.
//! Durations come from the beat length in milliseconds: a duration code is
//! the denominator of a whole note, so `(beat * 4) / code`, with a dotted
//! note extended by half its base value.

use std::fmt;

const C4_HZ: f64 = 261.63;
const MIDDLE_OCTAVE: i32 = 4;
const SEMITONES_PER_OCTAVE: i32 = 12;

/// Note letter names A through G.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoteName {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl NoteName {
    /// Parse a lowercase note letter. 'h' is the enharmonic alias for 'b'
    /// used in some RTTTL dialects and normalizes here.
    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(NoteName::A),
            'b' | 'h' => Some(NoteName::B),
            'c' => Some(NoteName::C),
            'd' => Some(NoteName::D),
            'e' => Some(NoteName::E),
            'f' => Some(NoteName::F),
            'g' => Some(NoteName::G),
            _ => None,
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            NoteName::A => 'a',
            NoteName::B => 'b',
            NoteName::C => 'c',
            NoteName::D => 'd',
            NoteName::E => 'e',
            NoteName::F => 'f',
            NoteName::G => 'g',
        };
        write!(f, "{}", letter)
    }
}

/// Semitone distance from middle C (C4) on the equal-tempered chromatic
/// scale. E# and B# are grammar-valid spellings and map to their
/// enharmonic pitches (F, and C of the next octave).
fn semitones_from_c4(name: NoteName, sharp: bool, octave: i32) -> i32 {
    let index = match (name, sharp) {
        (NoteName::C, false) => 0,
        (NoteName::C, true) => 1,
        (NoteName::D, false) => 2,
        (NoteName::D, true) => 3,
        (NoteName::E, false) => 4,
        (NoteName::E, true) => 5,
        (NoteName::F, false) => 5,
        (NoteName::F, true) => 6,
        (NoteName::G, false) => 7,
        (NoteName::G, true) => 8,
        (NoteName::A, false) => 9,
        (NoteName::A, true) => 10,
        (NoteName::B, false) => 11,
        (NoteName::B, true) => 12,
    };
    index + (octave - MIDDLE_OCTAVE) * SEMITONES_PER_OCTAVE
}

/// Frequency in Hz of a note at the given octave, rounded to one decimal
/// place. Any integer octave is mathematically valid.
pub(crate) fn frequency(name: NoteName, sharp: bool, octave: i32) -> f64 {
    let n = semitones_from_c4(name, sharp, octave);
    let hz = C4_HZ * 2f64.powf(n as f64 / SEMITONES_PER_OCTAVE as f64);
    (hz * 10.0).round() / 10.0
}

/// Playback duration in milliseconds for a duration code at the given beat
/// length. `beat_every` is the length of one quarter-note beat; the code is
/// the whole-note denominator (1 = whole, 32 = 32nd). No rounding.
pub(crate) fn note_duration(beat_every: f64, code: f64, dotted: bool) -> f64 {
    let base = (beat_every * 4.0) / code;
    if dotted {
        base * 1.5
    } else {
        base
    }
}
