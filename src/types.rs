//! Parsed tune data type definitions
//!
//! These are the output types of a parse: a [`Tune`] holds the extracted
//! name, the validated/defaulted settings record, and the melody as an
//! ordered list of playable [`NoteEvent`]s. All three serialize to
//! camelCase for consumers that ship the parsed tune over JSON or another
//! serde format.

use serde::Serialize;

/// Default settings from the second RTTTL section.
///
/// Always fully populated: a key missing from the settings section falls
/// back to the hardcoded default (duration 4, octave 6, bpm 63). Octave and
/// BPM values outside the standard ranges are accepted as-is after an
/// advisory warning, so consumers must not assume they are in range.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    /// Duration code applied to notes without their own: denominator of a
    /// whole note (4 = quarter note). One of {1, 2, 4, 8, 16, 32}.
    pub duration: u32,
    /// Octave applied to notes without their own. Standard range 4-7.
    pub octave: u32,
    /// Tempo in beats per minute.
    pub bpm: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            duration: 4,
            octave: 6,
            bpm: 63,
        }
    }
}

/// A single playable note with its computed playback parameters.
///
/// # Fields
/// - `note`: normalized note name with optional sharp marker ("c#", "b"),
///   or "p" for a rest
/// - `duration`: playback duration in milliseconds (may be fractional,
///   e.g. 62.5 for a 32nd note at 120 bpm)
/// - `frequency`: audio frequency in Hz, rounded to one decimal place;
///   exactly 0.0 for rests
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NoteEvent {
    pub note: String,
    pub duration: f64,
    pub frequency: f64,
}

/// A fully parsed ring tone.
///
/// Melody order is playback order. Immutable after construction; the caller
/// owns the value.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tune {
    pub name: String,
    pub defaults: Defaults,
    pub melody: Vec<NoteEvent>,
}
