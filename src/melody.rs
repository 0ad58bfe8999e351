//! Note sequence parsing.
//!
//! The third RTTTL section is a comma-separated list of note tokens. Each
//! token follows the grammar
//!
//! ```text
//! [duration-code]? (letter | 'h' | 'p') '#'? '.'? [octave-digit]?
//! ```
//!
//! with duration-code in {1, 2, 4, 8, 16, 32, 64}, letter in a-g, and
//! octave-digit in {4, 5, 6, 7}. Fields a token omits come from the
//! [`Defaults`] record. Decoding is a single left-to-right pass; a token
//! that does not match the grammar fails the whole parse.

use crate::error::RtttlError;
use crate::pitch::{self, NoteName};
use crate::types::{Defaults, NoteEvent};

const DURATION_CODES: [u32; 7] = [1, 2, 4, 8, 16, 32, 64];

const MS_PER_MINUTE: f64 = 60_000.0;

/// The pitch content of a note token: a tone or a rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pitch {
    Tone { name: NoteName, sharp: bool },
    Rest,
}

impl Pitch {
    /// Normalized note name: "c", "c#", or "p" for a rest.
    fn name(&self) -> String {
        match self {
            Pitch::Tone { name, sharp: false } => name.to_string(),
            Pitch::Tone { name, sharp: true } => format!("{}#", name),
            Pitch::Rest => "p".to_string(),
        }
    }
}

/// Decoded form of a single note token, before any tempo or pitch math.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NoteToken {
    pub duration: Option<u32>,
    pub pitch: Pitch,
    pub dotted: bool,
    pub octave: Option<u32>,
}

impl NoteToken {
    /// Decode one token. Surrounding ASCII whitespace is tolerated;
    /// everything else must match the grammar exactly.
    pub(crate) fn parse(token: &str) -> Result<Self, RtttlError> {
        let malformed = || RtttlError::InvalidNote(token.to_string());
        let mut chars = token.trim().chars().peekable();

        // Optional duration code: leading digits, validated as a set member
        let mut digits = String::new();
        while let Some(c) = chars.peek().filter(|c| c.is_ascii_digit()) {
            digits.push(*c);
            chars.next();
        }
        let duration = if digits.is_empty() {
            None
        } else {
            let code = digits.parse().map_err(|_| malformed())?;
            if !DURATION_CODES.contains(&code) {
                return Err(malformed());
            }
            Some(code)
        };

        // Mandatory note letter; 'h' normalizes to 'b' inside from_char
        let letter = chars.next().ok_or_else(malformed)?;
        let is_rest = letter == 'p';
        let name = if is_rest {
            None
        } else {
            Some(NoteName::from_char(letter).ok_or_else(malformed)?)
        };

        // The grammar permits '#' after a rest too; a rest has no sharp
        // semantics, so the marker is consumed and dropped
        let mut sharp = false;
        if chars.peek() == Some(&'#') {
            sharp = true;
            chars.next();
        }

        let mut dotted = false;
        if chars.peek() == Some(&'.') {
            dotted = true;
            chars.next();
        }

        let octave = match chars.next() {
            None => None,
            Some(c @ '4'..='7') => Some(c as u32 - '0' as u32),
            Some(_) => return Err(malformed()),
        };

        if chars.next().is_some() {
            return Err(malformed());
        }

        let pitch = match name {
            Some(name) => Pitch::Tone { name, sharp },
            None => Pitch::Rest,
        };

        Ok(NoteToken {
            duration,
            pitch,
            dotted,
            octave,
        })
    }
}

/// Parse the note sequence section into playable note events, one per
/// comma-separated token, in input order.
pub fn parse_melody(notes: &str, defaults: &Defaults) -> Result<Vec<NoteEvent>, RtttlError> {
    let beat_every = MS_PER_MINUTE / defaults.bpm as f64;

    notes
        .split(',')
        .map(|token| note_event(token, beat_every, defaults))
        .collect()
}

fn note_event(token: &str, beat_every: f64, defaults: &Defaults) -> Result<NoteEvent, RtttlError> {
    let decoded = NoteToken::parse(token)?;

    let code = decoded.duration.unwrap_or(defaults.duration) as f64;
    let octave = decoded.octave.unwrap_or(defaults.octave) as i32;

    let frequency = match decoded.pitch {
        Pitch::Rest => 0.0,
        Pitch::Tone { name, sharp } => pitch::frequency(name, sharp, octave),
    };

    Ok(NoteEvent {
        note: decoded.pitch.name(),
        duration: pitch::note_duration(beat_every, code, decoded.dotted),
        frequency,
    })
}
