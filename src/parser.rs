//! Top-level RTTTL parsing.
//!
//! An RTTTL string has three colon-separated sections: the tune name, the
//! default settings, and the note sequence. This module splits the input
//! and composes the section parsers into a [`Tune`].

use crate::defaults::parse_defaults;
use crate::error::RtttlError;
use crate::melody::parse_melody;
use crate::types::Tune;
use log::warn;

const REQUIRED_SECTIONS: usize = 3;
const MAX_NAME_LENGTH: usize = 10;

/// Parse a complete RTTTL string.
///
/// # Example
/// ```rust
/// use rtttl::parse;
///
/// let tune = parse("A-Team:d=8,o=5,b=125:4d#6,a#,2d#6,16p,g#")?;
/// assert_eq!(tune.name, "A-Team");
/// assert_eq!(tune.melody.len(), 5);
/// # Ok::<(), rtttl::RtttlError>(())
/// ```
///
/// # Errors
/// Returns [`RtttlError::InvalidFile`] when the input does not have exactly
/// three sections, and propagates any settings or note error.
pub fn parse(input: &str) -> Result<Tune, RtttlError> {
    let sections: Vec<&str> = input.split(':').collect();
    if sections.len() != REQUIRED_SECTIONS {
        return Err(RtttlError::InvalidFile);
    }

    let name = tune_name(sections[0]);
    let defaults = parse_defaults(sections[1])?;
    let melody = parse_melody(sections[2], &defaults)?;

    Ok(Tune {
        name,
        defaults,
        melody,
    })
}

/// Extract the tune name from the first section.
///
/// A blank name becomes the literal "Unknown". Names over 10 characters
/// draw an advisory warning but are returned unmodified; the format's
/// length limit is a convention, not a hard rule.
pub fn tune_name(name: &str) -> String {
    if name.trim().is_empty() {
        return "Unknown".to_string();
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        warn!("Tune name should not exceed 10 characters.");
    }

    name.to_string()
}
