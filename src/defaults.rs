//! Default settings section parsing.
//!
//! The second RTTTL section is a comma-separated list of `key=value`
//! tokens with keys `d` (duration), `o` (octave), and `b` (tempo). The
//! section folds left-to-right into a [`Defaults`] record, so a repeated
//! key overwrites the earlier value and unknown keys contribute nothing.
//! Keys that never appear keep the hardcoded defaults (d=4, o=6, b=63).
//!
//! A duration outside the allowed set is a hard error. Out-of-range octave
//! and BPM values only produce an advisory warning and are used unchanged.

use crate::error::RtttlError;
use crate::types::Defaults;
use log::warn;

const ALLOWED_DURATIONS: [&str; 6] = ["1", "2", "4", "8", "16", "32"];
const ALLOWED_OCTAVES: [&str; 4] = ["4", "5", "6", "7"];

/// The standard ringtone tempo values. Other integer values are accepted
/// with a warning.
const ALLOWED_BPMS: [&str; 32] = [
    "25", "28", "31", "35", "40", "45", "50", "56", "63", "70", "80", "90", "100", "112", "125",
    "140", "160", "180", "200", "225", "250", "285", "320", "355", "400", "450", "500", "565",
    "635", "715", "800", "900",
];

/// Parse the settings section into a fully populated [`Defaults`] record.
pub fn parse_defaults(settings: &str) -> Result<Defaults, RtttlError> {
    let mut defaults = Defaults::default();

    for token in settings.split(',') {
        if token.is_empty() {
            continue;
        }

        let parts: Vec<&str> = token.split('=').collect();
        if parts.len() != 2 {
            return Err(RtttlError::InvalidSetting(token.to_string()));
        }
        let (key, value) = (parts[0], parts[1]);

        match key {
            "d" => {
                if !ALLOWED_DURATIONS.contains(&value) {
                    return Err(RtttlError::InvalidDuration(value.to_string()));
                }
                defaults.duration = integer_value(token, value)?;
            }
            "o" => {
                if !ALLOWED_OCTAVES.contains(&value) {
                    warn!("Invalid octave {}", value);
                }
                defaults.octave = integer_value(token, value)?;
            }
            "b" => {
                if !ALLOWED_BPMS.contains(&value) {
                    warn!("Invalid BPM {}", value);
                }
                defaults.bpm = integer_value(token, value)?;
            }
            // unrecognized keys are silently ignored
            _ => {}
        }
    }

    Ok(defaults)
}

fn integer_value(token: &str, value: &str) -> Result<u32, RtttlError> {
    value
        .parse()
        .map_err(|_| RtttlError::InvalidSetting(token.to_string()))
}
