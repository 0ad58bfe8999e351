//! Parser for the RTTTL ring tone notation format.
//!
//! RTTTL describes a ring tone as three colon-separated sections: a name,
//! a list of default settings, and a comma-separated note sequence. The
//! parser turns that text into a [`Tune`] whose melody is a list of
//! [`NoteEvent`]s, each carrying an exact playback duration in
//! milliseconds and a frequency in Hz, ready to drive a tone generator.
//!
//! ```rust
//! use rtttl::parse;
//!
//! let tune = parse("A-Team:d=8,o=5,b=125:4d#6,a#,2d#6,16p,g#")?;
//!
//! assert_eq!(tune.name, "A-Team");
//! assert_eq!(tune.melody.len(), 5);
//! assert_eq!(tune.melody[3].frequency, 0.0); // "16p" is a rest
//! # Ok::<(), rtttl::RtttlError>(())
//! ```
//!
//! Non-fatal diagnostics (over-length names, out-of-range octave or BPM
//! values) are emitted through the `log` facade and never abort a parse.

pub mod defaults;
pub mod error;
pub mod melody;
pub mod parser;
mod pitch;
pub mod types;

pub use defaults::parse_defaults;
pub use error::RtttlError;
pub use melody::parse_melody;
pub use parser::{parse, tune_name};
pub use types::{Defaults, NoteEvent, Tune};
