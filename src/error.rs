//! # Error Types
//!
//! This module defines all fatal error types for the RTTTL parser.
//!
//! Fatal errors abort the current parse call and surface immediately to the
//! caller. Non-fatal diagnostics (over-length tune names, out-of-range
//! octave or BPM values) are not errors; they are reported through the
//! `log` facade and never change the parse result.
//!
//! ## Usage
//! ```rust
//! use rtttl::{parse, RtttlError};
//!
//! match parse("A-Team:d=8,o=5,b=125") {
//!     Ok(tune) => println!("{} notes", tune.melody.len()),
//!     Err(RtttlError::InvalidFile) => eprintln!("not a three-section RTTTL string"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RtttlError {
    /// The input did not split into the three colon-separated sections
    /// (name, default settings, note sequence).
    ///
    /// # Example
    /// ```
    /// # use rtttl::RtttlError;
    /// assert_eq!(RtttlError::InvalidFile.to_string(), "Invalid RTTTL file.");
    /// ```
    #[error("Invalid RTTTL file.")]
    InvalidFile,

    /// A settings token was not a `key=value` pair with an integer value.
    ///
    /// # Example
    /// ```
    /// # use rtttl::RtttlError;
    /// let err = RtttlError::InvalidSetting("d".to_string());
    /// assert_eq!(err.to_string(), "Invalid setting d");
    /// ```
    #[error("Invalid setting {0}")]
    InvalidSetting(String),

    /// A default duration value was outside the allowed set
    /// {1, 2, 4, 8, 16, 32}.
    ///
    /// # Example
    /// ```
    /// # use rtttl::RtttlError;
    /// let err = RtttlError::InvalidDuration("17".to_string());
    /// assert_eq!(err.to_string(), "Invalid duration 17");
    /// ```
    #[error("Invalid duration {0}")]
    InvalidDuration(String),

    /// A note token did not match the note grammar
    /// `[duration]? letter '#'? '.'? [octave]?`.
    #[error("Invalid note {0}")]
    InvalidNote(String),
}
