//! Integration tests for the RTTTL parser
//!
//! Tests the full pipeline from notation string to playable note events.

use rtttl::{parse, parse_defaults, parse_melody, Defaults, RtttlError};

const A_TEAM: &str =
    "A-Team:d=8,o=5,b=125:4d#6,a#,2d#6,16p,g#,4a#,4d#.,p,16g,16a#,d#6,a#,f6,2d#6,16p,c#.6,16c6,16a#,g#.,2a#";

#[test]
fn test_parse_a_team() {
    let tune = parse(A_TEAM).unwrap();

    assert_eq!(tune.name, "A-Team");
    assert_eq!(tune.defaults.duration, 8);
    assert_eq!(tune.defaults.octave, 5);
    assert_eq!(tune.defaults.bpm, 125);

    // one event per comma-separated token, in input order
    assert_eq!(tune.melody.len(), 20);
    assert_eq!(tune.melody[0].note, "d#");
    assert_eq!(tune.melody[1].note, "a#");
    assert_eq!(tune.melody[3].note, "p");
    assert_eq!(tune.melody[19].note, "a#");
}

#[test]
fn test_a_team_timing() {
    let tune = parse(A_TEAM).unwrap();

    // 125 bpm -> 480ms beat
    assert_eq!(tune.melody[0].duration, 480.0); // 4d#6
    assert_eq!(tune.melody[1].duration, 240.0); // a# (default eighth)
    assert_eq!(tune.melody[2].duration, 960.0); // 2d#6
    assert_eq!(tune.melody[3].duration, 120.0); // 16p
    assert_eq!(tune.melody[6].duration, 720.0); // 4d#. (dotted quarter)
    assert_eq!(tune.melody[18].duration, 360.0); // g#. (dotted default eighth)
}

#[test]
fn test_a_team_pitches() {
    let tune = parse(A_TEAM).unwrap();

    assert!((tune.melody[0].frequency - 1244.5).abs() <= 0.1); // d#6
    assert!((tune.melody[1].frequency - 932.3).abs() <= 0.1); // a#5
    assert!((tune.melody[4].frequency - 830.6).abs() <= 0.1); // g#5

    // rests occupy time but are silent
    assert_eq!(tune.melody[3].frequency, 0.0);
    assert_eq!(tune.melody[7].frequency, 0.0);
}

#[test]
fn test_melody_length_matches_token_count() {
    let tune = parse("Test:d=4,o=5,b=100:c,d,e,f,g,a,b,c6").unwrap();
    assert_eq!(tune.melody.len(), 8);
}

#[test]
fn test_empty_name_and_settings_fall_back() {
    let tune = parse("::c").unwrap();
    assert_eq!(tune.name, "Unknown");
    assert_eq!(
        tune.defaults,
        Defaults {
            duration: 4,
            octave: 6,
            bpm: 63,
        }
    );
    assert_eq!(tune.melody.len(), 1);
}

#[test]
fn test_invalid_section_count_fails() {
    for input in ["", "A-Team", "A-Team:d=8,o=5,b=125", "a:b:c:d"] {
        assert_eq!(parse(input).unwrap_err(), RtttlError::InvalidFile);
    }
}

#[test]
fn test_invalid_duration_propagates_through_parse() {
    let err = parse("Test:d=17:c").unwrap_err();
    assert_eq!(err.to_string(), "Invalid duration 17");
}

#[test]
fn test_malformed_note_propagates_through_parse() {
    let err = parse("Test:d=8:c,q,d").unwrap_err();
    assert_eq!(err.to_string(), "Invalid note q");
}

#[test]
fn test_octave_shift_doubles_frequency() {
    let defaults = parse_defaults("o=4,b=125").unwrap();
    let events = parse_melody("a4,a5,a6,a7", &defaults).unwrap();

    assert!((events[0].frequency - 440.0).abs() <= 0.1);
    assert!((events[1].frequency - 880.0).abs() <= 0.1);
    assert!((events[2].frequency - 1760.0).abs() <= 0.1);
    assert!((events[3].frequency - 3520.0).abs() <= 0.1);
}

#[test]
fn test_tune_serializes_to_camel_case_json() {
    let tune = parse("A-Team:d=8,o=5,b=125:4d#6,16p").unwrap();
    let json = serde_json::to_value(&tune).unwrap();

    assert_eq!(json["name"], "A-Team");
    assert_eq!(json["defaults"]["duration"], 8);
    assert_eq!(json["defaults"]["octave"], 5);
    assert_eq!(json["defaults"]["bpm"], 125);
    assert_eq!(json["melody"][0]["note"], "d#");
    assert_eq!(json["melody"][0]["duration"], 480.0);
    assert_eq!(json["melody"][1]["note"], "p");
    assert_eq!(json["melody"][1]["frequency"], 0.0);
}
