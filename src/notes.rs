// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

//! Conversion between note names (like C#2, Db3, A4) and MIDI note numbers.
//!
//! Uses the convention where middle C (C4) is MIDI note 60, so octave -1
//! starts at MIDI note 0.

/// Pitch class names indexed by semitone within the octave. Sharps only;
/// flats are normalized to their enharmonic sharp when rendering.
const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Returns the semitone offset of a note letter within the octave.
fn pitch_class(letter: char) -> Option<i32> {
    match letter.to_ascii_uppercase() {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}

/// Converts a note name to a MIDI note number.
///
/// The note letter and accidental are case-insensitive, and the octave may
/// be negative (octaves below -1 produce negative MIDI numbers). Returns
/// None if the token isn't a note name.
pub fn note_to_midi(token: &str) -> Option<i32> {
    let mut chars = token.chars();
    let mut semitone = pitch_class(chars.next()?)?;

    let rest = chars.as_str();
    let octave_str = match rest.chars().next() {
        Some('#') => {
            semitone += 1;
            &rest[1..]
        }
        Some('b') | Some('B') => {
            semitone -= 1;
            &rest[1..]
        }
        _ => rest,
    };

    let octave: i32 = octave_str.parse().ok()?;
    Some((octave + 1) * 12 + semitone)
}

/// Converts a MIDI note number to a note name.
///
/// Negative MIDI numbers are handled with Euclidean division so the pitch
/// class index stays in 0..12 (e.g. -1 renders as B-2).
pub fn midi_to_note(midi_note: i32) -> String {
    let name = NOTE_NAMES[midi_note.rem_euclid(12) as usize];
    let octave = midi_note.div_euclid(12) - 1;
    format!("{}{}", name, octave)
}
