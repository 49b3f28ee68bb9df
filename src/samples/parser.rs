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

use std::path::{Path, PathBuf};

use pest::Parser;
use pest_derive::Parser;

use crate::notes;

#[derive(Parser)]
#[grammar = "src/samples/filename.pest"]
struct FilenameParser;

/// A sample whose filename fully matched the naming convention.
///
/// All fields come straight from the filename; there are no defaulted or
/// partially parsed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSample {
    /// The note token as written in the filename (e.g. "C#3"), kept for
    /// diagnostics.
    pub note_token: String,
    /// The MIDI root note. May fall outside 0-127 for extreme octaves.
    pub midi_note: i32,
    /// The velocity layer as authored in the filename.
    pub velocity: u32,
    /// The round robin index within a (note, velocity) group.
    pub round_robin: u32,
    /// The path to the sample file, relative to the instrument folder.
    pub source: PathBuf,
}

impl ParsedSample {
    /// Parses a sample filename of the form {Note}_{Velocity}_{RR}[_{FreeText}].ext,
    /// recording the given source path on the result.
    ///
    /// The extension is stripped before matching and an optional free text
    /// suffix after the round robin is ignored. Returns None for any filename
    /// that doesn't fully match.
    pub fn from_filename(filename: &str, source: PathBuf) -> Option<ParsedSample> {
        let stem = Path::new(filename).file_stem()?.to_str()?;

        let mut note_token = None;
        let mut velocity = None;
        let mut round_robin = None;
        let parsed = FilenameParser::parse(Rule::filename, stem).ok()?;
        for pair in parsed.into_iter().next()?.into_inner() {
            match pair.as_rule() {
                Rule::note => note_token = Some(pair.as_str().to_string()),
                Rule::velocity => velocity = pair.as_str().parse::<u32>().ok(),
                Rule::round_robin => round_robin = pair.as_str().parse::<u32>().ok(),
                _ => {}
            }
        }

        let note_token = note_token?;
        let midi_note = notes::note_to_midi(&note_token)?;
        Some(ParsedSample {
            note_token,
            midi_note,
            velocity: velocity?,
            round_robin: round_robin?,
            source,
        })
    }
}
