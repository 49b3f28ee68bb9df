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

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::BuildError;
use super::parser::ParsedSample;

/// The audio file extensions considered for an instrument.
const AUDIO_EXTENSIONS: &[&str] = &["wav", "aiff", "aif", "flac", "mp3", "ogg"];

/// Scans a samples directory and parses every audio file name in it.
///
/// Files whose names don't match the naming convention are skipped with a
/// warning; an unparseable filename never fails the batch. The source path
/// recorded on each sample is relative to the instrument folder, i.e. the
/// parent of the samples directory.
pub fn scan_samples(samples_dir: &Path) -> Result<Vec<ParsedSample>, BuildError> {
    if !samples_dir.exists() {
        return Err(BuildError::MissingInputPath(samples_dir.to_path_buf()));
    }
    if !samples_dir.is_dir() {
        return Err(BuildError::NotADirectory(samples_dir.to_path_buf()));
    }

    // read_dir ordering is platform-dependent; sort by name so the scan
    // order (and therefore the output) is deterministic.
    let mut paths: Vec<PathBuf> = fs::read_dir(samples_dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .collect();
    paths.sort();

    let folder: PathBuf = samples_dir.file_name().map(PathBuf::from).unwrap_or_default();

    let mut samples = Vec::new();
    for path in paths {
        if !path.is_file() || !is_audio_file(&path) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };

        match ParsedSample::from_filename(name, folder.join(name)) {
            Some(sample) => {
                debug!(
                    file = name,
                    note = %sample.note_token,
                    midi_note = sample.midi_note,
                    velocity = sample.velocity,
                    round_robin = sample.round_robin,
                    "Parsed sample"
                );
                samples.push(sample);
            }
            None => warn!(file = name, "Could not parse sample filename, skipping"),
        }
    }

    Ok(samples)
}

/// Whether the path has one of the recognized audio extensions.
fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            AUDIO_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str())
        })
}
