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

use std::path::PathBuf;

/// Typed error for fatal build failures so callers can distinguish a bad
/// input path from an empty sample set without string matching. Unparseable
/// filenames are not represented here; they are skipped with a warning and
/// never fail the batch.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("samples directory not found: {0}")]
    MissingInputPath(PathBuf),
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("no valid samples found (expected names like C3_033_01.wav)")]
    NoValidSamples,
    #[error("unable to read samples directory: {0}")]
    Io(#[from] std::io::Error),
}
