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

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// A YAML representation of instrument metadata, kept next to the samples
/// so repeated builds don't need the flags respelled:
///
/// ```yaml
/// name: Grand Piano
/// author: Someone
/// ```
///
/// Explicit command line flags override values from this file.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct InstrumentMeta {
    /// The instrument name.
    #[serde(default)]
    pub name: Option<String>,

    /// The author name.
    #[serde(default)]
    pub author: Option<String>,
}

/// Parses instrument metadata from a YAML file.
pub fn parse_meta(file: &Path) -> Result<InstrumentMeta, Box<dyn Error>> {
    match serde_yml::from_str(&fs::read_to_string(file)?) {
        Ok(meta) => Ok(meta),
        Err(e) => Err(format!("error parsing file {}: {}", file.display(), e).into()),
    }
}
