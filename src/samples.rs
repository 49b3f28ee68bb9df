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

//! Sample discovery and mapping inference.
//!
//! This module provides:
//! - Filename parsing into note/velocity/round robin metadata
//! - Directory scanning with audio extension filtering
//! - Partitioning of the note and velocity axes into zones

mod error;
mod parser;
mod scan;
mod zones;

pub use error::BuildError;
pub use parser::ParsedSample;
pub use scan::scan_samples;
pub use zones::{group_samples, partition_notes, partition_velocities};
