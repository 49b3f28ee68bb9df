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

//! Assembles parsed samples into an instrument.
//!
//! Groups the samples by (root note, velocity), partitions both axes into
//! zones and pairs each group with its note and velocity ranges. The result
//! is an ordered, immutable description ready for serialization.

use std::fmt;

use crate::notes;
use crate::samples::{
    group_samples, partition_notes, partition_velocities, BuildError, ParsedSample,
};

/// All samples sharing a (root note, velocity) pair, with the key and
/// velocity ranges that select them. Samples are ordered by round robin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneGroup {
    /// The MIDI note the samples were recorded at.
    pub root_note: i32,
    /// The velocity layer the samples belong to.
    pub velocity: u32,
    /// Inclusive key range selecting this group.
    pub note_range: (i32, i32),
    /// Inclusive velocity range selecting this group.
    pub vel_range: (u32, u32),
    /// The round robin samples, ascending by round robin index.
    pub samples: Vec<ParsedSample>,
}

impl ZoneGroup {
    /// A display label for this group, e.g. "C3 vel33".
    pub fn label(&self) -> String {
        format!("{} vel{}", notes::midi_to_note(self.root_note), self.velocity)
    }
}

/// A complete instrument mapping: metadata plus zone groups ordered by root
/// note, then velocity. Built once from the full sample set and immutable
/// afterwards.
#[derive(Debug, Clone)]
pub struct Instrument {
    name: String,
    author: String,
    groups: Vec<ZoneGroup>,
    /// Distinct root notes, ascending.
    root_notes: Vec<i32>,
    /// Distinct velocity layers, ascending.
    velocities: Vec<u32>,
    sample_count: usize,
}

impl Instrument {
    /// Builds an instrument from parsed samples.
    ///
    /// Every key in 0-127 and velocity in 1-127 is covered by exactly one
    /// zone per axis. An empty sample set is fatal; no instrument is
    /// produced from nothing.
    pub fn new(name: String, author: String, samples: Vec<ParsedSample>) -> Result<Self, BuildError> {
        if samples.is_empty() {
            return Err(BuildError::NoValidSamples);
        }
        let sample_count = samples.len();

        let grouped = group_samples(samples);

        let mut root_notes: Vec<i32> = grouped.keys().map(|&(root, _)| root).collect();
        root_notes.dedup();
        let mut velocities: Vec<u32> = grouped.keys().map(|&(_, velocity)| velocity).collect();
        velocities.sort_unstable();
        velocities.dedup();

        let note_zones = partition_notes(&root_notes);
        let vel_zones = partition_velocities(&velocities);

        let groups = grouped
            .into_iter()
            .map(|((root_note, velocity), samples)| ZoneGroup {
                root_note,
                velocity,
                note_range: note_zones[&root_note],
                vel_range: vel_zones[&velocity],
                samples,
            })
            .collect();

        Ok(Instrument {
            name,
            author,
            groups,
            root_notes,
            velocities,
            sample_count,
        })
    }

    /// The instrument name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The zone groups, ordered by root note ascending, then velocity.
    pub fn groups(&self) -> &[ZoneGroup] {
        &self.groups
    }

    /// The distinct root notes, ascending.
    pub fn root_notes(&self) -> &[i32] {
        &self.root_notes
    }

    /// The distinct velocity layers, ascending.
    pub fn velocities(&self) -> &[u32] {
        &self.velocities
    }

    /// The total number of samples across all groups.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// The note span as a display string, e.g. "C2 - C4".
    pub fn note_span(&self) -> String {
        format!(
            "{} - {}",
            notes::midi_to_note(self.root_notes[0]),
            notes::midi_to_note(self.root_notes[self.root_notes.len() - 1])
        )
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}\n  Notes: {} ({} zones)\n  Velocity layers: {:?}\n  Total samples: {}",
            self.name,
            self.note_span(),
            self.root_notes.len(),
            self.velocities,
            self.sample_count
        )
    }
}
