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

//! Partitions the note and velocity axes into zones.
//!
//! Given the distinct root notes and velocity layers observed in a sample
//! set, every key in 0-127 and every velocity in 1-127 must map to exactly
//! one zone. Note zones end at their own root so samples are only ever
//! pitched down; velocity zones meet at the floor of the midpoint between
//! neighboring layers.

use std::collections::BTreeMap;

use super::parser::ParsedSample;

/// Computes the key range covered by each root note.
///
/// Roots must be ascending, distinct and non-empty. Each zone runs from one
/// above the previous root up to its own root; the lowest zone is extended
/// down to 0 and the highest up to 127.
pub fn partition_notes(roots: &[i32]) -> BTreeMap<i32, (i32, i32)> {
    debug_assert!(roots.windows(2).all(|w| w[0] < w[1]));

    if roots.len() == 1 {
        return BTreeMap::from([(roots[0], (0, 127))]);
    }

    let last = roots.len() - 1;
    let mut zones = BTreeMap::new();
    for (i, &root) in roots.iter().enumerate() {
        let lo = if i == 0 { 0 } else { roots[i - 1] + 1 };
        // The zone ends at its own root: keys above it belong to the next
        // higher sample, pitched down.
        let hi = if i == last { 127 } else { root };
        zones.insert(root, (lo, hi));
    }

    zones
}

/// Computes the velocity range covered by each velocity layer.
///
/// Layers must be ascending, distinct and non-empty. Neighboring zones meet
/// at floor((a + b) / 2); each boundary is computed independently per side,
/// which is the rule the sampler engine expects. The lowest zone is extended
/// down to 1 and the highest up to 127.
pub fn partition_velocities(layers: &[u32]) -> BTreeMap<u32, (u32, u32)> {
    debug_assert!(layers.windows(2).all(|w| w[0] < w[1]));

    if layers.len() == 1 {
        return BTreeMap::from([(layers[0], (1, 127))]);
    }

    let last = layers.len() - 1;
    let mut zones = BTreeMap::new();
    for (i, &layer) in layers.iter().enumerate() {
        let lo = if i == 0 {
            1
        } else {
            (layers[i - 1] + layer) / 2 + 1
        };
        let hi = if i == last {
            127
        } else {
            (layer + layers[i + 1]) / 2
        };
        zones.insert(layer, (lo, hi));
    }

    zones
}

/// Groups samples by their (root note, velocity) pair.
///
/// A flat map with a composite key keeps the natural ordering (root note
/// ascending, then velocity ascending) without nesting maps. Samples within
/// a group are sorted by round robin; the sort is stable, so samples sharing
/// a round robin index keep their scan order.
pub fn group_samples(samples: Vec<ParsedSample>) -> BTreeMap<(i32, u32), Vec<ParsedSample>> {
    let mut groups: BTreeMap<(i32, u32), Vec<ParsedSample>> = BTreeMap::new();
    for sample in samples {
        groups
            .entry((sample.midi_note, sample.velocity))
            .or_default()
            .push(sample);
    }
    for group in groups.values_mut() {
        group.sort_by_key(|sample| sample.round_robin);
    }

    groups
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn sample(midi_note: i32, velocity: u32, round_robin: u32, name: &str) -> ParsedSample {
        ParsedSample {
            note_token: crate::notes::midi_to_note(midi_note),
            midi_note,
            velocity,
            round_robin,
            source: PathBuf::from(name),
        }
    }

    #[test]
    fn test_single_note_spans_keyboard() {
        let zones = partition_notes(&[60]);
        assert_eq!(zones, BTreeMap::from([(60, (0, 127))]));
    }

    #[test]
    fn test_two_notes_pitch_down_only() {
        // The boundary sits directly above the lower root, so the upper
        // sample covers everything between the roots by pitching down.
        let zones = partition_notes(&[48, 60]);
        assert_eq!(zones, BTreeMap::from([(48, (0, 48)), (60, (49, 127))]));
    }

    #[test]
    fn test_many_notes() {
        let zones = partition_notes(&[36, 48, 60, 72]);
        assert_eq!(
            zones,
            BTreeMap::from([
                (36, (0, 36)),
                (48, (37, 48)),
                (60, (49, 60)),
                (72, (61, 127)),
            ])
        );
    }

    #[test]
    fn test_note_partition_covers_axis() {
        let cases: Vec<Vec<i32>> = vec![
            vec![0],
            vec![64],
            vec![0, 127],
            vec![1, 2, 3],
            vec![10, 50, 90, 126],
            (0..128).step_by(7).collect(),
        ];
        for roots in cases {
            let zones = partition_notes(&roots);
            let mut expected = 0;
            for (&root, &(lo, hi)) in &zones {
                assert_eq!(lo, expected, "gap or overlap below root {}", root);
                assert!(lo <= hi, "inverted zone for root {}", root);
                assert!(root >= lo && root <= hi, "root {} outside its zone", root);
                expected = hi + 1;
            }
            assert_eq!(expected, 128, "partition must end at 127");
        }
    }

    #[test]
    fn test_single_velocity_spans_axis() {
        let zones = partition_velocities(&[64]);
        assert_eq!(zones, BTreeMap::from([(64, (1, 127))]));
    }

    #[test]
    fn test_three_velocities_floor_midpoints() {
        // (33+64)/2 = 48, (64+100)/2 = 82.
        let zones = partition_velocities(&[33, 64, 100]);
        assert_eq!(
            zones,
            BTreeMap::from([(33, (1, 48)), (64, (49, 82)), (100, (83, 127))])
        );
    }

    #[test]
    fn test_velocity_boundaries_with_odd_sums() {
        // (10+13)/2 = 11 on both sides of the boundary.
        let zones = partition_velocities(&[10, 13]);
        assert_eq!(zones, BTreeMap::from([(10, (1, 11)), (13, (12, 127))]));
    }

    #[test]
    fn test_velocity_partition_covers_axis() {
        let cases: Vec<Vec<u32>> = vec![
            vec![1],
            vec![127],
            vec![1, 127],
            vec![20, 21, 22],
            vec![33, 64, 100],
            (1..128).step_by(11).collect(),
        ];
        for layers in cases {
            let zones = partition_velocities(&layers);
            let mut expected = 1;
            for (&layer, &(lo, hi)) in &zones {
                assert_eq!(lo, expected, "gap or overlap below layer {}", layer);
                assert!(lo <= hi, "inverted zone for layer {}", layer);
                expected = hi + 1;
            }
            assert_eq!(expected, 128, "partition must end at 127");
        }
    }

    #[test]
    fn test_group_samples_orders_round_robins() {
        let samples = vec![
            sample(60, 100, 2, "C4_100_02.wav"),
            sample(48, 100, 1, "C3_100_01.wav"),
            sample(60, 100, 1, "C4_100_01.wav"),
            sample(60, 64, 1, "C4_064_01.wav"),
        ];

        let groups = group_samples(samples);
        let keys: Vec<(i32, u32)> = groups.keys().copied().collect();
        assert_eq!(keys, vec![(48, 100), (60, 64), (60, 100)]);

        let round_robins: Vec<u32> = groups[&(60, 100)]
            .iter()
            .map(|sample| sample.round_robin)
            .collect();
        assert_eq!(round_robins, vec![1, 2]);
    }

    #[test]
    fn test_group_samples_stable_for_duplicate_round_robins() {
        // Duplicate round robin indices keep their scan order.
        let samples = vec![
            sample(60, 100, 1, "first.wav"),
            sample(60, 100, 1, "second.wav"),
        ];

        let groups = group_samples(samples);
        let sources: Vec<&str> = groups[&(60, 100)]
            .iter()
            .map(|sample| sample.source.to_str().unwrap())
            .collect();
        assert_eq!(sources, vec!["first.wav", "second.wav"]);
    }

    #[test]
    fn test_group_samples_idempotent() {
        let samples = vec![
            sample(60, 100, 2, "C4_100_02.wav"),
            sample(60, 100, 1, "C4_100_01.wav"),
            sample(48, 33, 1, "C3_033_01.wav"),
        ];

        let once = group_samples(samples);
        let again = group_samples(once.values().flatten().cloned().collect());
        assert_eq!(once, again);
    }

    #[test]
    fn test_partitions_tolerate_negative_roots() {
        // Roots below 0 produce a degenerate lowest zone but must not panic;
        // the rest of the axis is still covered.
        let zones = partition_notes(&[-5, 60]);
        assert_eq!(zones, BTreeMap::from([(-5, (0, -5)), (60, (-4, 127))]));
    }
}
