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

//! Serializes an instrument to the .sss XML document the sampler loads.
//!
//! The sampler matches incoming (note, velocity) pairs against each
//! sample's inclusive loNote/hiNote and loVel/hiVel attributes; the zones
//! are disjoint by construction, so the first match is the only match.

use crate::instrument::Instrument;

/// Renders the instrument as an instrument.sss XML document.
pub fn render(instrument: &Instrument) -> String {
    let mut lines = vec![
        r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
        r#"<SuperSimpleSampler version="1.0">"#.to_string(),
        "  <meta>".to_string(),
        format!("    <name>{}</name>", escape(instrument.name())),
        format!("    <author>{}</author>", escape(instrument.author())),
        "  </meta>".to_string(),
        String::new(),
        "  <samples>".to_string(),
    ];

    lines.push(format!(
        "    <!-- Generated from {} sample files -->",
        instrument.sample_count()
    ));
    lines.push(format!(
        "    <!-- Notes: {} ({} zones) -->",
        instrument.note_span(),
        instrument.root_notes().len()
    ));
    lines.push(format!(
        "    <!-- Velocity layers: {} ({:?}) -->",
        instrument.velocities().len(),
        instrument.velocities()
    ));
    lines.push(String::new());

    for group in instrument.groups() {
        lines.push(format!(
            "    <!-- {} ({} round robins) -->",
            group.label(),
            group.samples.len()
        ));

        for sample in &group.samples {
            lines.push(format!(
                r#"    <sample file="{}" rootNote="{}" loNote="{}" hiNote="{}" loVel="{}" hiVel="{}"/>"#,
                escape(&sample.source.display().to_string()),
                group.root_note,
                group.note_range.0,
                group.note_range.1,
                group.vel_range.0,
                group.vel_range.1,
            ));
        }

        // Cosmetic separator between zone groups.
        lines.push(String::new());
    }

    lines.push("  </samples>".to_string());
    lines.push("</SuperSimpleSampler>".to_string());

    lines.join("\n")
}

/// Escapes XML attribute and text content.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::samples::ParsedSample;

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
    fn test_render() {
        let instrument = Instrument::new(
            "Test Piano".into(),
            "Tester".into(),
            vec![
                sample(48, 33, 1, "samples/C3_033_01.wav"),
                sample(48, 100, 1, "samples/C3_100_01.wav"),
                sample(60, 33, 1, "samples/C4_033_01.wav"),
                sample(60, 100, 1, "samples/C4_100_01.wav"),
                sample(60, 100, 2, "samples/C4_100_02.wav"),
            ],
        )
        .expect("expected instrument");

        let xml = render(&instrument);

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<SuperSimpleSampler version="1.0">"#));
        assert!(xml.contains("<name>Test Piano</name>"));
        assert!(xml.contains("<author>Tester</author>"));
        assert!(xml.contains("<!-- Generated from 5 sample files -->"));
        assert!(xml.contains("<!-- Notes: C3 - C4 (2 zones) -->"));
        assert!(xml.contains("<!-- Velocity layers: 2 ([33, 100]) -->"));
        assert!(xml.ends_with("</SuperSimpleSampler>"));

        // Velocity boundary at floor((33+100)/2) = 66.
        assert!(xml.contains(
            r#"<sample file="samples/C3_033_01.wav" rootNote="48" loNote="0" hiNote="48" loVel="1" hiVel="66"/>"#
        ));
        assert!(xml.contains(
            r#"<sample file="samples/C4_100_01.wav" rootNote="60" loNote="49" hiNote="127" loVel="67" hiVel="127"/>"#
        ));

        // Round robins stay together under one group comment.
        let group_comment = "<!-- C4 vel100 (2 round robins) -->";
        assert!(xml.contains(group_comment));
        let after = &xml[xml.find(group_comment).unwrap()..];
        let first = after.find("C4_100_01.wav").unwrap();
        let second = after.find("C4_100_02.wav").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_escapes_metadata() {
        let instrument = Instrument::new(
            "Q&A <Piano>".into(),
            r#"A "quoted" name"#.into(),
            vec![sample(60, 100, 1, "samples/C4_100_01.wav")],
        )
        .expect("expected instrument");

        let xml = render(&instrument);
        assert!(xml.contains("<name>Q&amp;A &lt;Piano&gt;</name>"));
        assert!(xml.contains("<author>A &quot;quoted&quot; name</author>"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape(r#"<a & 'b'>"#), "&lt;a &amp; &apos;b&apos;&gt;");
    }
}
