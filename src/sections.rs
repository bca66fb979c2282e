use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::schedule::BlockList;

// classes.json nests meeting times as a JSON-encoded string inside each
// section record, so decoding happens in two steps.
#[derive(Debug, Deserialize)]
struct RawSection {
    code: String,
    crn: String,
    title: String,
    #[serde(rename = "no", default)]
    section_no: String,
    #[serde(default)]
    is_open: i64,
    #[serde(default)]
    meeting_times: String,
}

#[derive(Debug, Deserialize)]
struct RawMeeting {
    meet_day: String,
    start_time: String,
    end_time: String,
}

/// One weekly meeting of a section. Day 0 is Monday; times are the source's
/// "1100"-style strings, kept verbatim for the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingTime {
    pub day: u8,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone)]
pub struct SectionRecord {
    pub code: String,
    pub crn: String,
    pub title: String,
    pub section_no: String,
    pub is_open: bool,
    pub meeting_times: Vec<MeetingTime>,
}

/// Scheduled class sections keyed by course code.
#[derive(Debug, Clone, Default)]
pub struct SectionIndex {
    by_code: HashMap<String, Vec<SectionRecord>>,
    count: usize,
}

fn parse_meeting_times(raw: &str) -> Vec<MeetingTime> {
    let Ok(meetings) = serde_json::from_str::<Vec<RawMeeting>>(raw) else {
        return Vec::new();
    };
    meetings
        .into_iter()
        .filter_map(|m| {
            let day: u8 = m.meet_day.trim().parse().ok()?;
            if day > 6 {
                return None;
            }
            Some(MeetingTime {
                day,
                start: m.start_time,
                end: m.end_time,
            })
        })
        .collect()
}

impl SectionIndex {
    /// Loads the scraped classes.json: a list of per-course lists of section
    /// records. Malformed meeting times drop the meeting, not the load.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read sections file {}", path.display()))?;
        let groups: Vec<Vec<RawSection>> = serde_json::from_str(&raw)
            .with_context(|| format!("parse sections file {}", path.display()))?;

        let mut index = Self::default();
        for group in groups {
            for raw in group {
                let record = SectionRecord {
                    meeting_times: parse_meeting_times(&raw.meeting_times),
                    code: raw.code.clone(),
                    crn: raw.crn,
                    title: raw.title,
                    section_no: raw.section_no,
                    is_open: raw.is_open != 0,
                };
                index
                    .by_code
                    .entry(raw.code.trim().to_ascii_uppercase())
                    .or_default()
                    .push(record);
                index.count += 1;
            }
        }
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn get(&self, code: &str) -> &[SectionRecord] {
        self.by_code
            .get(&code.trim().to_ascii_uppercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// A block placed into one weekday column of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub block_id: String,
    pub start: String,
    pub end: String,
}

/// Places each block into the weekday buckets named by its course's meeting
/// times. A block's label is matched against section codes; the first section
/// for a code wins, and blocks with no matching section are skipped. Buckets
/// keep block order. Overlaps are left to the viewer.
pub fn week_grid(blocks: &BlockList, index: &SectionIndex) -> [Vec<Placement>; 7] {
    let mut days: [Vec<Placement>; 7] = Default::default();
    for block in blocks.iter() {
        let Some(section) = index.get(&block.label).first() else {
            continue;
        };
        for mt in &section.meeting_times {
            if let Some(bucket) = days.get_mut(mt.day as usize) {
                bucket.push(Placement {
                    block_id: block.id.clone(),
                    start: mt.start.clone(),
                    end: mt.end.clone(),
                });
            }
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Block;

    fn section(code: &str, meetings: &[(u8, &str, &str)]) -> SectionRecord {
        SectionRecord {
            code: code.to_string(),
            crn: "12345".to_string(),
            title: String::new(),
            section_no: "001".to_string(),
            is_open: true,
            meeting_times: meetings
                .iter()
                .map(|(day, start, end)| MeetingTime {
                    day: *day,
                    start: start.to_string(),
                    end: end.to_string(),
                })
                .collect(),
        }
    }

    fn index_of(sections: Vec<SectionRecord>) -> SectionIndex {
        let mut index = SectionIndex::default();
        for s in sections {
            index.count += 1;
            index
                .by_code
                .entry(s.code.trim().to_ascii_uppercase())
                .or_default()
                .push(s);
        }
        index
    }

    #[test]
    fn parse_meeting_times_drops_malformed_entries() {
        let raw = r#"[
            {"meet_day": "0", "start_time": "1100", "end_time": "1215"},
            {"meet_day": "x", "start_time": "1100", "end_time": "1215"},
            {"meet_day": "9", "start_time": "1100", "end_time": "1215"}
        ]"#;
        let parsed = parse_meeting_times(raw);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].day, 0);
    }

    #[test]
    fn parse_meeting_times_tolerates_non_json() {
        assert!(parse_meeting_times("").is_empty());
        assert!(parse_meeting_times("TBA").is_empty());
    }

    #[test]
    fn week_grid_places_blocks_by_meeting_day() {
        let index = index_of(vec![
            section("CS 202", &[(0, "1100", "1215"), (2, "1100", "1215")]),
            section("MATH 101", &[(1, "0900", "0950")]),
        ]);
        let mut blocks = BlockList::new();
        blocks
            .append(Block {
                id: "b1".to_string(),
                label: "CS 202".to_string(),
            })
            .expect("unique id");
        blocks
            .append(Block {
                id: "b2".to_string(),
                label: "Untracked Seminar".to_string(),
            })
            .expect("unique id");

        let days = week_grid(&blocks, &index);
        assert_eq!(days[0].len(), 1);
        assert_eq!(days[0][0].block_id, "b1");
        assert_eq!(days[0][0].start, "1100");
        assert_eq!(days[2].len(), 1);
        assert!(days[1].is_empty());
        assert!(days[3].iter().all(|p| p.block_id != "b2"));
    }

    #[test]
    fn first_section_wins_for_a_code() {
        let index = index_of(vec![
            section("CS 202", &[(0, "1100", "1215")]),
            section("CS 202", &[(1, "0800", "0915")]),
        ]);
        let mut blocks = BlockList::new();
        blocks
            .append(Block {
                id: "b1".to_string(),
                label: "CS 202".to_string(),
            })
            .expect("unique id");

        let days = week_grid(&blocks, &index);
        assert_eq!(days[0].len(), 1);
        assert!(days[1].is_empty());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let index = index_of(vec![section("CS 202", &[(4, "1400", "1515")])]);
        assert_eq!(index.get("cs 202").len(), 1);
        assert_eq!(index.get(" CS 202 ").len(), 1);
        assert!(index.get("CS 203").is_empty());
    }
}
