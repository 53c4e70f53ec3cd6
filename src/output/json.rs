// Timeline dump: every list's timeline written once, at the end of a run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::timeline::Timeline;

/// Write timelines as pretty-printed JSON: an array of
/// `{"list_name": ..., "weeks": {"YYYY-MM-DD": [{"rank", "isbn"}, ...]}}`.
pub fn write_timelines(path: &Path, timelines: &[Timeline]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let json = serde_json::to_string_pretty(timelines)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::timeline::RankedBook;
    use chrono::NaiveDate;

    #[test]
    fn test_dump_uses_date_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/timeline.json");

        let mut timeline = Timeline::new("hardcover-fiction");
        timeline.weeks.insert(
            NaiveDate::from_ymd_opt(2011, 1, 8).unwrap(),
            vec![RankedBook {
                rank: 1,
                isbn: "9780399157301".to_string(),
            }],
        );

        write_timelines(&path, std::slice::from_ref(&timeline)).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"2011-01-08\""));
        let loaded: Vec<Timeline> = serde_json::from_str(&raw).unwrap();
        assert_eq!(loaded, vec![timeline]);
    }
}
