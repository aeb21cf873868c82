//! Snapshot loading for the resort store.
//!
//! The entity snapshot is read-only input: two JSON documents, `lifts.json`
//! and `trails.json`, read once at startup. A default dataset is embedded in
//! the binary for running without any data directory.
//!
//! Cross-references are checked on load. A lift trail id with no matching
//! trail is logged as a data-integrity warning, never a fatal error; the
//! GraphQL layer skips such ids at relationship-resolution time.

use crate::error::{Result, SnowtoothError};
use crate::model::{Lift, Trail};
use crate::store::ResortStore;
use std::path::Path;

const DEFAULT_LIFTS: &str = include_str!("../data/lifts.json");
const DEFAULT_TRAILS: &str = include_str!("../data/trails.json");

/// Load a snapshot from `lifts.json` and `trails.json` in `data_dir`.
pub fn load_snapshot(data_dir: &Path) -> Result<ResortStore> {
    let lifts_path = data_dir.join("lifts.json");
    let trails_path = data_dir.join("trails.json");

    if !lifts_path.exists() || !trails_path.exists() {
        return Err(SnowtoothError::Snapshot(format!(
            "expected lifts.json and trails.json in {}",
            data_dir.display()
        )));
    }

    let lifts: Vec<Lift> = serde_json::from_str(&std::fs::read_to_string(&lifts_path)?)?;
    let trails: Vec<Trail> = serde_json::from_str(&std::fs::read_to_string(&trails_path)?)?;
    Ok(build_store(lifts, trails))
}

/// The embedded default dataset.
pub fn default_snapshot() -> Result<ResortStore> {
    let lifts: Vec<Lift> = serde_json::from_str(DEFAULT_LIFTS)?;
    let trails: Vec<Trail> = serde_json::from_str(DEFAULT_TRAILS)?;
    Ok(build_store(lifts, trails))
}

fn build_store(lifts: Vec<Lift>, trails: Vec<Trail>) -> ResortStore {
    let store = ResortStore::new(lifts, trails);
    for lift in store.all_lifts() {
        for trail_id in &lift.trail_ids {
            if store.find_trail(trail_id).is_none() {
                tracing::warn!(
                    lift_id = %lift.id,
                    trail_id = %trail_id,
                    "lift references unknown trail in snapshot"
                );
            }
        }
    }
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_snapshot_loads() {
        let store = default_snapshot().unwrap();
        assert!(store.lift_count() > 0);
        assert!(store.trail_count() > 0);
    }

    #[test]
    fn default_snapshot_has_no_dangling_references() {
        let store = default_snapshot().unwrap();
        for lift in store.all_lifts() {
            for trail_id in &lift.trail_ids {
                assert!(
                    store.find_trail(trail_id).is_some(),
                    "lift {} references unknown trail {}",
                    lift.id,
                    trail_id
                );
            }
        }
    }

    #[test]
    fn load_snapshot_from_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("lifts.json"),
            r#"[{"id": "rope-tow", "name": "Rope Tow", "status": "OPEN", "capacity": 1, "trails": ["bunny-hill"]}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("trails.json"),
            r#"[{"id": "bunny-hill", "name": "Bunny Hill", "difficulty": "beginner", "status": "OPEN"}]"#,
        )
        .unwrap();

        let store = load_snapshot(dir.path()).unwrap();
        assert_eq!(store.lift_count(), 1);
        assert_eq!(store.trail_count(), 1);
        assert!(store.find_lift("rope-tow").unwrap().accesses("bunny-hill"));
    }

    #[test]
    fn load_snapshot_missing_files_errors() {
        let dir = TempDir::new().unwrap();
        let err = load_snapshot(dir.path()).unwrap_err();
        assert!(matches!(err, SnowtoothError::Snapshot(_)));
    }

    #[test]
    fn load_snapshot_malformed_json_errors() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("lifts.json"), "not json").unwrap();
        std::fs::write(dir.path().join("trails.json"), "[]").unwrap();
        let err = load_snapshot(dir.path()).unwrap_err();
        assert!(matches!(err, SnowtoothError::Json(_)));
    }
}
