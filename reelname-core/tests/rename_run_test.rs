use proptest::prelude::*;
use reelname_core::{
    course_mapping, run, EntryOutcome, RenameMapping, RenameOptions, RunSummary,
};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// File name -> content for every file in `dir`.
fn snapshot(dir: &Path) -> BTreeMap<String, String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| {
            let e = e.unwrap();
            (
                e.file_name().to_string_lossy().into_owned(),
                fs::read_to_string(e.path()).unwrap(),
            )
        })
        .collect()
}

fn apply(dir: &Path, mapping: &RenameMapping) -> RunSummary {
    run(dir, mapping, &RenameOptions::default()).unwrap()
}

#[test]
fn test_course_mapping_renames_every_recording() {
    let temp_dir = TempDir::new().unwrap();
    let mapping = course_mapping();
    for entry in &mapping {
        fs::write(temp_dir.path().join(&entry.from), &entry.from).unwrap();
    }

    let summary = apply(temp_dir.path(), &mapping);

    assert_eq!(summary.outcomes.len(), 44);
    assert_eq!(summary.renamed(), 42);
    assert_eq!(summary.unchanged(), 2);
    assert_eq!(summary.skipped(), 0);
    assert!(summary.is_success());

    let files = snapshot(temp_dir.path());
    assert_eq!(files.len(), 44);
    for entry in &mapping {
        // Each file carries its original name as content
        assert_eq!(files.get(&entry.to), Some(&entry.from), "entry {entry:?}");
    }
    assert_eq!(
        files.get("Understanding DHCP in Networking.mp4").map(String::as_str),
        Some("WHAT IS DHCP.mp4")
    );
}

#[test]
fn test_partial_collection() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("end.mp4"), "end").unwrap();
    fs::write(temp_dir.path().join("vpn pia.mp4"), "vpn").unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "unrelated").unwrap();

    let summary = apply(temp_dir.path(), &course_mapping());

    assert_eq!(summary.renamed(), 2);
    assert_eq!(summary.skipped(), 42);
    assert!(summary.is_success());

    let files = snapshot(temp_dir.path());
    assert_eq!(
        files.keys().map(String::as_str).collect::<Vec<_>>(),
        vec![
            "Configuring PIA VPN in pfSense.mp4",
            "Final Words and Conclusion.mp4",
            "notes.txt",
        ]
    );
}

#[test]
fn test_second_run_skips_everything() {
    let temp_dir = TempDir::new().unwrap();
    let mapping: RenameMapping = [("a.mp4", "b.mp4"), ("c.mp4", "d.mp4")].into_iter().collect();
    fs::write(temp_dir.path().join("a.mp4"), "a").unwrap();
    fs::write(temp_dir.path().join("c.mp4"), "c").unwrap();

    let first = apply(temp_dir.path(), &mapping);
    assert_eq!(first.renamed(), 2);
    let after_first = snapshot(temp_dir.path());

    let second = apply(temp_dir.path(), &mapping);
    assert_eq!(second.skipped(), 2);
    assert!(second.is_success());
    assert_eq!(
        second.outcomes,
        vec![
            EntryOutcome::Skipped {
                from: "a.mp4".to_string()
            },
            EntryOutcome::Skipped {
                from: "c.mp4".to_string()
            },
        ]
    );
    assert_eq!(snapshot(temp_dir.path()), after_first);
}

#[test]
fn test_failure_does_not_stop_the_batch() {
    let temp_dir = TempDir::new().unwrap();
    let mapping: RenameMapping = [
        ("a.mp4", "taken.mp4"),
        ("b.mp4", "bee.mp4"),
        ("c.mp4", "sea.mp4"),
    ]
    .into_iter()
    .collect();
    for name in ["a.mp4", "taken.mp4", "b.mp4"] {
        fs::write(temp_dir.path().join(name), name).unwrap();
    }

    let summary = apply(temp_dir.path(), &mapping);

    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.renamed(), 1);
    assert_eq!(summary.skipped(), 1);
    assert!(!summary.is_success());

    let files = snapshot(temp_dir.path());
    assert_eq!(files.get("a.mp4").map(String::as_str), Some("a.mp4"));
    assert_eq!(files.get("taken.mp4").map(String::as_str), Some("taken.mp4"));
    assert_eq!(files.get("bee.mp4").map(String::as_str), Some("b.mp4"));
}

fn dry_run(dir: &Path, mapping: &RenameMapping) -> RunSummary {
    let options = RenameOptions {
        dry_run: true,
        log_file: None,
    };
    run(dir, mapping, &options).unwrap()
}

#[test]
fn test_dry_run_reports_what_the_real_run_does() {
    let mappings: Vec<RenameMapping> = vec![
        // Two entries sharing a target
        [("a.mp4", "x.mp4"), ("b.mp4", "x.mp4")].into_iter().collect(),
        // A chain through a name that only exists mid-run
        [("a.mp4", "b.mp4"), ("b.mp4", "c.mp4")].into_iter().collect(),
        // A name freed by an earlier entry and reused by a later one
        [("b.mp4", "c.mp4"), ("a.mp4", "b.mp4")].into_iter().collect(),
    ];

    for mapping in &mappings {
        let preview = TempDir::new().unwrap();
        let real = TempDir::new().unwrap();
        for name in ["a.mp4", "b.mp4"] {
            fs::write(preview.path().join(name), name).unwrap();
            fs::write(real.path().join(name), name).unwrap();
        }
        let before = snapshot(preview.path());

        let predicted = dry_run(preview.path(), mapping);
        let actual = apply(real.path(), mapping);

        assert_eq!(predicted.outcomes, actual.outcomes, "mapping {mapping:?}");
        assert_eq!(snapshot(preview.path()), before);
    }
}

/// Which of `len` sources exist, plus a permutation of the entry order.
fn presence_and_order() -> impl Strategy<Value = (Vec<bool>, Vec<usize>)> {
    (1usize..8).prop_flat_map(|len| {
        (
            prop::collection::vec(any::<bool>(), len),
            Just((0..len).collect::<Vec<_>>()).prop_shuffle(),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Mappings whose names never overlap give the same result in any order.
    #[test]
    fn prop_order_does_not_change_final_state((present, order) in presence_and_order()) {
        let pairs: Vec<(String, String)> = (0..present.len())
            .map(|i| (format!("old-{i}.mp4"), format!("new-{i}.mp4")))
            .collect();
        let shuffled: Vec<(String, String)> = order.iter().map(|&i| pairs[i].clone()).collect();

        let forward = TempDir::new().unwrap();
        let permuted = TempDir::new().unwrap();
        for (i, (old, _)) in pairs.iter().enumerate() {
            if present[i] {
                fs::write(forward.path().join(old), old).unwrap();
                fs::write(permuted.path().join(old), old).unwrap();
            }
        }

        let a = apply(forward.path(), &pairs.into_iter().collect::<RenameMapping>());
        let b = apply(permuted.path(), &shuffled.into_iter().collect::<RenameMapping>());

        prop_assert_eq!(snapshot(forward.path()), snapshot(permuted.path()));
        prop_assert_eq!(a.renamed(), b.renamed());
        prop_assert_eq!(a.skipped(), b.skipped());
        prop_assert_eq!(a.renamed(), present.iter().filter(|p| **p).count());
    }

    /// A dry run predicts the real run even when names overlap.
    #[test]
    fn prop_dry_run_matches_real_run(
        present in prop::collection::vec(any::<bool>(), 4),
        pairs in prop::collection::vec((0usize..4, 0usize..4), 1..6),
    ) {
        let mapping: RenameMapping = pairs
            .iter()
            .map(|(from, to)| (format!("n{from}.mp4"), format!("n{to}.mp4")))
            .collect();

        let preview = TempDir::new().unwrap();
        let real = TempDir::new().unwrap();
        for (i, exists) in present.iter().enumerate() {
            if *exists {
                let name = format!("n{i}.mp4");
                fs::write(preview.path().join(&name), &name).unwrap();
                fs::write(real.path().join(&name), &name).unwrap();
            }
        }

        let predicted = dry_run(preview.path(), &mapping);
        let actual = apply(real.path(), &mapping);

        prop_assert_eq!(predicted.outcomes, actual.outcomes);
    }
}
