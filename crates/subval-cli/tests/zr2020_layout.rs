//! Integration test: validate a complete challenge submission from a manifest.
//!
//! Builds a submission tree shaped like a ZeroSpeech 2020 package (metadata,
//! code, per-track result directories) and runs the manifest-driven checks
//! over it, the way `subval submission` does.

use std::path::Path;

use subval_cli::submission::Outcome;
use subval_cli::{check_submission, SubmissionManifest};
use subval_core::{ErrorKind, MemoryLog};

const MANIFEST: &str = r#"
metadata:
  path: metadata.yaml
  schema:
    mandatory:
      author: string
      affiliation: string
      open source: bool
      system description: string
      using parallel train: bool
      using external data: bool
    optional:
      gpu budget: number
  open_source_key: open source
code:
  path: code
directories:
  - path: .
    label: submission
    allowed: [metadata.yaml, code, "2017", "2019"]
  - path: "2017"
    allowed: [metadata.yaml, english, french, mandarin, LANG1, LANG2]
  - path: "2019"
    allowed: [metadata.yaml, english, surprise]
    require_all: true
"#;

const METADATA: &str = "\
author: Jane Doe
affiliation: Somewhere University
open source: true
system description: CPC features with a VQ bottleneck
using parallel train: false
using external data: false
gpu budget: 48.5
";

fn manifest() -> SubmissionManifest {
    SubmissionManifest::from_yaml_str(MANIFEST, Path::new("zr2020.yaml")).unwrap()
}

fn build_submission(root: &Path) {
    std::fs::write(root.join("metadata.yaml"), METADATA).unwrap();
    std::fs::create_dir(root.join("code")).unwrap();
    std::fs::write(root.join("code").join("README.md"), "see repository").unwrap();
    for track in ["2017", "2019"] {
        std::fs::create_dir(root.join(track)).unwrap();
        std::fs::write(root.join(track).join("metadata.yaml"), "x: 1\n").unwrap();
    }
    for lang in ["english", "french", "mandarin"] {
        std::fs::create_dir(root.join("2017").join(lang)).unwrap();
    }
    for dir in ["english", "surprise"] {
        std::fs::create_dir(root.join("2019").join(dir)).unwrap();
    }
}

#[test]
fn test_complete_submission_passes() {
    let dir = tempfile::tempdir().unwrap();
    build_submission(dir.path());

    let log = MemoryLog::new();
    let report = check_submission(&manifest(), dir.path(), false, &log);

    assert!(report.is_success(), "{report:?}");
    assert_eq!(report.outcomes.len(), 5);
    let lines = log.lines();
    assert!(lines.iter().any(|l| l.contains("manually inspected")));
    assert!(lines.iter().any(|l| l == "validating 2019 directory ..."));
}

#[test]
fn test_stray_file_at_root_is_forbidden() {
    let dir = tempfile::tempdir().unwrap();
    build_submission(dir.path());
    std::fs::write(dir.path().join("notes.txt"), "scratch").unwrap();

    let report = check_submission(&manifest(), dir.path(), false, &MemoryLog::new());
    let failed = report.outcomes.last().unwrap();
    assert_eq!(failed.component, "submission");
    match &failed.outcome {
        Outcome::Failed(e) => {
            assert_eq!(e.kind(), ErrorKind::ForbiddenEntries);
            assert_eq!(e.entries().unwrap().as_slice(), ["notes.txt"]);
        }
        other => panic!("expected a failure, got {other:?}"),
    }
}

#[test]
fn test_missing_surprise_track_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    build_submission(dir.path());
    std::fs::remove_dir(dir.path().join("2019").join("surprise")).unwrap();

    let report = check_submission(&manifest(), dir.path(), true, &MemoryLog::new());
    assert_eq!(report.failure_count(), 1);
    let rendered = report.outcomes.last().unwrap().to_string();
    assert_eq!(
        rendered,
        "  FAIL  2019: the following 2019 files or directories are missing: surprise"
    );
}

#[test]
fn test_closed_source_with_empty_code_directory_passes() {
    let dir = tempfile::tempdir().unwrap();
    build_submission(dir.path());
    std::fs::write(
        dir.path().join("metadata.yaml"),
        METADATA.replace("open source: true", "open source: false"),
    )
    .unwrap();
    std::fs::remove_file(dir.path().join("code").join("README.md")).unwrap();

    let report = check_submission(&manifest(), dir.path(), false, &MemoryLog::new());
    assert!(report.is_success(), "{report:?}");
}

#[test]
fn test_wrong_metadata_type_stops_the_run() {
    let dir = tempfile::tempdir().unwrap();
    build_submission(dir.path());
    std::fs::write(
        dir.path().join("metadata.yaml"),
        METADATA.replace("gpu budget: 48.5", "gpu budget: two days"),
    )
    .unwrap();

    let report = check_submission(&manifest(), dir.path(), false, &MemoryLog::new());
    assert_eq!(report.outcomes.len(), 1);
    assert!(matches!(
        &report.outcomes[0].outcome,
        Outcome::Failed(e) if e.kind() == ErrorKind::TypeMismatch
    ));
}
