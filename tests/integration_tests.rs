//! Integration tests for `QuickLaunch`
//!
//! Exercise the registry, the launcher and the controller together through
//! the public API, against real files in a temporary directory.

use quicklaunch::{
    LaunchRecord, LaunchRegistry, LauncherController, QuickLaunchError, StatusKind,
    StatusMessage,
    launcher::{self, LaunchStatus},
    registry::parse_import,
    utils::MemoryClipboard,
};
use tempfile::TempDir;

fn notepad() -> LaunchRecord {
    LaunchRecord::new("Notepad", "notepad.exe", "C:\\", false, false)
}

fn registry_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("apps.json")
}

fn controller(dir: &TempDir) -> LauncherController<MemoryClipboard> {
    LauncherController::new(
        LaunchRegistry::load(registry_path(dir)).unwrap(),
        dir.path().join("background.txt"),
        MemoryClipboard::default(),
    )
}

/// After `add`, a fresh load sees the new record at the end
#[test]
fn test_add_then_reload_appends() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut registry = LaunchRegistry::load(registry_path(&dir)).unwrap();
        registry
            .add(LaunchRecord::new("First", "a.exe", "", false, false))
            .unwrap();
    }

    let mut registry = LaunchRegistry::load(registry_path(&dir)).unwrap();
    registry.add(notepad()).unwrap();

    let reloaded = LaunchRegistry::load(registry_path(&dir)).unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.records().last(), Some(&notepad()));
}

/// Removing by name drops every match and keeps the others in order
#[test]
fn test_remove_by_name_preserves_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = LaunchRegistry::load(registry_path(&dir)).unwrap();
    for name in ["X", "A", "X", "B", "C", "X"] {
        registry
            .add(LaunchRecord::new(name, "t", "", false, false))
            .unwrap();
    }

    registry.remove("X").unwrap();

    let reloaded = LaunchRegistry::load(registry_path(&dir)).unwrap();
    let names: Vec<_> = reloaded.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
}

/// Files written by earlier versions (text flags, non-ASCII names) still load
#[test]
fn test_loads_legacy_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        registry_path(&dir),
        r#"[["Notepad","notepad.exe","C:\\","false","false"],["记事本","n.exe","D:\\",true,true]]"#,
    )
    .unwrap();

    let registry = LaunchRegistry::load(registry_path(&dir)).unwrap();
    assert_eq!(registry.records()[0], notepad());
    assert_eq!(registry.records()[1].name, "记事本");
    assert!(registry.records()[1].new_console);
}

/// Export then import through the clipboard yields the same sequence
#[test]
fn test_clipboard_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut source = controller(&dir);
    source.add(notepad());
    source.add(LaunchRecord::new("Build", "make all", "/src", true, true));
    source.export_to_clipboard();
    let exported = source.clipboard_mut().contents.clone();

    let other_dir = tempfile::tempdir().unwrap();
    let mut target = controller(&other_dir);
    target.clipboard_mut().contents = exported;
    let status = target.import_from_clipboard();

    assert_eq!(status.kind, StatusKind::Success);
    assert_eq!(target.registry().records(), source.registry().records());
    assert_eq!(
        LaunchRegistry::load(registry_path(&other_dir))
            .unwrap()
            .records(),
        source.registry().records()
    );
}

/// Non-list payloads are rejected and the registry stays as it was
#[test]
fn test_import_rejects_non_list() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller(&dir);
    controller.add(notepad());

    for payload in [r#"{"Notepad": "notepad.exe"}"#, "3.14"] {
        controller.clipboard_mut().contents = payload.to_string();
        assert_eq!(
            controller.import_from_clipboard(),
            StatusMessage::failure("Clipboard content is invalid")
        );
    }

    assert_eq!(controller.registry().records(), [notepad()]);
    let on_disk = LaunchRegistry::load(registry_path(&dir)).unwrap();
    assert_eq!(on_disk.records(), [notepad()]);
}

/// A list with a malformed element is rejected as a whole
#[test]
fn test_import_rejects_malformed_record() {
    let err = parse_import(r#"[["ok","ok","ok",true,true],["missing","fields"]]"#).unwrap_err();
    assert!(matches!(err, QuickLaunchError::InvalidRecord { index: 1, .. }));
}

/// A nonexistent target yields a failure naming the path, not a panic
#[test]
fn test_launch_missing_target() {
    let record = LaunchRecord::new(
        "Missing",
        "/no/such/dir/quicklaunch-missing-target",
        "",
        false,
        false,
    );
    let outcome = launcher::launch(&record);
    assert_eq!(outcome.status, LaunchStatus::Failure);
    assert!(
        outcome
            .message
            .contains("/no/such/dir/quicklaunch-missing-target")
    );
}

/// Notepad launches where it exists and reports "not found" elsewhere
#[test]
fn test_notepad_scenario() {
    let outcome = launcher::launch(&notepad());
    match outcome.status {
        LaunchStatus::Success => assert_eq!(outcome.message, "Notepad started"),
        LaunchStatus::Failure => assert_eq!(outcome.message, "File not found: notepad.exe"),
    }
}

/// The grid follows insertion order, two per row, after every mutation
#[test]
fn test_grid_tracks_mutations() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller(&dir);
    for name in ["a", "b", "c"] {
        controller.add(LaunchRecord::new(name, "t", "", false, false));
    }
    let cells: Vec<_> = controller
        .grid()
        .into_iter()
        .map(|c| (c.label, c.row, c.column))
        .collect();
    assert_eq!(
        cells,
        [
            ("a".to_string(), 0, 0),
            ("b".to_string(), 0, 1),
            ("c".to_string(), 1, 0)
        ]
    );

    controller.delete("a");
    let cells: Vec<_> = controller
        .grid()
        .into_iter()
        .map(|c| (c.label, c.row, c.column))
        .collect();
    assert_eq!(
        cells,
        [("b".to_string(), 0, 0), ("c".to_string(), 0, 1)]
    );
}

/// When saving fails, the grid still matches what each button would launch
#[test]
fn test_grid_matches_launch_targets_after_failed_save() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller(&dir);
    controller.add(LaunchRecord::new("Old", "old.exe", "", false, false));

    let storage = registry_path(&dir);
    std::fs::remove_file(&storage).unwrap();
    std::fs::create_dir(&storage).unwrap();

    controller.clipboard_mut().contents =
        r#"[["New","new.exe","",false,false],["Other","other.exe","",false,false]]"#
            .to_string();
    let status = controller.import_from_clipboard();
    assert_eq!(status.kind, StatusKind::Failure);

    for cell in controller.grid() {
        let record = &controller.registry().records()[cell.index];
        assert_eq!(cell.label, record.name);
    }
    let labels: Vec<_> = controller.grid().into_iter().map(|c| c.label).collect();
    assert_eq!(labels, ["New", "Other"]);
}
