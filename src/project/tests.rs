use crate::project::Project;
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn read_project_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "image": "memory.txt", "tz_offset": 3600, "model": "HP-41CX" }}"#
    )
    .unwrap();

    let project = Project::read(file.path()).unwrap();
    assert_eq!(project.image(), Some("memory.txt"));
    assert_eq!(project.tz_offset(), 3600);
    assert_eq!(project.model(), "HP-41CX");
}

#[test]
fn partial_project_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "image": "memory.txt" }}"#).unwrap();

    let project = Project::read(file.path()).unwrap();
    assert_eq!(project.image(), Some("memory.txt"));
    assert_eq!(project.model(), "HP-41CX");
}

#[test]
fn missing_project_file() {
    let dir = tempfile::tempdir().unwrap();
    let project = Project::read(dir.path().join("calcmem.json")).unwrap();

    assert_eq!(project, Project::default());
    assert_eq!(project.image(), None);
}

#[test]
fn invalid_project_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    assert!(Project::read(file.path()).is_err());
}

#[test]
fn command_line_overrides_file() {
    let mut file = Project::default();
    file.set_image("file.txt");
    file.set_tz_offset(3600);

    let mut args = Project::default();
    args.set_image("args.txt");

    let merged = file.apply_override(&args);
    assert_eq!(merged.image(), Some("args.txt"));
    assert_eq!(merged.tz_offset(), 3600);

    let merged = file.apply_override(&Project::default());
    assert_eq!(merged, file);
}
