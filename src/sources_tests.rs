use super::*;
use std::fs;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directory");
    }
    fs::write(path, b"RIFF").expect("write file");
}

#[test]
fn parse_source_list_trims_and_drops_empty_entries() {
    assert_eq!(
        parse_source_list(" a , ,b,, c "),
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    );
    assert!(parse_source_list("").is_empty());
    assert!(parse_source_list(" , ,").is_empty());
}

#[test]
fn audio_extension_match_is_case_insensitive() {
    assert!(has_audio_extension(Path::new("clip.WAV")));
    assert!(has_audio_extension(Path::new("dir/clip.Flac")));
    assert!(has_audio_extension(Path::new("clip.m4a")));
    assert!(!has_audio_extension(Path::new("clip.txt")));
    assert!(!has_audio_extension(Path::new("wav")));
    assert!(!has_audio_extension(Path::new(".wav")));
}

#[test]
fn directory_scan_is_recursive_sorted_and_filtered() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let root = temp.path().join("pos");
    touch(&root.join("b.wav"));
    touch(&root.join("a.MP3"));
    touch(&root.join("notes.txt"));
    touch(&root.join("nested/deeper/c.ogg"));
    touch(&root.join("nested/d.json"));

    let spec = root.display().to_string();
    let pool = resolve_source(&spec);

    assert_eq!(pool.kind, SourceKind::Directory);
    assert_eq!(
        pool.files,
        vec![
            root.join("a.MP3"),
            root.join("b.wav"),
            root.join("nested/deeper/c.ogg"),
        ]
    );
}

#[test]
fn single_file_source_ignores_extension() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let file = temp.path().join("sample.raw");
    touch(&file);

    let pool = resolve_source(&file.display().to_string());

    assert_eq!(pool.kind, SourceKind::File);
    assert_eq!(pool.files, vec![file]);
}

#[test]
fn missing_source_yields_empty_pool() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let spec = temp.path().join("does-not-exist").display().to_string();

    let pool = resolve_source(&spec);

    assert_eq!(pool.kind, SourceKind::Missing);
    assert!(pool.is_empty());
    assert_eq!(pool.source, spec);
}

#[test]
fn resolve_sources_keeps_order_and_collapses_repeats() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let a = temp.path().join("a");
    let b = temp.path().join("b");
    touch(&a.join("1.wav"));
    touch(&b.join("1.wav"));
    touch(&b.join("2.wav"));
    let missing = temp.path().join("c").display().to_string();
    let specs = vec![
        b.display().to_string(),
        missing.clone(),
        a.display().to_string(),
        b.display().to_string(),
    ];

    let resolved = resolve_sources(&specs);

    assert_eq!(
        resolved.candidate_counts(),
        vec![
            (b.display().to_string(), 2),
            (missing, 0),
            (a.display().to_string(), 1),
        ]
    );
    assert_eq!(resolved.total_candidates(), 3);
}

#[cfg(unix)]
#[test]
fn symlink_loop_does_not_hang_scan() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let root = temp.path().join("loop");
    touch(&root.join("x.wav"));
    std::os::unix::fs::symlink(&root, root.join("again")).expect("create symlink");

    let pool = resolve_source(&root.display().to_string());

    assert_eq!(pool.files, vec![root.join("x.wav")]);
}

#[cfg(unix)]
#[test]
fn non_utf8_file_names_are_skipped() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = tempfile::tempdir().expect("create temp dir");
    let root = temp.path().join("pos");
    touch(&root.join("good.wav"));
    let bad = root.join(OsStr::from_bytes(b"clip_\xFF.wav"));
    if fs::write(&bad, b"RIFF").is_err() {
        // Some filesystems refuse non-UTF-8 names outright.
        return;
    }

    let resolved = resolve_sources(&[root.display().to_string()]);

    assert_eq!(resolved.pools()[0].files, vec![root.join("good.wav")]);
    assert_eq!(resolved.total_candidates(), 1);
    assert!(resolved.pools()[0]
        .files
        .iter()
        .all(|path| path.to_str().is_some() && path.exists()));
}
