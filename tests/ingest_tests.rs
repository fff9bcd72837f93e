use std::io::Write;
use std::num::NonZeroUsize;

use tempfile::NamedTempFile;
use wordcache::report::{EventLog, TraceWriter};
use wordcache::words::hash_code;
use wordcache::{Allocation, Error, run_file};

fn size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn input_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_hi_there_world() {
    let file = input_file("hi there world\n");
    let mut log = EventLog::default();
    let stats = run_file(file.path(), size(10), &mut log).unwrap();

    let there = hash_code("there", size(10));
    let world = hash_code("world", size(10));
    assert_eq!(stats.cached, 2);

    if there == world {
        assert_eq!(log.drained.len(), 1);
        assert_eq!(log.drained[0].word, "world");
    } else {
        let drained: Vec<(usize, &str)> = log
            .drained
            .iter()
            .map(|e| (e.index, e.word.as_str()))
            .collect();
        let mut expected = vec![(there, "there"), (world, "world")];
        expected.sort();
        assert_eq!(drained, expected);
    }
}

#[test]
fn test_trace_output() {
    // "cat" and "act" sum to 312, "dog" to 314
    let file = input_file("cat act\ndog\n");
    let mut out = Vec::new();
    let stats = run_file(file.path(), size(100), TraceWriter::new(&mut out)).unwrap();
    assert_eq!(stats.occupied, 2);

    let expected = "Word \"cat\" ==> 12 (new)\n\
                    Word \"act\" ==> 12 (reused)\n\
                    Word \"dog\" ==> 14 (new)\n\
                    Cache index 12 ==> \"act\"\n\
                    Cache index 14 ==> \"dog\"\n";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_allocation_kinds_per_bucket() {
    let file = input_file("alpha alpha alpha\n");
    let mut log = EventLog::default();
    run_file(file.path(), size(7), &mut log).unwrap();

    let kinds: Vec<Allocation> = log.writes.iter().map(|w| w.allocation).collect();
    assert_eq!(
        kinds,
        vec![Allocation::New, Allocation::Reused, Allocation::Reused]
    );
    assert_eq!(log.drained.len(), 1);
}

#[test]
fn test_overlong_line_stops_run() {
    let file = input_file(&format!("fine\n{}\n", "word ".repeat(300)));
    let mut log = EventLog::default();
    let err = run_file(file.path(), size(7), &mut log).unwrap_err();
    assert!(matches!(err, Error::LineTooLong { line: 2, .. }));
    assert_eq!(log.writes.len(), 1);
    assert!(log.drained.is_empty());
    assert!(!log.finished);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let err = run_file(&path, size(3), EventLog::default()).unwrap_err();
    assert!(matches!(err, Error::FileOpen { .. }));
    assert!(err.to_string().contains("absent.txt"));
}
