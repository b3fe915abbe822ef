/// End-to-end analyser tests against real files on disk.
///
/// Each test writes tab-delimited input into a `TempDir`, runs the public
/// API exactly as the CLI does, and checks the resulting records (and the
/// report file where relevant).
use std::fs;
use std::path::{Path, PathBuf};
use tabsleuth_core::model::FIELD_NAMES;
use tabsleuth_core::report::write_report;
use tabsleuth_core::{analyze, AnalysisError, InputSource, RunConfig};
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// Four columns, three data rows: one row repeated, one blank row made of
/// separators. Primary column 2, filter `3=5` matching two of the three.
#[test]
fn reference_file_every_field() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let path = write_file(
        tmp.path(),
        "reference.csv",
        "id\tname\tscore\tnote\n\
         1\tx\t5\ty\n\
         1\tx\t5\ty\n\
         \t\t\t\n",
    );

    let r = analyze(&path, 2, Some("3=5")).expect("analysis failed");

    assert_eq!(r.file_name, path.display().to_string());
    assert_eq!(r.primary_context_column, 2);
    assert_eq!(r.primary_context_column_header, "name");
    assert_eq!(r.total_header_columns, 4);
    assert_eq!(r.total_lines, 3);
    assert_eq!(r.total_unique_lines_in_file, 2);
    assert_eq!(r.total_duplicate_lines_in_file, 1);
    assert_eq!(r.total_number_of_blank_lines_no_text, 1);
    assert_eq!(
        r.total_number_of_rows_with_no_data_but_only_field_separators,
        1
    );
    assert_eq!(r.total_empty_for_column_in_context, 1);
    assert_eq!(r.total_unique_rows_for_context_column, 2);
    assert_eq!(r.total_duplicate_rows_for_context_column, 0);
    assert_eq!(r.matching_context_column_key.as_deref(), Some("score=5"));
    assert_eq!(r.count_matching_context_value, Some(2));
    assert_eq!(r.count_non_matching_context_value, Some(1));
}

/// matching + non-matching + rows shorter than the filter column == total_lines.
#[test]
fn filter_counts_partition_the_data_rows() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let path = write_file(
        tmp.path(),
        "ragged.csv",
        "a\tb\tc\td\n\
         1\t2\t3\t7\n\
         1\t2\n\
         1\t2\t3\t7\t9\n\
         \n\
         1\t2\t3\t8\n\
         1\n",
    );

    let r = analyze(&path, 1, Some("4=7")).unwrap();
    let short_rows = 3;
    assert_eq!(r.count_matching_context_value, Some(2));
    assert_eq!(r.count_non_matching_context_value, Some(1));
    assert_eq!(
        r.count_matching_context_value.unwrap()
            + r.count_non_matching_context_value.unwrap()
            + short_rows,
        r.total_lines
    );
    assert_eq!(r.matching_context_column_key.as_deref(), Some("d=7"));
}

#[test]
fn invariants_hold_across_inputs() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let inputs = [
        "h1\th2\n",
        "h1\th2\na\tb\n",
        "h1\th2\na\tb\na\tb\na\tc\n\n\n\t\n",
        "h1\n\n\n\n",
    ];
    for (i, contents) in inputs.iter().enumerate() {
        let path = write_file(tmp.path(), &format!("{i}.csv"), contents);
        let r = analyze(&path, 1, None).unwrap();
        let data_rows = contents.lines().count() as u64 - 1;
        assert_eq!(r.total_lines, data_rows, "input {i}");
        assert_eq!(
            r.total_duplicate_lines_in_file,
            r.total_lines - r.total_unique_lines_in_file,
            "input {i}"
        );
        assert_eq!(
            r.total_duplicate_rows_for_context_column,
            r.total_lines as i64 - r.total_unique_rows_for_context_column as i64 - 1,
            "input {i}"
        );
    }
}

#[test]
fn malformed_filter_leaves_other_metrics_intact() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let path = write_file(tmp.path(), "f.csv", "a\tb\n1\t5\n2\t5\n2\t6\n");

    let plain = analyze(&path, 1, None).unwrap();
    let bad = analyze(&path, 1, Some("2=five")).unwrap();
    assert_eq!(bad, plain);
    assert_eq!(bad.matching_context_column_key, None);

    let good = analyze(&path, 1, Some("2=5")).unwrap();
    assert_eq!(good.count_matching_context_value, Some(2));
    assert_eq!(good.total_unique_rows_for_context_column, 2);
    assert_eq!(good.total_duplicate_rows_for_context_column, 0);
}

#[test]
fn missing_file_is_an_open_error() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let err = analyze(&tmp.path().join("absent.csv"), 1, None).unwrap_err();
    assert!(matches!(err, AnalysisError::Open { .. }));
}

#[test]
fn empty_file_is_fatal() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let path = write_file(tmp.path(), "empty.csv", "");
    let err = analyze(&path, 1, None).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyFile(_)));
}

/// Directory mode: only `.csv` files, sorted by name, and the report rows
/// appear in that same order.
#[test]
fn directory_mode_report_order() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let data = tmp.path().join("data");
    fs::create_dir(&data).unwrap();
    write_file(&data, "zeta.csv", "a\n1\n");
    write_file(&data, "alpha.csv", "a\n1\n2\n");
    write_file(&data, "notes.txt", "a\n1\n");
    write_file(&data, "mid.csv", "a\n1\n2\n3\n");

    let config = RunConfig::new(InputSource::Directory(data.clone()));
    let files = config.input_files().unwrap();
    let results: Vec<_> = files
        .iter()
        .map(|p| analyze(p, config.primary_column, None).unwrap())
        .collect();

    let line_counts: Vec<u64> = results.iter().map(|r| r.total_lines).collect();
    assert_eq!(line_counts, vec![2, 3, 1], "alpha, mid, zeta");

    let report = tmp.path().join("output").join("complete_analysis.csv");
    write_report(&report, &results).unwrap();
    let text = fs::read_to_string(&report).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], FIELD_NAMES.join(","));
    assert_eq!(lines.len(), 4);
    assert!(lines[1].contains("alpha.csv"));
    assert!(lines[2].contains("mid.csv"));
    assert!(lines[3].contains("zeta.csv"));
}
