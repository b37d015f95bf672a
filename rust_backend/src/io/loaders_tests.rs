use std::io::Write;

use super::loaders::GridLoader;

#[test]
fn loads_simple_csv_string() {
    let grid = GridLoader::load_from_csv_str("ADMIN,,\nDupont,du 01/01/25 au 02/01/25,\n").unwrap();

    assert_eq!(grid.num_rows(), 2);
    assert_eq!(grid.num_cols(), 3);
    let rows: Vec<&[String]> = grid.rows().collect();
    assert_eq!(rows[0][0], "ADMIN");
    assert_eq!(rows[1][1], "du 01/01/25 au 02/01/25");
}

#[test]
fn no_header_row_is_assumed() {
    let grid = GridLoader::load_from_csv_str("a,b\nc,d\n").unwrap();
    assert_eq!(grid.num_rows(), 2);
}

#[test]
fn quoted_cells_may_span_lines() {
    let csv = "\"Dupont Jean\n(23 jours)\",du 01/01/25 au 02/01/25\n";
    let grid = GridLoader::load_from_csv_str(csv).unwrap();

    assert_eq!(grid.num_rows(), 1);
    let row = grid.rows().next().unwrap();
    assert_eq!(row[0], "Dupont Jean\n(23 jours)");
}

#[test]
fn uneven_rows_are_padded() {
    let grid = GridLoader::load_from_csv_str("a\nb,c,d\n").unwrap();

    assert_eq!(grid.num_cols(), 3);
    let first = grid.rows().next().unwrap();
    assert_eq!(first, &["a".to_string(), String::new(), String::new()][..]);
}

#[test]
fn empty_input_yields_empty_grid() {
    let grid = GridLoader::load_from_csv_str("").unwrap();
    assert!(grid.is_empty());
}

#[test]
fn windows_1252_bytes_are_decoded() {
    // "Période,," in Windows-1252: é is a single 0xE9 byte.
    let bytes = b"P\xE9riode,,\n";
    let grid = GridLoader::load_from_bytes(bytes).unwrap();

    let row = grid.rows().next().unwrap();
    assert_eq!(row[0], "Période");
}

#[test]
fn utf8_bytes_pass_through() {
    let grid = GridLoader::load_from_bytes("Période,,\n".as_bytes()).unwrap();
    assert_eq!(grid.rows().next().unwrap()[0], "Période");
}

#[test]
fn loads_csv_from_file() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(file, "TEAM,,\nAlice,du 01/01/25 au 02/01/25,\n").unwrap();

    let grid = GridLoader::load_from_file(file.path()).unwrap();
    assert_eq!(grid.num_rows(), 2);
}

#[test]
fn rejects_unsupported_extension() {
    let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
    let err = GridLoader::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Unsupported file format"));
}

#[test]
fn rejects_path_without_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noext");
    std::fs::write(&path, "a,b\n").unwrap();

    let err = GridLoader::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("no extension"));
}
