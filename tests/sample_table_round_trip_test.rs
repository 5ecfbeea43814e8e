// tests/sample_table_round_trip_test.rs

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

use blogkit::data_analysis::summary_stats::row_statistics;
use blogkit::data_generation::generator::{create_data, GeneratorConfig};
use blogkit::data_input::sample_table::SampleTable;
use blogkit::data_input::table_parser::read_sample_table;
use blogkit::data_input::table_writer::write_sample_table;
use blogkit::error::DataError;

#[test]
fn test_generated_file_round_trips_exactly() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample_data.csv");

    let config = GeneratorConfig::default();
    let mut rng = StdRng::seed_from_u64(2024);
    let samples = create_data(&config, Some(path.as_path()), None, &mut rng).unwrap();

    let table = read_sample_table(&path).unwrap();
    assert_eq!(table.nrows(), config.repetitions + 1);
    assert_eq!(table.ncols(), 8);
    assert_eq!(table, samples.to_table().unwrap());

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().next().unwrap(), "4,5,6,7,8,9,10,11");
    assert_eq!(text.lines().count(), 6);
}

#[test]
fn test_first_row_is_just_another_row_on_read() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("table.csv");

    let written = SampleTable::from_rows(vec![
        vec![4.0, 5.0, 6.0, 7.0],
        vec![11.5, 16.0, 17.25, 22.0],
        vec![13.0, 14.0, 19.5, 20.0],
    ])
    .unwrap();
    write_sample_table(&written, &path).unwrap();

    let table = read_sample_table(&path).unwrap();
    let stats = row_statistics(&table).unwrap();
    assert_eq!(stats.len(), 3);
    assert_eq!(stats.mean[0], 5.5);

    let samples = table.into_sample_set().unwrap();
    assert_eq!(samples.independent.to_vec(), vec![4.0, 5.0, 6.0, 7.0]);
    assert_eq!(samples.repetitions(), 2);
}

#[test]
fn test_write_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("sample_data.csv");

    let config = GeneratorConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    assert!(create_data(&config, Some(path.as_path()), None, &mut rng).is_err());
    assert!(!path.exists());
}

#[test]
fn test_malformed_files_are_rejected() {
    let dir = tempdir().unwrap();

    let non_numeric = dir.path().join("non_numeric.csv");
    std::fs::write(&non_numeric, "1,2,3\n4,five,6\n").unwrap();
    assert!(matches!(
        read_sample_table(&non_numeric),
        Err(DataError::Parse { line: 2, column: 2, .. })
    ));

    let ragged = dir.path().join("ragged.csv");
    std::fs::write(&ragged, "1,2,3\n4,5,6\n7,8\n").unwrap();
    assert!(matches!(
        read_sample_table(&ragged),
        Err(DataError::Shape {
            line: 3,
            expected: 3,
            found: 2
        })
    ));
}
