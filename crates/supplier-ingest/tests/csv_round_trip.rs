use std::fs;
use std::path::{Path, PathBuf};

use supplier_ingest::{
    IngestError, RegistryColumns, prepare_registry, read_registry_rows, read_supplier_names,
    screen_suppliers, write_match_table, write_registry,
};
use supplier_match::{CandidateUniverse, match_all_sequential};
use supplier_model::{RegistryKind, ScreeningOptions};
use supplier_normalize::Normalizer;
use tempfile::TempDir;

fn temp_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read output")
        .lines()
        .map(str::to_string)
        .collect()
}

const COMPANIES: &str = "CompanyName, CompanyNumber,RegAddress.PostTown\n\
Oak Limited,00000001,LEEDS\n\
OAK LTD,00000002,YORK\n\
Elm Tree Trust Limited,00000003,BATH\n\
Acme & Co,00000004,HULL\n";

#[test]
fn registry_columns_are_trimmed_and_collisions_dropped() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_file(&dir, "ch.csv", COMPANIES);

    let rows = read_registry_rows(&path, &RegistryColumns::for_kind(RegistryKind::Companies))
        .expect("read registry");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].id, "00000001");
    assert_eq!(rows[0].metadata.get("RegAddress.PostTown").map(String::as_str), Some("LEEDS"));

    let registry = prepare_registry(RegistryKind::Companies, rows, &Normalizer::new());
    assert_eq!(registry.len(), 2);

    let out = dir.path().join("registers").join("ch_w_normalised.csv");
    write_registry(&out, &registry).expect("write registry");
    assert_eq!(
        read_lines(&out),
        vec![
            "id,normalized_name,name,RegAddress.PostTown",
            "00000003,ELM TREE TRUST LTD,Elm Tree Trust Limited,BATH",
            "00000004,ACME COMPANY,Acme & Co,HULL",
        ]
    );
}

#[test]
fn match_table_joins_back_to_registry_ids() {
    let dir = TempDir::new().expect("temp dir");
    let registry_path = temp_file(&dir, "ch.csv", COMPANIES);
    let suppliers_path = temp_file(
        &dir,
        "suppliers.csv",
        "supplier,amount\nElm Tree Trust Ltd,100\nREDACTED,5\n12345,1\nAcme and Company,7\n",
    );

    let normalizer = Normalizer::new();
    let names = read_supplier_names(&suppliers_path, "supplier").expect("read suppliers");
    let report = screen_suppliers(&names, &ScreeningOptions::default(), &normalizer);
    assert_eq!(report.suppliers.len(), 2);
    assert_eq!(report.placeholder, 1);
    assert_eq!(report.numeric, 1);

    let rows = read_registry_rows(&registry_path, &RegistryColumns::for_kind(RegistryKind::Companies))
        .expect("read registry");
    let registry = prepare_registry(RegistryKind::Companies, rows, &normalizer);
    let universe = CandidateUniverse::new(registry.canonical_names());
    let results = match_all_sequential(&report.queries(), &universe, 5);

    let out = dir.path().join("matches_to_ch.csv");
    write_match_table(&out, &registry, &report.suppliers, &results, 5).expect("write matches");

    let lines = read_lines(&out);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("supplier,normalized_supplier,best_ch_match_1,best_ch_match_1_score"));
    assert!(lines[0].ends_with("best_ch_match_5_score,best_ch_match_1_id"));
    assert!(lines[1].starts_with("ELM TREE TRUST LTD,ELM TREE TRUST LTD,ELM TREE TRUST LTD,100,"));
    assert!(lines[1].ends_with(",,,,,,,00000003"));
    assert!(lines[2].starts_with("ACME AND COMPANY,ACME COMPANY,ACME COMPANY,100,"));
    assert!(lines[2].ends_with(",00000004"));
}

#[test]
fn missing_column_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_file(&dir, "spine.csv", "uid,name\n1,Oak\n");
    let err = read_registry_rows(&path, &RegistryColumns::for_kind(RegistryKind::PublicSpine))
        .expect_err("missing column");
    assert!(matches!(err, IngestError::MissingColumn { ref column, .. } if column == "organisationname"));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let err = read_supplier_names(&dir.path().join("absent.csv"), "supplier").expect_err("missing");
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn mismatched_results_are_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let registry = prepare_registry(RegistryKind::PublicSpine, Vec::new(), &Normalizer::new());
    let report = screen_suppliers(&["Oak Primary School"], &ScreeningOptions::default(), &Normalizer::new());
    let err = write_match_table(&dir.path().join("m.csv"), &registry, &report.suppliers, &[], 5)
        .expect_err("mismatch");
    assert!(matches!(err, IngestError::ResultCountMismatch { suppliers: 1, results: 0 }));
}

#[test]
fn unwritable_output_is_a_write_error() {
    let dir = TempDir::new().expect("temp dir");
    let target = dir.path().join("ch_w_normalised.csv");
    fs::create_dir(&target).expect("directory in the way");
    let registry = prepare_registry(RegistryKind::Companies, Vec::new(), &Normalizer::new());

    let err = write_registry(&target, &registry).expect_err("directory is not writable as csv");
    assert!(matches!(err, IngestError::CsvWrite { ref path, .. } if *path == target));
    assert!(err.to_string().starts_with("failed to write CSV"));
}
