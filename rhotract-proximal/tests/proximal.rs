use std::io::Read;
use std::path::PathBuf;

use flate2::read::MultiGzDecoder;
use indicatif::ProgressBar;
use pretty_assertions::assert_eq;
use rstest::*;

use rhotract_core::models::Split;
use rhotract_proximal::{ProximalConfig, ProximalError, RunSummary, run_proximal};

#[fixture]
fn path_to_data() -> PathBuf {
    std::env::current_dir()
        .unwrap()
        .join("../tests/data/proximal")
}

fn config(data: &PathBuf, outfile: PathBuf, split: Option<Split>) -> ProximalConfig {
    ProximalConfig {
        fname: Some(data.join("tracts.tsv").to_string_lossy().to_string()),
        table: Some(data.join("rho.txt")),
        windowsize: Some(2000),
        split,
        outfile: Some(outfile),
        ..Default::default()
    }
}

fn read_output(path: &std::path::Path) -> Vec<String> {
    let file = std::fs::File::open(path).unwrap();
    let mut contents = String::new();
    if path.extension().is_some_and(|e| e == "gz") {
        MultiGzDecoder::new(file).read_to_string(&mut contents).unwrap();
    } else {
        let mut file = file;
        file.read_to_string(&mut contents).unwrap();
    }
    contents.lines().map(String::from).collect()
}

#[rstest]
fn test_run_proximal_bisect(path_to_data: PathBuf) {
    let tempdir = tempfile::tempdir().unwrap();
    let outfile = tempdir.path().join("out/proximal.tsv");

    let config = config(&path_to_data, outfile.clone(), None).validate().unwrap();
    let summary = run_proximal(&config, &ProgressBar::hidden()).unwrap();

    assert_eq!(
        summary,
        RunSummary {
            read: 4,
            written: 3,
            skipped: 1
        }
    );

    let lines = read_output(&outfile);
    assert_eq!(
        lines,
        vec![
            "chrom\tstart\tend\ttract_size\tleft_vals\tleft_count\tleft_window\tright_vals\tright_count\tright_window\twindowsize",
            "chr1\t0\t10000\t10000\t5.0\t4\t1.25\t37.0\t4\t9.25\t2000",
            "chr1\t0\t3000\t3000\t3.0\t3\t1.0\t7.5\t3\t2.5\t2000",
            "chr2\t0\t3000\t3000\t0.0\t0\tNA\t0.0\t0\tNA\t2000",
        ]
    );
}

#[rstest]
fn test_run_proximal_split_right_gz(path_to_data: PathBuf) {
    let tempdir = tempfile::tempdir().unwrap();
    let outfile = tempdir.path().join("proximal.tsv.gz");

    let config = config(&path_to_data, outfile.clone(), Some(Split::Right))
        .validate()
        .unwrap();
    run_proximal(&config, &ProgressBar::hidden()).unwrap();

    let lines = read_output(&outfile);
    assert_eq!(lines.len(), 4);
    // long tracts are unaffected by the split side
    assert_eq!(lines[1], "chr1\t0\t10000\t10000\t5.0\t4\t1.25\t37.0\t4\t9.25\t2000");
    assert_eq!(lines[2], "chr1\t0\t3000\t3000\t1.5\t2\t0.75\t9.0\t4\t2.25\t2000");
}

#[rstest]
fn test_toml_config_with_overrides(path_to_data: PathBuf) {
    let from_file = ProximalConfig::try_from(path_to_data.join("proximal.toml").as_path()).unwrap();
    assert_eq!(from_file.split, Some(Split::Right));

    let tempdir = tempfile::tempdir().unwrap();
    let cli = config(&path_to_data, tempdir.path().join("o.tsv"), None);
    let merged = from_file.merge(cli).validate().unwrap();

    assert_eq!(merged.split, Split::Right);
    assert_eq!(merged.table, path_to_data.join("rho.txt"));
}

#[rstest]
fn test_missing_table_is_fatal(path_to_data: PathBuf) {
    let tempdir = tempfile::tempdir().unwrap();
    let mut config = config(&path_to_data, tempdir.path().join("o.tsv"), None);
    config.table = Some(path_to_data.join("does_not_exist.txt"));

    let result = run_proximal(&config.validate().unwrap(), &ProgressBar::hidden());
    assert!(matches!(result, Err(ProximalError::Table(_))));
}

#[rstest]
fn test_toml_table_is_relative_to_config_file(path_to_data: PathBuf) {
    let from_file = ProximalConfig::try_from(path_to_data.join("proximal.toml").as_path()).unwrap();
    assert_eq!(from_file.table, Some(path_to_data.join("rho.txt")));

    let tempdir = tempfile::tempdir().unwrap();
    let outfile = tempdir.path().join("proximal.tsv");
    let cli = ProximalConfig {
        fname: Some(path_to_data.join("tracts.tsv").to_string_lossy().to_string()),
        outfile: Some(outfile.clone()),
        ..Default::default()
    };

    let config = from_file.merge(cli).validate().unwrap();
    let summary = run_proximal(&config, &ProgressBar::hidden()).unwrap();

    assert_eq!(summary.written, 3);
    assert_eq!(
        read_output(&outfile)[2],
        "chr1\t0\t3000\t3000\t1.5\t2\t0.75\t9.0\t4\t2.25\t2000"
    );
}
