// Shared fixtures for integration tests
//
// Builds a throwaway results directory with qi__*.csv files.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary data directory plus an output directory
pub struct Workspace {
    pub root: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("data")).unwrap();
        Self { root }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }

    /// Output directory; not created, the run must create it
    pub fn tables_dir(&self) -> PathBuf {
        self.root.path().join("tables")
    }

    /// Write one result file, one value per record, blank-line separated
    pub fn write_result(
        &self,
        algo: &str,
        case_study: &str,
        millis: u64,
        qi: &str,
        values: &[f64],
    ) -> PathBuf {
        let name = format!("qi__{}-{}-bytime-{}__{}.csv", algo, case_study, millis, qi);
        self.write_raw(&name, &render_values(values))
    }

    /// Write an arbitrary file into the data directory
    pub fn write_raw(&self, name: &str, content: &str) -> PathBuf {
        let path = self.data_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read_table(&self, name: &str) -> String {
        fs::read_to_string(self.tables_dir().join(name)).unwrap()
    }

    pub fn table_exists(&self, name: &str) -> bool {
        self.tables_dir().join(name).exists()
    }
}

pub fn render_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{}\n", v))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Three HV files for nsgaii on train-ticket at 1, 2 and 3 minutes
pub fn three_budget_hv(ws: &Workspace) {
    for (step, millis) in [60_000u64, 120_000, 180_000].into_iter().enumerate() {
        let shift = step as f64;
        let values: Vec<f64> = [0.1, 0.2, 0.3, 0.4, 0.5]
            .iter()
            .map(|v| v + shift)
            .collect();
        ws.write_result("nsgaii", "train-ticket", millis, "HV", &values);
    }
}

pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
