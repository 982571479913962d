//! Read-only lookup of puzzle inputs on disk

use crate::error::InputError;
use std::fs;
use std::path::{Path, PathBuf};

/// Where puzzle inputs come from
///
/// Directory layout: `{input_dir}/{year}/input-{day}.txt`
#[derive(Debug, Clone)]
pub enum InputSource {
    /// One file per year/day under a root directory
    Dir(PathBuf),
    /// A single explicit file, used for whichever solver is selected
    File(PathBuf),
}

impl InputSource {
    /// Path the input for year/day is read from
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match self {
            InputSource::Dir(root) => root
                .join(year.to_string())
                .join(format!("input-{}.txt", day)),
            InputSource::File(path) => path.clone(),
        }
    }

    /// Check if the input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Load the input for year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        if !path.is_file() {
            return Err(InputError::Missing { year, day, path });
        }
        read_file(&path)
    }
}

fn read_file(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}
