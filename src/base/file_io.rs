use super::CptError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Reads a JSON file into any deserializable structure
///
/// # Input
///
/// * `full_path` -- may be a String, &str, or Path
pub fn read_json<T, P>(full_path: &P) -> Result<T, CptError>
where
    T: DeserializeOwned,
    P: AsRef<OsStr> + ?Sized,
{
    let path = Path::new(full_path).to_path_buf();
    let file = File::open(path)?;
    let buffered = BufReader::new(file);
    let data = serde_json::from_reader(buffered)?;
    Ok(data)
}

/// Writes any serializable structure to a (pretty) JSON file
///
/// The parent directory is created if it does not exist.
///
/// # Input
///
/// * `full_path` -- may be a String, &str, or Path
pub fn write_json<T, P>(data: &T, full_path: &P) -> Result<(), CptError>
where
    T: Serialize,
    P: AsRef<OsStr> + ?Sized,
{
    let path = Path::new(full_path).to_path_buf();
    if let Some(p) = path.parent() {
        fs::create_dir_all(p)?;
    }
    let file = File::create(&path)?;
    let mut buffered = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut buffered, data)?;
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{read_json, write_json};
    use crate::base::{Config, CptError, DEFAULT_TEST_DIR};

    #[test]
    fn read_and_write_work() -> Result<(), CptError> {
        let mut config = Config::new();
        config.set_water_table_depth(4.0)?;
        let path = format!("{}/config_read_and_write_works.json", DEFAULT_TEST_DIR);
        write_json(&config, &path)?;
        let read: Config = read_json(&path)?;
        assert_eq!(read, config);
        Ok(())
    }

    #[test]
    fn read_captures_errors() {
        let res: Result<Config, CptError> = read_json("/tmp/cptsim/__does_not_exist__.json");
        assert!(matches!(res, Err(CptError::Io(..))));
    }
}
