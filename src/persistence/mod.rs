use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    debug,
    warn,
};

use crate::core::DashError;

const APP_NAME: &str = "amiibo-dash";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), DashError> {
    save_json_to(data, &get_data_file_path(filename))
}

pub fn save_json_to<T: Serialize>(data: &T, file_path: &Path) -> Result<(), DashError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(file_path, json)?;
    debug!(path = %file_path.display(), "data saved");
    Ok(())
}

pub fn load_json<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> Result<T, DashError> {
    load_json_from(&get_data_file_path(filename))
}

/// Missing files are not an error; they load as `T::default()`.
pub fn load_json_from<T: for<'de> Deserialize<'de> + Default>(
    file_path: &Path,
) -> Result<T, DashError> {
    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(file_path)?;
    let data: T = serde_json::from_str(&json)?;
    debug!(path = %file_path.display(), "data loaded");
    Ok(data)
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    match load_json::<T>(filename) {
        Ok(data) => data,
        Err(e) => {
            warn!(file = filename, error = %e, "failed to load, using defaults");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");

        let sample = Sample { name: "Mario".to_string(), count: 3 };
        save_json_to(&sample, &path).unwrap();

        let loaded: Sample = load_json_from(&path).unwrap();
        assert_eq!(loaded, sample);
    }

    #[test]
    fn missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Sample = load_json_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let result: Result<Sample, DashError> = load_json_from(&path);
        assert!(matches!(result, Err(DashError::Json(_))));
    }
}
