use crate::app::CommuteAppError;
use commute_cost_core::model::{sample_data, ModeTable, TransportMode};
use std::{fs::File, io::Read, path::Path};

/// reads transport modes from CSV. each row is validated while it is
/// deserialized, and the table is checked for duplicate modes.
///
/// # Arguments
///
/// * `reader` - CSV source with a header row
/// * `source_name` - name of the source used in error messages
pub fn read_modes<R: Read>(reader: R, source_name: &str) -> Result<ModeTable, CommuteAppError> {
    let load_error = |msg: String| CommuteAppError::DataLoadError {
        filepath: source_name.to_string(),
        msg,
    };
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut modes = Vec::new();
    for (row_idx, result) in rdr.deserialize::<TransportMode>().enumerate() {
        let mode = result.map_err(|e| load_error(format!("row {row_idx}: {e}")))?;
        log::debug!("read transport mode '{}' from {source_name}", mode.name);
        modes.push(mode);
    }
    if modes.is_empty() {
        return Err(load_error(String::from("no transport modes found")));
    }
    ModeTable::try_new(modes).map_err(|e| load_error(e.to_string()))
}

pub fn read_modes_from_path(filepath: &Path) -> Result<ModeTable, CommuteAppError> {
    let filepath_str = filepath.to_string_lossy().to_string();
    let is_csv = filepath
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(CommuteAppError::DataLoadError {
            filepath: filepath_str,
            msg: String::from("unsupported file type, expected a .csv file"),
        });
    }
    let file = File::open(filepath).map_err(|e| CommuteAppError::DataLoadError {
        filepath: filepath_str.clone(),
        msg: e.to_string(),
    })?;
    read_modes(file, &filepath_str)
}

/// loads the modes at `filepath`, falling back to the built-in two-city
/// dataset when no file is given or the file cannot be loaded.
pub fn load_or_default(filepath: Option<&str>) -> ModeTable {
    match filepath {
        None => {
            log::info!("using built-in two-city transport modes");
            sample_data::two_city_modes()
        }
        Some(f) => match read_modes_from_path(Path::new(f)) {
            Ok(table) => {
                log::info!("loaded {} transport modes from {f}", table.len());
                table
            }
            Err(e) => {
                log::error!("{e}");
                log::warn!("falling back to built-in two-city transport modes");
                sample_data::two_city_modes()
            }
        },
    }
}
