use crate::app::CommuteAppError;
use commute_cost_core::model::{
    ModeTable, SimulatedMode, TransportMode, CITY_COLUMN, COST_PER_KM_COLUMN,
    COST_PER_TRIP_COLUMN, MODE_COLUMN, MONTHLY_COST_COLUMN, SIMULATED_MONTHLY_COST_COLUMN,
    TRAVEL_TIME_COLUMN,
};
use csv::StringRecord;
use std::{fs::File, io::Write, path::Path};

/// writes a table of transport modes as CSV. the City column is only
/// written when at least one mode has a city.
pub fn write_modes<W: Write>(writer: W, table: &ModeTable) -> Result<(), CommuteAppError> {
    let include_city = table.has_cities();
    write_rows(writer, table.iter().map(|m| (m, None)), include_city, false)
}

/// writes simulated modes as CSV with a trailing simulated monthly cost column.
pub fn write_simulation<W: Write>(
    writer: W,
    rows: &[SimulatedMode],
) -> Result<(), CommuteAppError> {
    let include_city = rows.iter().any(|r| r.mode.city.is_some());
    let records = rows
        .iter()
        .map(|r| (&r.mode, Some(r.simulated_monthly_cost)));
    write_rows(writer, records, include_city, true)
}

pub fn write_simulation_to_path(
    filepath: &Path,
    rows: &[SimulatedMode],
) -> Result<(), CommuteAppError> {
    let file = File::create(filepath)?;
    write_simulation(file, rows)?;
    log::info!(
        "wrote {} simulated transport modes to {}",
        rows.len(),
        filepath.to_string_lossy()
    );
    Ok(())
}

fn write_rows<'a, W, I>(
    writer: W,
    rows: I,
    include_city: bool,
    include_simulated: bool,
) -> Result<(), CommuteAppError>
where
    W: Write,
    I: Iterator<Item = (&'a TransportMode, Option<f64>)>,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    let mut header = StringRecord::new();
    if include_city {
        header.push_field(CITY_COLUMN);
    }
    for column in [
        MODE_COLUMN,
        COST_PER_TRIP_COLUMN,
        COST_PER_KM_COLUMN,
        MONTHLY_COST_COLUMN,
        TRAVEL_TIME_COLUMN,
    ] {
        header.push_field(column);
    }
    if include_simulated {
        header.push_field(SIMULATED_MONTHLY_COST_COLUMN);
    }
    wtr.write_record(&header)?;

    for (mode, simulated) in rows {
        let mut out = StringRecord::new();
        if include_city {
            out.push_field(mode.city().unwrap_or_default());
        }
        out.push_field(&mode.name);
        for value in [
            mode.cost_per_trip,
            mode.cost_per_km,
            mode.monthly_cost,
            mode.travel_time_minutes,
        ] {
            out.push_field(&value.to_string());
        }
        if include_simulated {
            let value = simulated.map(|v| v.to_string()).unwrap_or_default();
            out.push_field(&value);
        }
        wtr.write_record(&out)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::read_modes;
    use commute_cost_core::model::sample_data;
    use commute_cost_core::ops;

    fn write_to_string<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), CommuteAppError>,
    {
        let mut buffer: Vec<u8> = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_without_city() {
        let table = sample_data::gauteng_modes();
        let out = write_to_string(|b| write_modes(b, &table));
        let mut lines = out.lines();
        assert_eq!(
            lines.next(),
            Some("Mode,Avg Cost per Trip (ZAR),Cost per km (ZAR/km),Avg Monthly Cost (ZAR),Avg Travel Time (min)")
        );
        assert_eq!(lines.next(), Some("Minibus Taxi,13,0.8666666666666667,572,63"));
        assert_eq!(out.lines().count(), 9);
    }

    #[test]
    fn test_simulation_header_with_city() {
        let table = sample_data::two_city_modes().filter_city("Johannesburg");
        let rows = ops::simulate_table(&table, 10.0, 20).unwrap();
        let out = write_to_string(|b| write_simulation(b, &rows));
        let mut lines = out.lines();
        assert_eq!(
            lines.next(),
            Some("City,Mode,Avg Cost per Trip (ZAR),Cost per km (ZAR/km),Avg Monthly Cost (ZAR),Avg Travel Time (min),Simulated Monthly Cost (ZAR)")
        );
        let first = lines.next().unwrap();
        assert!(first.starts_with("Johannesburg,Minibus Taxi,13,0.8666666666666667,572,63,"));
        let simulated: f64 = first.rsplit(',').next().unwrap().parse().unwrap();
        assert!((simulated - 13.0 / 15.0 * 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_exported_table_reads_back() {
        let table = sample_data::two_city_modes();
        let out = write_to_string(|b| write_modes(b, &table));
        let read = read_modes(out.as_bytes(), "export").unwrap();
        assert_eq!(read, table);
    }

    #[test]
    fn test_exported_simulation_reads_back_as_modes() {
        let table = sample_data::gauteng_modes();
        let rows = ops::simulate_table(&table, 15.0, 22).unwrap();
        let out = write_to_string(|b| write_simulation(b, &rows));
        let read = read_modes(out.as_bytes(), "export").unwrap();
        assert_eq!(read, table);
    }
}
