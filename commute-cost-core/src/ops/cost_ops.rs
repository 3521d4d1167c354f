use crate::model::{validation, ModeTable, SimulatedMode};
use crate::CommuteCostError;

/// days beyond which a monthly commute is considered implausible
const MAX_RECOMMENDED_DAYS_PER_MONTH: u32 = 31;

/// projects a monthly cost for commuting a one-way distance on each commuting
/// day, counting a return trip per day.
///
/// # Arguments
///
/// * `cost_per_km` - rate for the transport mode, non-negative
/// * `trip_distance_km` - one-way trip distance, positive
/// * `days_per_month` - commuting days in the month, positive
///
/// # Returns
///
/// `cost_per_km * trip_distance_km * 2 * days_per_month`, or an
/// [`CommuteCostError::InvalidArgument`] when an input is out of range or the
/// product overflows.
pub fn simulate_monthly_cost(
    cost_per_km: f64,
    trip_distance_km: f64,
    days_per_month: u32,
) -> Result<f64, CommuteCostError> {
    let cost_per_km = validation::non_negative("cost per km", cost_per_km)?;
    let trip_distance_km = validation::positive("trip distance (km)", trip_distance_km)?;
    if days_per_month == 0 {
        return Err(CommuteCostError::invalid_argument(
            "days per month must be greater than zero",
        ));
    }
    if days_per_month > MAX_RECOMMENDED_DAYS_PER_MONTH {
        log::warn!(
            "simulating {days_per_month} commuting days per month, more than the {MAX_RECOMMENDED_DAYS_PER_MONTH} days in any month"
        );
    }
    let monthly_cost = cost_per_km * trip_distance_km * 2.0 * days_per_month as f64;
    validation::non_negative("simulated monthly cost", monthly_cost)
}

/// runs [`simulate_monthly_cost`] for each mode of a table, in table order.
pub fn simulate_table(
    table: &ModeTable,
    trip_distance_km: f64,
    days_per_month: u32,
) -> Result<Vec<SimulatedMode>, CommuteCostError> {
    table
        .iter()
        .map(|mode| {
            let simulated_monthly_cost =
                simulate_monthly_cost(mode.cost_per_km, trip_distance_km, days_per_month)?;
            log::debug!(
                "{} simulated monthly cost: {simulated_monthly_cost:.2}",
                mode.name
            );
            Ok(SimulatedMode {
                mode: mode.clone(),
                simulated_monthly_cost,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_data;

    #[test]
    fn test_matches_formula() {
        let rates = [0.0, 0.9, 13.0 / 15.0, 7.5];
        let distances = [0.5, 1.0, 15.0, 60.0];
        let days = [1, 10, 22, 30];
        for c in rates {
            for d in distances {
                for n in days {
                    let result = simulate_monthly_cost(c, d, n).unwrap();
                    assert_eq!(result, c * d * 2.0 * n as f64);
                }
            }
        }
    }

    #[test]
    fn test_monotonic_in_each_argument() {
        let base = simulate_monthly_cost(2.0, 10.0, 20).unwrap();
        assert!(simulate_monthly_cost(2.5, 10.0, 20).unwrap() >= base);
        assert!(simulate_monthly_cost(2.0, 12.0, 20).unwrap() >= base);
        assert!(simulate_monthly_cost(2.0, 10.0, 21).unwrap() >= base);
        // a zero rate stays flat
        assert_eq!(
            simulate_monthly_cost(0.0, 10.0, 20),
            simulate_monthly_cost(0.0, 50.0, 30)
        );
    }

    #[test]
    fn test_invalid_arguments() {
        let cases = [
            (-1.0, 10.0, 22),
            (1.0, 0.0, 22),
            (1.0, -5.0, 22),
            (1.0, f64::NAN, 22),
            (f64::INFINITY, 10.0, 22),
            (1.0, 10.0, 0),
        ];
        for (c, d, n) in cases {
            let result = simulate_monthly_cost(c, d, n);
            assert!(
                matches!(result, Err(CommuteCostError::InvalidArgument(_))),
                "({c}, {d}, {n}) should be invalid, found {result:?}"
            );
        }
    }

    #[test]
    fn test_overflowing_cost_rejected() {
        let result = simulate_monthly_cost(1e300, 1e300, 22);
        assert!(matches!(result, Err(CommuteCostError::InvalidArgument(_))));
    }

    #[test]
    fn test_simulate_table() {
        let table = sample_data::two_city_modes().filter_city("Pretoria");
        let rows = simulate_table(&table, 15.0, 22).unwrap();
        assert_eq!(rows.len(), table.len());
        let metrobus = rows.iter().find(|r| r.mode.name == "MetroBus").unwrap();
        assert!((metrobus.simulated_monthly_cost - 0.9 * 15.0 * 2.0 * 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_simulate_table_rejects_zero_distance() {
        let table = sample_data::gauteng_modes();
        assert!(simulate_table(&table, 0.0, 22).is_err());
    }
}
