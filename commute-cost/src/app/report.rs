//! plain-text listings printed by the command line tool.
use commute_cost_core::model::{FareTable, Hub, ModeField, SimulatedMode, TransportMode};
use commute_cost_core::ops::FareQuote;
use itertools::Itertools;

fn label(mode: &TransportMode) -> String {
    match mode.city() {
        Some(city) => format!("{} ({city})", mode.name),
        None => mode.name.clone(),
    }
}

/// one line per mode with every numeric column, in the given order
pub fn mode_listing(rows: &[&TransportMode], sort_field: ModeField) -> String {
    let header = format!(
        "{:<28}{:>12}{:>12}{:>14}{:>10}   (sorted by {sort_field})",
        "mode", "per trip", "per km", "monthly", "minutes"
    );
    let lines = rows.iter().map(|m| {
        format!(
            "{:<28}{:>12.2}{:>12.2}{:>14.2}{:>10.0}",
            label(m),
            m.cost_per_trip,
            m.cost_per_km,
            m.monthly_cost,
            m.travel_time_minutes
        )
    });
    std::iter::once(header).chain(lines).join("\n")
}

/// simulated monthly costs, most expensive first
pub fn simulation_listing(
    rows: &[SimulatedMode],
    trip_distance_km: f64,
    days_per_month: u32,
) -> String {
    let header = format!(
        "simulated monthly cost: {trip_distance_km} km per trip x {days_per_month} days (return trips)"
    );
    let lines = rows
        .iter()
        .sorted_by(|a, b| b.simulated_monthly_cost.total_cmp(&a.simulated_monthly_cost))
        .map(|r| format!("{:<28}{:>14.2}", label(&r.mode), r.simulated_monthly_cost));
    std::iter::once(header).chain(lines).join("\n")
}

pub fn fare_quote_summary(quote: &FareQuote) -> String {
    format!(
        "{} -> {}\ndistance: {} km\nestimated {} fare: R{:.2}",
        quote.origin, quote.destination, quote.distance_km, quote.car_type, quote.fare
    )
}

pub fn hub_listing(hubs: &[Hub], fare_table: &FareTable) -> String {
    let hub_lines = hubs.iter().map(|h| {
        format!(
            "  {:<24}{:>10.4}{:>10.4}",
            h.name,
            h.coordinate.lat(),
            h.coordinate.lon()
        )
    });
    let tier_lines = fare_table.iter().map(|(name, tier)| {
        format!(
            "  {name:<24}base {:.2}, per km {:.2}",
            tier.base, tier.per_km
        )
    });
    std::iter::once(String::from("hubs:"))
        .chain(hub_lines)
        .chain(std::iter::once(String::from("fare tiers:")))
        .chain(tier_lines)
        .join("\n")
}
