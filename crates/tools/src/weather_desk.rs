//! Weather desk tool — looks up curated weather snapshots.
//!
//! The snapshot table is hand-authored and read-only for the life of
//! the process; nothing here touches the network. Lookups are
//! case-insensitive, so the classifier can pass cities exactly as the
//! user typed them.

use toolpilot_core::error::ToolError;
use toolpilot_core::tool::{Tool, ToolOutput};

const REASONING: &str = "Matched the city name against the curated weather snapshot table.";

/// One curated snapshot: canonical city name, temperature in °C,
/// condition, and the as-of label shown to the user.
struct Snapshot {
    city: &'static str,
    temperature_c: f64,
    condition: &'static str,
    as_of: &'static str,
}

static SNAPSHOTS: &[Snapshot] = &[
    Snapshot { city: "London", temperature_c: 14.0, condition: "overcast with light drizzle", as_of: "this morning" },
    Snapshot { city: "Paris", temperature_c: 17.0, condition: "partly cloudy", as_of: "this morning" },
    Snapshot { city: "Tokyo", temperature_c: 22.0, condition: "clear skies", as_of: "this evening" },
    Snapshot { city: "New York", temperature_c: 19.0, condition: "sunny with a light breeze", as_of: "midday" },
    Snapshot { city: "Sydney", temperature_c: 24.0, condition: "warm and humid", as_of: "this afternoon" },
    Snapshot { city: "Berlin", temperature_c: 12.0, condition: "scattered showers", as_of: "this morning" },
    Snapshot { city: "Oslo", temperature_c: 7.0, condition: "crisp and clear", as_of: "this morning" },
    Snapshot { city: "San Francisco", temperature_c: 16.0, condition: "foggy near the bay", as_of: "midday" },
];

/// Canonical names of all cities in the snapshot table, in declaration
/// order. The classifier scans messages against this list.
pub fn known_cities() -> impl Iterator<Item = &'static str> {
    SNAPSHOTS.iter().map(|s| s.city)
}

pub struct WeatherDeskTool;

impl Tool for WeatherDeskTool {
    fn name(&self) -> &str {
        "weather_desk"
    }

    fn title(&self) -> &str {
        "Weather desk"
    }

    fn description(&self) -> &str {
        "Look up the curated weather snapshot for a known city. Returns temperature and conditions."
    }

    fn run(&self, argument: &str) -> Result<ToolOutput, ToolError> {
        let wanted = argument.trim();
        let snapshot = SNAPSHOTS
            .iter()
            .find(|s| s.city.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ToolError::UnknownLocation(wanted.to_string()))?;

        tracing::debug!(city = snapshot.city, "Weather snapshot matched");

        let output = format!(
            "As of {}, it's {}°C in {} with {}.",
            snapshot.as_of, snapshot.temperature_c, snapshot.city, snapshot.condition
        );
        Ok(ToolOutput::new(output, REASONING))
    }
}
