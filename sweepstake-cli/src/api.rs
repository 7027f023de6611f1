/// Jolpica/Ergast API client for driver standings and the race schedule.
use reqwest::Client;
use serde::Deserialize;
use sweepstake_core::{Entrant, RaceContext};

/// Current-season base URL of the Jolpica Ergast mirror.
pub const DEFAULT_BASE_URL: &str = "https://api.jolpi.ca/ergast/f1/current";

/// Settings for the two source fetches.
pub struct ApiConfig {
    pub base_url: String,
    /// Retries per fetch on HTTP/network failures. Payload problems
    /// (malformed JSON, non-numeric points) never retry.
    pub max_retries: usize,
    pub verbose: bool,
}

/// A failed fetch attempt. Transport failures are worth retrying,
/// payload failures are not — the server answered, the data is bad.
enum FetchFailure {
    Transport(String),
    Payload(String),
}

impl FetchFailure {
    fn is_retryable(&self) -> bool {
        matches!(self, FetchFailure::Transport(_))
    }

    fn into_message(self) -> String {
        match self {
            FetchFailure::Transport(msg) | FetchFailure::Payload(msg) => msg,
        }
    }
}

// --- Standings payload -----------------------------------------------------

#[derive(Debug, Deserialize)]
struct StandingsResponse {
    #[serde(rename = "MRData")]
    mr_data: StandingsData,
}

#[derive(Debug, Deserialize)]
struct StandingsData {
    #[serde(rename = "StandingsTable")]
    standings_table: StandingsTable,
}

#[derive(Debug, Deserialize)]
struct StandingsTable {
    #[serde(rename = "StandingsLists")]
    standings_lists: Vec<StandingsList>,
}

#[derive(Debug, Deserialize)]
struct StandingsList {
    #[serde(rename = "DriverStandings")]
    driver_standings: Vec<DriverStanding>,
}

#[derive(Debug, Deserialize)]
struct DriverStanding {
    #[serde(rename = "Driver")]
    driver: Driver,
    #[serde(rename = "Constructors")]
    constructors: Vec<Constructor>,
    /// Textual in the source; parsed to f64 before anything compares it.
    points: String,
}

#[derive(Debug, Deserialize)]
struct Driver {
    #[serde(rename = "givenName")]
    given_name: String,
    #[serde(rename = "familyName")]
    family_name: String,
}

#[derive(Debug, Deserialize)]
struct Constructor {
    name: String,
}

// --- Schedule payload ------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ScheduleResponse {
    #[serde(rename = "MRData")]
    mr_data: ScheduleData,
}

#[derive(Debug, Deserialize)]
struct ScheduleData {
    #[serde(rename = "RaceTable")]
    race_table: RaceTable,
}

#[derive(Debug, Deserialize)]
struct RaceTable {
    #[serde(rename = "Races")]
    races: Vec<Race>,
}

#[derive(Debug, Deserialize)]
struct Race {
    #[serde(rename = "raceName")]
    race_name: String,
    round: String,
}

// --- Conversion ------------------------------------------------------------

/// The first standings list is authoritative; entrants arrive pre-ranked.
/// A non-numeric points value is a data-integrity error, not a zero.
fn convert_standings(response: StandingsResponse) -> Result<Vec<Entrant>, String> {
    let list = response
        .mr_data
        .standings_table
        .standings_lists
        .into_iter()
        .next()
        .ok_or("Standings response contains no standings lists")?;

    list.driver_standings
        .into_iter()
        .map(|standing| {
            let points: f64 = standing.points.parse().map_err(|_| {
                format!(
                    "Invalid points value \"{}\" for {}",
                    standing.points, standing.driver.family_name
                )
            })?;
            let team = standing
                .constructors
                .into_iter()
                .next()
                .map(|c| c.name)
                .unwrap_or_default();
            Ok(Entrant {
                given_name: standing.driver.given_name,
                family_name: standing.driver.family_name,
                team,
                points,
            })
        })
        .collect()
}

/// The first race in the schedule response is the next scheduled event.
fn convert_race(response: ScheduleResponse) -> Result<RaceContext, String> {
    let race = response
        .mr_data
        .race_table
        .races
        .into_iter()
        .next()
        .ok_or("Race response contains no races")?;

    let round: u32 = race
        .round
        .parse()
        .map_err(|_| format!("Invalid round number \"{}\" for {}", race.round, race.race_name))?;

    Ok(RaceContext {
        name: race.race_name,
        round,
    })
}

// --- Fetching --------------------------------------------------------------

async fn get_json<T: serde::de::DeserializeOwned>(
    client: &Client,
    url: &str,
    label: &str,
) -> Result<T, FetchFailure> {
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchFailure::Transport(format!("Failed to fetch {label}: {e}")))?;

    if !resp.status().is_success() {
        let status = resp.status();
        return Err(FetchFailure::Transport(format!(
            "Failed to fetch {label}: HTTP {status}"
        )));
    }

    resp.json()
        .await
        .map_err(|e| FetchFailure::Payload(format!("Failed to parse {label} JSON: {e}")))
}

/// Retry a fetch on transport failures, with a 1-second delay between
/// attempts. Payload failures return immediately.
async fn with_retries<T, F, Fut>(config: &ApiConfig, label: &str, mut attempt_fn: F) -> Result<T, String>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, FetchFailure>>,
{
    let mut last_err = None;
    for attempt in 0..=config.max_retries {
        match attempt_fn().await {
            Ok(value) => return Ok(value),
            Err(failure) => {
                if !failure.is_retryable() {
                    return Err(failure.into_message());
                }
                let msg = failure.into_message();
                if attempt < config.max_retries {
                    if config.verbose {
                        eprintln!(
                            "  Retry {}/{} for {label}: {msg}",
                            attempt + 1,
                            config.max_retries
                        );
                    }
                    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                }
                last_err = Some(msg);
            }
        }
    }
    Err(last_err.unwrap_or_else(|| format!("Failed to fetch {label}")))
}

/// Fetch the current driver standings, converted to entrants.
pub async fn fetch_standings(client: &Client, config: &ApiConfig) -> Result<Vec<Entrant>, String> {
    let url = format!("{}/driverStandings/", config.base_url.trim_end_matches('/'));
    let response: StandingsResponse =
        with_retries(config, "driver standings", || get_json(client, &url, "driver standings")).await?;
    convert_standings(response)
}

/// Fetch the next scheduled race's name and round number.
pub async fn fetch_next_race(client: &Client, config: &ApiConfig) -> Result<RaceContext, String> {
    let url = format!("{}/next/races/", config.base_url.trim_end_matches('/'));
    let response: ScheduleResponse =
        with_retries(config, "next race data", || get_json(client, &url, "next race data")).await?;
    convert_race(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDINGS_FIXTURE: &str = r#"{
        "MRData": {
            "StandingsTable": {
                "StandingsLists": [{
                    "DriverStandings": [
                        {
                            "Driver": {"givenName": "Max", "familyName": "Verstappen"},
                            "Constructors": [{"name": "Red Bull"}],
                            "points": "255"
                        },
                        {
                            "Driver": {"givenName": "Lando", "familyName": "Norris"},
                            "Constructors": [{"name": "McLaren"}],
                            "points": "241.5"
                        }
                    ]
                }]
            }
        }
    }"#;

    const SCHEDULE_FIXTURE: &str = r#"{
        "MRData": {
            "RaceTable": {
                "Races": [
                    {"raceName": "Dutch Grand Prix", "round": "15"},
                    {"raceName": "Italian Grand Prix", "round": "16"}
                ]
            }
        }
    }"#;

    #[test]
    fn test_standings_deserialization_and_conversion() {
        let response: StandingsResponse = serde_json::from_str(STANDINGS_FIXTURE).unwrap();
        let entrants = convert_standings(response).unwrap();
        assert_eq!(entrants.len(), 2);
        assert_eq!(entrants[0].family_name, "Verstappen");
        assert_eq!(entrants[0].team, "Red Bull");
        assert_eq!(entrants[0].points, 255.0);
        // Half-points parse as decimals, not integers.
        assert_eq!(entrants[1].points, 241.5);
    }

    #[test]
    fn test_non_numeric_points_is_an_error() {
        let bad = STANDINGS_FIXTURE.replace("\"255\"", "\"n/a\"");
        let response: StandingsResponse = serde_json::from_str(&bad).unwrap();
        let err = convert_standings(response).unwrap_err();
        assert!(err.contains("Invalid points value"), "got: {err}");
        assert!(err.contains("Verstappen"));
    }

    #[test]
    fn test_first_race_is_authoritative() {
        let response: ScheduleResponse = serde_json::from_str(SCHEDULE_FIXTURE).unwrap();
        let race = convert_race(response).unwrap();
        assert_eq!(race.name, "Dutch Grand Prix");
        assert_eq!(race.round, 15);
    }

    #[test]
    fn test_empty_standings_lists_is_an_error() {
        let empty = r#"{"MRData": {"StandingsTable": {"StandingsLists": []}}}"#;
        let response: StandingsResponse = serde_json::from_str(empty).unwrap();
        assert!(convert_standings(response).is_err());
    }

    #[test]
    fn test_bad_round_is_an_error() {
        let bad = SCHEDULE_FIXTURE.replace("\"15\"", "\"soon\"");
        let response: ScheduleResponse = serde_json::from_str(&bad).unwrap();
        let err = convert_race(response).unwrap_err();
        assert!(err.contains("Invalid round number"));
    }
}
