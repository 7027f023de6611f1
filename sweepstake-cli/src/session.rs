/// Fetch-once session controller.
///
/// The two source fetches are issued concurrently and joined: nothing
/// proceeds until both succeed, and either failure fails the whole load
/// with a single message. A session that has loaded once never refetches
/// until it is explicitly reset, so repeated draw triggers neither hit
/// the network again nor re-randomize the result.
use reqwest::Client;
use sweepstake_core::{Entrant, RaceContext};

use crate::api::{self, ApiConfig};

/// Both payloads from one successful joint fetch.
#[derive(Debug, Clone)]
pub struct SourceData {
    pub standings: Vec<Entrant>,
    pub race: RaceContext,
}

/// Load lifecycle. Transitions: Idle -> Loading -> Loaded | Failed.
/// The only way out of Loaded is [`Session::reset`].
#[derive(Debug)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded(SourceData),
    Failed(String),
}

#[derive(Debug)]
pub struct Session {
    state: LoadState,
}

impl Session {
    pub fn new() -> Self {
        Session {
            state: LoadState::Idle,
        }
    }

    #[cfg(test)]
    fn loaded_with(data: SourceData) -> Self {
        Session {
            state: LoadState::Loaded(data),
        }
    }

    #[allow(dead_code)]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Fetch both sources, or return the already-loaded data.
    ///
    /// A `Failed` session may try again on the next call; a `Loaded` one
    /// is served from memory.
    pub async fn load(&mut self, client: &Client, config: &ApiConfig) -> Result<SourceData, String> {
        if let LoadState::Loaded(data) = &self.state {
            return Ok(data.clone());
        }

        self.state = LoadState::Loading;
        match tokio::try_join!(
            api::fetch_standings(client, config),
            api::fetch_next_race(client, config),
        ) {
            Ok((standings, race)) => {
                let data = SourceData { standings, race };
                self.state = LoadState::Loaded(data.clone());
                Ok(data)
            }
            Err(message) => {
                self.state = LoadState::Failed(message.clone());
                Err(message)
            }
        }
    }

    /// Explicit transition back to `Idle`, for a future reshuffle
    /// trigger. Nothing else leaves the `Loaded` state.
    #[allow(dead_code)]
    pub fn reset(&mut self) {
        self.state = LoadState::Idle;
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> SourceData {
        SourceData {
            standings: vec![Entrant::new("Max", "Verstappen", "Red Bull", 255.0)],
            race: RaceContext {
                name: "Dutch Grand Prix".to_string(),
                round: 15,
            },
        }
    }

    fn unreachable_config() -> ApiConfig {
        ApiConfig {
            // Nothing listens here; any real fetch attempt fails fast.
            base_url: "http://127.0.0.1:9".to_string(),
            max_retries: 0,
            verbose: false,
        }
    }

    #[tokio::test]
    async fn test_loaded_session_does_not_refetch() {
        let mut session = Session::loaded_with(sample_data());
        let client = Client::new();
        let data = session.load(&client, &unreachable_config()).await.unwrap();
        assert_eq!(data.race.round, 15);
        assert_eq!(data.standings.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_load_records_message() {
        let mut session = Session::new();
        let client = Client::new();
        let err = session.load(&client, &unreachable_config()).await.unwrap_err();
        assert!(err.contains("Failed to fetch"), "got: {err}");
        assert!(matches!(session.state(), LoadState::Failed(_)));
    }

    #[tokio::test]
    async fn test_reset_leaves_loaded_state() {
        let mut session = Session::loaded_with(sample_data());
        session.reset();
        assert!(matches!(session.state(), LoadState::Idle));
    }
}
