use serde_json::Value;
use tracing::{info, instrument};

use crate::aggregator;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::fixtures::FixtureStore;
use crate::model::{Innings, LiveView, Match, Player, Team};
use crate::remote::RemoteApi;

/// Where the data service reads from. Fixed for the life of the process.
#[derive(Debug, Clone)]
pub enum Source {
    Fixtures(&'static FixtureStore),
    Remote(RemoteApi),
}

/// One entry point for every entity, whichever source is configured.
///
/// Both branches return the same typed shapes. Not found is `Ok(None)` (or an
/// empty list); a failed fetch is an `Err` and is never retried here.
#[derive(Debug, Clone)]
pub struct DataService {
    source: Source,
}

impl DataService {
    pub fn new(source: Source) -> Self {
        Self { source }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let source = if config.use_mock_data {
            Source::Fixtures(FixtureStore::embedded()?)
        } else {
            Source::Remote(RemoteApi::new(config.base_url.clone(), config.api_key.clone()))
        };
        info!(source = source.label(), "Data service ready");
        Ok(Self { source })
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn teams(&self) -> Result<Vec<Team>> {
        match &self.source {
            Source::Fixtures(store) => Ok(store.teams().to_vec()),
            Source::Remote(api) => api.get_all("teams"),
        }
    }

    pub fn team(&self, id: &str) -> Result<Option<Team>> {
        match &self.source {
            Source::Fixtures(store) => Ok(store.team(id).cloned()),
            Source::Remote(api) => api.get_by_id("teams", id),
        }
    }

    pub fn players(&self) -> Result<Vec<Player>> {
        match &self.source {
            Source::Fixtures(store) => Ok(store.players().to_vec()),
            Source::Remote(api) => api.get_all("players"),
        }
    }

    pub fn player(&self, id: &str) -> Result<Option<Player>> {
        match &self.source {
            Source::Fixtures(store) => Ok(store.player(id).cloned()),
            Source::Remote(api) => api.get_by_id("players", id),
        }
    }

    pub fn matches(&self) -> Result<Vec<Match>> {
        match &self.source {
            Source::Fixtures(store) => Ok(store.matches().to_vec()),
            Source::Remote(api) => api.get_all("matches"),
        }
    }

    pub fn match_by_id(&self, id: &str) -> Result<Option<Match>> {
        match &self.source {
            Source::Fixtures(store) => Ok(store.match_by_id(id).cloned()),
            Source::Remote(api) => api.get_by_id("matches", id),
        }
    }

    pub fn innings_for_match(&self, match_id: &str) -> Result<Vec<Innings>> {
        match &self.source {
            Source::Fixtures(store) => Ok(store.innings_for_match(match_id).into_iter().cloned().collect()),
            Source::Remote(api) => Ok(api
                .get_nested::<Vec<Innings>>("matches", match_id, "innings")?
                .unwrap_or_default()),
        }
    }

    #[instrument(level = "info", skip(self))]
    pub fn live_view(&self, match_id: &str) -> Result<Option<LiveView>> {
        match &self.source {
            Source::Fixtures(store) => Ok(aggregator::assemble_live_view(store, match_id)),
            Source::Remote(api) => api.get_by_id("live", match_id),
        }
    }

    /// The live view as untyped JSON, for callers that only pick a few fields.
    pub fn live_view_raw(&self, match_id: &str) -> Result<Option<Value>> {
        match &self.source {
            Source::Fixtures(store) => aggregator::assemble_live_view(store, match_id)
                .map(|view| {
                    serde_json::to_value(view).map_err(|source| Error::Decode {
                        what: "live view".to_string(),
                        source,
                    })
                })
                .transpose(),
            Source::Remote(api) => api.get_by_id("live", match_id),
        }
    }
}

impl Source {
    pub fn label(&self) -> &'static str {
        match self {
            Source::Fixtures(_) => "fixtures",
            Source::Remote(_) => "remote",
        }
    }
}
