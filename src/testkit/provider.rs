use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{event::Event, odds::GameOdds, sport::Sport};
use crate::error::FetchError;
use crate::port::outbound::odds::{OddsProvider, OddsResponse, PropsRequest, ResponseMeta};

#[derive(Debug, Default)]
struct Script {
    events: VecDeque<Result<Vec<Event>, FetchError>>,
    props: VecDeque<Result<OddsResponse, FetchError>>,
    event_calls: Vec<Sport>,
    props_calls: Vec<PropsRequest>,
}

/// Deterministic test double for the odds provider.
///
/// Responses are returned in the order they were pushed. An exhausted
/// script answers with [`FetchError::Empty`].
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    script: Mutex<Script>,
}

impl ScriptedProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_events(&self, result: Result<Vec<Event>, FetchError>) -> &Self {
        self.script.lock().events.push_back(result);
        self
    }

    pub fn push_props(&self, result: Result<OddsResponse, FetchError>) -> &Self {
        self.script.lock().props.push_back(result);
        self
    }

    /// Queue a successful props response with default metadata.
    pub fn push_odds(&self, odds: GameOdds) -> &Self {
        self.push_props(Ok(OddsResponse {
            odds,
            meta: ResponseMeta::default(),
        }))
    }

    #[must_use]
    pub fn event_calls(&self) -> Vec<Sport> {
        self.script.lock().event_calls.clone()
    }

    #[must_use]
    pub fn props_calls(&self) -> Vec<PropsRequest> {
        self.script.lock().props_calls.clone()
    }
}

#[async_trait]
impl OddsProvider for ScriptedProvider {
    async fn events(&self, sport: Sport) -> Result<Vec<Event>, FetchError> {
        let mut script = self.script.lock();
        script.event_calls.push(sport);
        script.events.pop_front().unwrap_or(Err(FetchError::Empty))
    }

    async fn props(&self, request: &PropsRequest) -> Result<OddsResponse, FetchError> {
        let mut script = self.script.lock();
        script.props_calls.push(request.clone());
        script.props.pop_front().unwrap_or(Err(FetchError::Empty))
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}
