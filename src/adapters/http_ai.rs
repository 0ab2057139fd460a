//! HTTP implementation of the move source port.
//!
//! This adapter talks to the AI services with blocking JSON POSTs via
//! ureq. One endpoint URL is configured per strategy.

use std::time::Duration;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    Result,
    connect4::ConnectFour,
    engine::Engine,
    error::Error,
    ports::MoveSource,
    tictactoe::TicTacToe,
    types::Strategy,
    wire::{ConnectFourRequest, ConnectFourResponse, TicTacToeRequest, TicTacToeResponse},
};

/// Endpoint URL for each AI strategy of one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub rule_based: String,
    pub q_learning: String,
}

impl Endpoints {
    /// Endpoints served on `host` at the given ports under `path`
    pub fn local(host: &str, rule_based_port: u16, q_learning_port: u16, path: &str) -> Self {
        Self {
            rule_based: format!("http://{host}:{rule_based_port}{path}"),
            q_learning: format!("http://{host}:{q_learning_port}{path}"),
        }
    }

    /// Default tic-tac-toe services (`/get_move` on ports 5000/5001)
    pub fn tictactoe_default() -> Self {
        Self::local("localhost", 5000, 5001, "/get_move")
    }

    /// Default connect-four services (`/ai-move` on ports 4000/4001)
    pub fn connect4_default() -> Self {
        Self::local("localhost", 4000, 4001, "/ai-move")
    }

    pub fn url_for(&self, strategy: Strategy) -> &str {
        match strategy {
            Strategy::RuleBased => &self.rule_based,
            Strategy::QLearning => &self.q_learning,
        }
    }
}

/// Blocking HTTP client for the remote AI services.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
///
/// use arcade::{
///     adapters::{Endpoints, HttpAiClient},
///     session::Session,
///     tictactoe::TicTacToe,
///     types::{PlayerType, Strategy},
/// };
///
/// let mut client = HttpAiClient::new(Endpoints::tictactoe_default(), Duration::from_secs(5));
/// let mut session = Session::<TicTacToe>::new()
///     .with_seats(PlayerType::Ai(Strategy::RuleBased), PlayerType::Human);
/// let report = session.ai_move(&mut client)?;
/// println!("AI played {}", report.input);
/// # Ok::<(), arcade::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct HttpAiClient {
    agent: ureq::Agent,
    endpoints: Endpoints,
}

impl HttpAiClient {
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn post<Req: Serialize, Resp: DeserializeOwned>(&self, url: &str, body: &Req) -> Result<Resp> {
        let response = self
            .agent
            .post(url)
            .send_json(body)
            .map_err(|e| transport(url, e.to_string()))?;

        response
            .into_json::<Resp>()
            .map_err(|e| transport(url, format!("malformed response body: {e}")))
    }
}

fn transport(endpoint: &str, message: impl Into<String>) -> Error {
    Error::AiTransport {
        endpoint: endpoint.to_string(),
        message: message.into(),
    }
}

impl MoveSource<TicTacToe> for HttpAiClient {
    fn request_move(&mut self, engine: &TicTacToe, strategy: Strategy) -> Result<usize> {
        let url = self.endpoints.url_for(strategy);
        let body = TicTacToeRequest::new(engine, strategy);
        debug!(%url, player = %body.player, %strategy, "requesting tic-tac-toe move");

        let response: TicTacToeResponse = self.post(url, &body)?;
        debug!(%url, ?response, "tic-tac-toe move received");

        response
            .position
            .ok_or_else(|| transport(url, "response carried no move"))
    }
}

impl MoveSource<ConnectFour> for HttpAiClient {
    fn request_move(&mut self, engine: &ConnectFour, strategy: Strategy) -> Result<usize> {
        let url = self.endpoints.url_for(strategy);
        let body = ConnectFourRequest::new(engine);
        debug!(%url, player = %body.player, %strategy, "requesting connect-four move");

        let response: ConnectFourResponse = self.post(url, &body)?;
        debug!(%url, ?response, "connect-four move received");

        let column = response
            .col
            .ok_or_else(|| transport(url, "response carried no column"))?;

        if let (Some(row), Some(landing)) = (response.row, engine.landing_row(column)) {
            if row != landing {
                warn!(%url, column, row, landing, "AI row disagrees with gravity, using column only");
            }
        }
        Ok(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints_match_service_ports() {
        let ttt = Endpoints::tictactoe_default();
        assert_eq!(ttt.url_for(Strategy::RuleBased), "http://localhost:5000/get_move");
        assert_eq!(ttt.url_for(Strategy::QLearning), "http://localhost:5001/get_move");

        let c4 = Endpoints::connect4_default();
        assert_eq!(c4.url_for(Strategy::RuleBased), "http://localhost:4000/ai-move");
        assert_eq!(c4.url_for(Strategy::QLearning), "http://localhost:4001/ai-move");
    }

    #[test]
    fn unreachable_service_is_a_transport_error() {
        // Port 9 (discard) on loopback is not expected to run an HTTP server
        let endpoints = Endpoints::local("127.0.0.1", 9, 9, "/get_move");
        let mut client = HttpAiClient::new(endpoints, Duration::from_millis(500));
        let err = MoveSource::<TicTacToe>::request_move(
            &mut client,
            &TicTacToe::new(),
            Strategy::RuleBased,
        )
        .unwrap_err();
        assert!(err.is_ai_transport());
    }
}
