//! Wiring of sessions, move sources and auto-play from configuration.

use crate::{
    adapters::{HttpAiClient, RandomMoves},
    app::config::{ArcadeConfig, GameConfig},
    autoplay::AutoPlay,
    connect4::ConnectFour,
    engine::Engine,
    ports::MoveSource,
    session::Session,
    tictactoe::TicTacToe,
    types::PlayerType,
};

/// A game type the app knows how to wire up.
pub trait ArcadeGame: Engine + Default + 'static {
    /// Human-readable name, also used in log fields
    const NAME: &'static str;

    /// This game's section of the configuration
    fn config(config: &ArcadeConfig) -> &GameConfig;

    /// Box the HTTP client as this game's move source
    fn http_source(client: HttpAiClient) -> Box<dyn MoveSource<Self>>;
}

impl ArcadeGame for TicTacToe {
    const NAME: &'static str = "tic-tac-toe";

    fn config(config: &ArcadeConfig) -> &GameConfig {
        &config.tictactoe
    }

    fn http_source(client: HttpAiClient) -> Box<dyn MoveSource<Self>> {
        Box::new(client)
    }
}

impl ArcadeGame for ConnectFour {
    const NAME: &'static str = "connect-four";

    fn config(config: &ArcadeConfig) -> &GameConfig {
        &config.connect4
    }

    fn http_source(client: HttpAiClient) -> Box<dyn MoveSource<Self>> {
        Box::new(client)
    }
}

/// Application container.
///
/// Owns the configuration and builds sessions and move sources from it.
///
/// # Examples
///
/// ```
/// use arcade::{
///     app::App,
///     engine::Engine,
///     tictactoe::TicTacToe,
///     types::{PlayerType, Strategy},
/// };
///
/// let app = App::builder().offline(true).with_seed(7).build();
/// let mut session = app.session::<TicTacToe>(PlayerType::Ai(Strategy::RuleBased), PlayerType::Human);
/// let mut source = app.move_source::<TicTacToe>();
/// session.ai_move(source.as_mut())?;
/// assert_eq!(session.engine().occupied_count(), 1);
/// # Ok::<(), arcade::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct App {
    config: ArcadeConfig,
    offline: bool,
    seed: Option<u64>,
}

impl App {
    /// App with the given configuration, talking to the configured services
    pub fn new(config: ArcadeConfig) -> Self {
        Self {
            config,
            offline: false,
            seed: None,
        }
    }

    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn config(&self) -> &ArcadeConfig {
        &self.config
    }

    pub fn is_offline(&self) -> bool {
        self.offline
    }

    /// Session for `G` with the configured clear policy
    pub fn session<G: ArcadeGame>(&self, first: PlayerType, second: PlayerType) -> Session<G> {
        Session::new()
            .with_seats(first, second)
            .with_policy(G::config(&self.config).clear_policy)
    }

    /// HTTP client for `G`'s configured endpoints
    pub fn http_client<G: ArcadeGame>(&self) -> HttpAiClient {
        HttpAiClient::new(
            G::config(&self.config).endpoints.clone(),
            self.config.request_timeout(),
        )
    }

    /// Move source for AI seats: random legal moves when offline, HTTP otherwise
    pub fn move_source<G: ArcadeGame>(&self) -> Box<dyn MoveSource<G>> {
        if self.offline {
            Box::new(RandomMoves::new(self.seed))
        } else {
            G::http_source(self.http_client::<G>())
        }
    }

    /// Auto-play at `G`'s configured interval
    pub fn autoplay<G: ArcadeGame>(&self) -> AutoPlay {
        AutoPlay::new(G::config(&self.config).autoplay_interval())
    }
}

/// Builder for [`App`]
#[derive(Debug, Default)]
pub struct AppBuilder {
    config: ArcadeConfig,
    offline: bool,
    seed: Option<u64>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ArcadeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use [`RandomMoves`] instead of the HTTP services
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Seed for the offline move source
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> App {
        App {
            config: self.config,
            offline: self.offline,
            seed: self.seed,
        }
    }
}
