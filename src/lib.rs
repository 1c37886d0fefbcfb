use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod deck;
pub mod layout;
pub mod roster;
pub mod state;
pub mod style;

pub use config::{ConfigError, HoverConfig, RevealedSlotConfig, TableConfig};
pub use deck::{shuffle, CardFace, Deck, Rank, Suit, DECK_SIZE};
pub use layout::{generate_cards, place, Card, Placement};
pub use roster::{Player, PlayerError, Roster, AVATARS};
pub use state::{GameState, Phase, RevealOutcome, RevealedCard};
pub use style::{revealed_card_style, transform_styles, CardStyle, CssStyle};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[cfg(not(target_arch = "wasm32"))]
fn log(_s: &str) {}

/// The table as the page sees it: game state, the ring of live cards and the hover flag.
#[wasm_bindgen]
pub struct Game {
    config: TableConfig,
    rng: ChaCha8Rng,
    state: GameState,
    cards: Vec<Card>,
    last_card_hovered: bool,
}

impl Game {
    pub fn from_config(config: TableConfig) -> Result<Game, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Ok(Game::build(config, seed))
    }

    fn build(config: TableConfig, seed: u64) -> Game {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = GameState::new(&mut rng, config.card_count);
        let cards = state.generate_cards(config.radius, config.card_count);
        log(&format!("New table: {} cards, seed {}", cards.len(), seed));
        Game {
            config,
            rng,
            state,
            cards,
            last_card_hovered: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn live_cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn reveal(&mut self, id: u32) -> RevealOutcome {
        let outcome = self.state.reveal(id, &mut self.cards);
        match outcome {
            RevealOutcome::Revealed { id, archived } => {
                log(&format!(
                    "Revealed card {} ({} left), archived {:?}",
                    id,
                    self.state.current_card(),
                    archived.map(|face| face.asset_name())
                ));
            }
            RevealOutcome::Ignored { expected } => {
                log(&format!("Ignored click on card {}, expecting {}", id, expected));
            }
        }
        outcome
    }

    fn card(&self, id: u32) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn style_of(&self, id: u32) -> Option<CardStyle> {
        self.card(id).map(|card| self.state.card_style(card))
    }

    pub fn first_style_of(&self, id: u32) -> Option<CardStyle> {
        self.card(id).map(|card| {
            self.state.first_card_style(
                card,
                self.last_card_hovered,
                self.config.card_count,
                &self.config.hover,
            )
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}

#[wasm_bindgen]
impl Game {
    pub fn new() -> Game {
        Game::build(TableConfig::default(), rand::rng().random())
    }

    /// Builds a table from a (possibly partial) `TableConfig` object.
    pub fn with_config(config: JsValue) -> Result<Game, JsValue> {
        let config: TableConfig = if config.is_undefined() || config.is_null() {
            TableConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Game::from_config(config).map_err(|e| JsError::new(&e.to_string()).into())
    }

    /// Reshuffles and lays out a fresh ring. Players go back to the default roster.
    pub fn new_game(&mut self) {
        self.state = GameState::new(&mut self.rng, self.config.card_count);
        self.cards = self.state.generate_cards(self.config.radius, self.config.card_count);
        self.last_card_hovered = false;
        log(&format!("New game: {} cards", self.cards.len()));
    }

    pub fn cards(&self) -> Result<JsValue, JsValue> {
        to_js(&self.cards)
    }

    /// Returns whether the click turned the card over.
    pub fn reveal_card(&mut self, id: u32) -> bool {
        self.reveal(id).is_revealed()
    }

    pub fn is_next(&self, id: u32) -> bool {
        self.state.is_next(id, &self.cards, self.config.card_count)
    }

    pub fn set_hover_state(&mut self) {
        self.last_card_hovered = true;
    }

    pub fn unset_hover_state(&mut self) {
        self.last_card_hovered = false;
    }

    pub fn is_hovered(&self) -> bool {
        self.last_card_hovered
    }

    /// CSS for a card on the ring; `undefined` for cards no longer in play.
    pub fn card_style(&self, id: u32) -> Result<JsValue, JsValue> {
        match self.style_of(id) {
            Some(style) => to_js(&style.to_css()),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    pub fn first_card_style(&self, id: u32) -> Result<JsValue, JsValue> {
        match self.first_style_of(id) {
            Some(style) => to_js(&style.to_css()),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    pub fn revealed_card_style(&self) -> Result<JsValue, JsValue> {
        to_js(&revealed_card_style(&self.config.revealed_slot).to_css())
    }

    pub fn players(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.players)
    }

    /// Seats a player as entered; blank fields are accepted.
    pub fn add_player(&mut self, name: &str, avatar: &str) {
        log(&format!("Adding player '{}'", name));
        self.state.players.push(Player::new(name, avatar));
    }

    pub fn add_validated_player(&mut self, name: &str, avatar: &str) -> Result<(), JsError> {
        let player = Player::validated(name, avatar).map_err(|e| JsError::new(&e.to_string()))?;
        log(&format!("Adding player '{}'", player.name));
        self.state.players.push(player);
        Ok(())
    }

    pub fn has_player(&self, name: &str) -> bool {
        self.state.players.has_player(name)
    }

    pub fn avatars(&self) -> js_sys::Array {
        AVATARS.iter().map(|a| JsValue::from_str(a)).collect()
    }

    pub fn current_player(&self) -> usize {
        self.state.current_player
    }

    pub fn current_card(&self) -> u32 {
        self.state.current_card()
    }

    /// Id of the card expected next, or -1 once the deck is used up.
    pub fn next_card(&self) -> i32 {
        self.state.next_card().map_or(-1, |id| id as i32)
    }

    pub fn revealed_card_id(&self) -> Option<u32> {
        self.state.revealed_card().map(|r| r.id)
    }

    pub fn revealed_card(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.revealed_card())
    }

    pub fn played_cards(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.played_cards())
    }

    pub fn phase(&self) -> String {
        format!("{:?}", self.state.phase())
    }

    pub fn is_exhausted(&self) -> bool {
        self.state.phase() == Phase::Exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> Game {
        Game::from_config(TableConfig {
            seed: Some(seed),
            ..TableConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_new_table() {
        let game = Game::new();
        assert_eq!(game.live_cards().len(), 52);
        assert_eq!(game.current_card(), 52);
        assert_eq!(game.next_card(), 51);
        assert!(!game.is_exhausted());
        assert!(!game.is_hovered());
        assert_eq!(game.phase(), "InProgress");
    }

    #[test]
    fn test_seed_reproduces_table() {
        assert_eq!(seeded(11).live_cards(), seeded(11).live_cards());
        assert_ne!(seeded(11).live_cards(), seeded(12).live_cards());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = Game::from_config(TableConfig {
            card_count: 60,
            ..TableConfig::default()
        });
        assert!(matches!(result, Err(ConfigError::CardCount { got: 60, .. })));
    }

    #[test]
    fn test_reveal_card_and_is_next() {
        let mut game = seeded(1);
        assert!(game.is_next(52));
        assert!(!game.reveal_card(3));
        assert!(game.reveal_card(52));
        assert_eq!(game.revealed_card_id(), Some(52));
        assert!(game.is_next(51));
        assert!(game.reveal_card(51));
        assert_eq!(game.state().played_cards().len(), 1);
        assert_eq!(game.live_cards().len(), 51);
    }

    #[test]
    fn test_exhausting_the_deck() {
        let mut game = seeded(2);
        for id in (1..=52).rev() {
            assert!(game.reveal_card(id));
        }
        assert!(game.is_exhausted());
        assert_eq!(game.phase(), "Exhausted");
        assert_eq!(game.next_card(), -1);
        assert_eq!(game.revealed_card_id(), Some(1));
        assert!(!game.reveal_card(1));
    }

    #[test]
    fn test_new_game_resets_everything() {
        let mut game = seeded(3);
        let first_ring = game.live_cards().to_vec();
        game.reveal_card(52);
        game.reveal_card(51);
        game.set_hover_state();
        game.add_player("Dora", "player3");

        game.new_game();
        assert_eq!(game.current_card(), 52);
        assert_eq!(game.revealed_card_id(), None);
        assert!(game.state().played_cards().is_empty());
        assert_eq!(game.live_cards().len(), 52);
        assert!(game.live_cards().iter().all(|c| !c.revealed));
        assert!(!game.is_hovered());
        assert_eq!(game.state().players.len(), 5);
        assert_ne!(game.live_cards(), &first_ring[..]);
    }

    #[test]
    fn test_hover_changes_first_card_only() {
        let mut game = seeded(4);
        let resting = game.first_style_of(1).unwrap();
        let neighbour = game.style_of(2);
        game.set_hover_state();
        let hovered = game.first_style_of(1).unwrap();
        assert_ne!(resting, hovered);
        assert_eq!(hovered.transform.x, 276.0);
        assert_eq!(game.style_of(2), neighbour);
        game.unset_hover_state();
        assert_eq!(game.first_style_of(1).unwrap(), resting);
    }

    #[test]
    fn test_style_of_archived_card() {
        let mut game = seeded(5);
        game.reveal_card(52);
        game.reveal_card(51);
        assert_eq!(game.style_of(52), None);
        assert!(game.style_of(51).is_some());
    }

    #[test]
    fn test_players() {
        let mut game = seeded(6);
        game.add_player("", "");
        game.add_player("Klaus", "player2");
        assert_eq!(game.state().players.len(), 7);
        assert!(game.has_player("klaus"));
        assert!(!game.has_player("Dora"));
        assert_eq!(game.current_player(), 0);
    }
}
