use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::deck::{CardFace, Deck};
use crate::layout::{self, Card};
use crate::roster::Roster;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Cards remain to be revealed.
    InProgress,
    /// Every card has been revealed; only a new game leaves this phase.
    Exhausted,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealedCard {
    pub id: u32,
    pub image: CardFace,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The card was not the expected one; nothing changed.
    Ignored { expected: u32 },
    Revealed {
        id: u32,
        /// The previously face-up card, now moved to the played pile.
        archived: Option<CardFace>,
    },
}

impl RevealOutcome {
    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealOutcome::Revealed { .. })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GameState {
    pub players: Roster,
    pub current_player: usize,
    deck: Deck,
    current_card: u32,
    next_card: Option<u32>,
    revealed_card: Option<RevealedCard>,
    played_cards: Vec<CardFace>,
}

impl GameState {
    /// Shuffles a fresh deck; the first card expected is `card_count`.
    pub fn new<R: Rng>(rng: &mut R, card_count: usize) -> GameState {
        let current_card = card_count as u32;
        GameState {
            players: Roster::default(),
            current_player: 0,
            deck: Deck::shuffled(rng),
            current_card,
            next_card: current_card.checked_sub(1).filter(|&n| n > 0),
            revealed_card: None,
            played_cards: vec![],
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current_card(&self) -> u32 {
        self.current_card
    }

    pub fn next_card(&self) -> Option<u32> {
        self.next_card
    }

    pub fn revealed_card(&self) -> Option<RevealedCard> {
        self.revealed_card
    }

    pub fn played_cards(&self) -> &[CardFace] {
        &self.played_cards
    }

    pub fn phase(&self) -> Phase {
        if self.current_card == 0 {
            Phase::Exhausted
        } else {
            Phase::InProgress
        }
    }

    pub fn generate_cards(&self, radius: f64, count: usize) -> Vec<Card> {
        layout::generate_cards(&self.deck, radius, count)
    }

    /// Turns card `id` face up if it is the one expected next.
    ///
    /// The card that was face up before leaves `live` and goes to the played pile.
    pub fn reveal(&mut self, id: u32, live: &mut Vec<Card>) -> RevealOutcome {
        if id != self.current_card {
            return RevealOutcome::Ignored {
                expected: self.current_card,
            };
        }
        let Some(index) = live.iter().position(|c| c.id == id) else {
            return RevealOutcome::Ignored {
                expected: self.current_card,
            };
        };

        let card = &mut live[index];
        card.revealed = true;
        let incoming = RevealedCard {
            id: card.id,
            image: card.image,
        };

        let archived = self.revealed_card.replace(incoming).map(|previous| {
            self.played_cards.push(previous.image);
            live.retain(|c| c.id != previous.id);
            previous.image
        });

        self.current_card -= 1;
        self.next_card = (self.current_card > 0).then_some(self.current_card);

        RevealOutcome::Revealed { id, archived }
    }

    /// Whether card `id` should be offered to the player as the next one to click.
    ///
    /// Before anything has been revealed this is the last card of `live`, not the
    /// card matching `current_card`.
    pub fn is_next(&self, id: u32, live: &[Card], card_count: usize) -> bool {
        if live.len() == card_count && !live.iter().any(|c| c.revealed) {
            return live.last().is_some_and(|c| c.id == id);
        }
        self.next_card == Some(id)
    }
}
