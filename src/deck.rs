use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DECK_SIZE: usize = 52;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// Order in which suits are interleaved within each rank.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }
}

/// Card rank, 1 (ace) through 13 (king).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const KING: Rank = Rank(13);

    pub fn new(value: u8) -> Option<Rank> {
        (1..=13).contains(&value).then_some(Rank(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Rank> {
        (Self::ACE.0..=Self::KING.0).map(Rank)
    }
}

/// The image a card shows once revealed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CardFace {
    pub suit: Suit,
    pub rank: Rank,
}

impl CardFace {
    /// Name of the image asset, e.g. `hearts-12`. Resolving it to a path is up to the renderer.
    pub fn asset_name(&self) -> String {
        format!("{}-{}", self.suit.name(), self.rank.value())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    faces: Vec<CardFace>,
}

impl Deck {
    /// Unshuffled deck: for each rank from ace to king, one card of every suit.
    pub fn standard() -> Deck {
        let faces = Rank::all()
            .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| CardFace { suit, rank }))
            .collect();
        Deck { faces }
    }

    pub fn shuffled<R: Rng>(rng: &mut R) -> Deck {
        let mut deck = Deck::standard();
        shuffle(&mut deck.faces, rng);
        deck
    }

    pub fn get(&self, index: usize) -> Option<CardFace> {
        self.faces.get(index).copied()
    }

    pub fn faces(&self) -> &[CardFace] {
        &self.faces
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

/// Fisher-Yates: walk from the last slot down, swapping each with a uniformly chosen slot at or below it.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
