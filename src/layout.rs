use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::deck::{CardFace, Deck};

/// Position on the ring plus the rotation that keeps the card pointing outward.
///
/// Coordinates are relative to the ring centre. Angles grow counter-clockwise in
/// math orientation; since CSS y grows downward, cards sweep clockwise on screen.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    /// Degrees.
    pub rotation: f64,
}

pub fn place(index: usize, count: usize, radius: f64) -> Placement {
    let angle = (index as f64 / count as f64) * 2.0 * PI;
    Placement {
        x: radius * angle.cos(),
        y: radius * angle.sin(),
        rotation: angle * 180.0 / PI + 90.0,
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Card {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub revealed: bool,
    pub image: CardFace,
}

impl Card {
    pub fn placement(&self) -> Placement {
        Placement {
            x: self.x,
            y: self.y,
            rotation: self.rotation,
        }
    }
}

/// Lays the first `count` cards of `deck` evenly around a circle, card 1 at angle 0.
///
/// Stops early if the deck holds fewer than `count` faces.
pub fn generate_cards(deck: &Deck, radius: f64, count: usize) -> Vec<Card> {
    (0..count)
        .map_while(|i| {
            let image = deck.get(i)?;
            let Placement { x, y, rotation } = place(i, count, radius);
            Some(Card {
                id: i as u32 + 1,
                x,
                y,
                rotation,
                revealed: false,
                image,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DECK_SIZE;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_first_card_at_angle_zero() {
        let cards = generate_cards(&Deck::standard(), 260.0, DECK_SIZE);
        assert_eq!(cards.len(), DECK_SIZE);
        let first = &cards[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.x, 260.0);
        assert_eq!(first.y, 0.0);
        assert_eq!(first.rotation, 90.0);
        assert!(!first.revealed);
    }

    #[test]
    fn test_quarter_turn() {
        let p = place(13, 52, 100.0);
        assert!(p.x.abs() < EPS);
        assert!((p.y - 100.0).abs() < EPS);
        assert!((p.rotation - 180.0).abs() < EPS);
    }

    #[test]
    fn test_images_follow_deck_order() {
        let deck = Deck::standard();
        let cards = generate_cards(&deck, 50.0, 10);
        let images: Vec<CardFace> = cards.iter().map(|c| c.image).collect();
        assert_eq!(images, deck.faces()[..10]);
    }

    #[test]
    fn test_count_larger_than_deck_is_truncated() {
        let cards = generate_cards(&Deck::standard(), 50.0, DECK_SIZE + 3);
        assert_eq!(cards.len(), DECK_SIZE);
    }

    proptest! {
        #[test]
        fn cards_lie_on_circle_with_increasing_ids(radius in 1.0f64..1000.0, count in 1usize..=52) {
            let cards = generate_cards(&Deck::standard(), radius, count);
            prop_assert_eq!(cards.len(), count);
            for (i, card) in cards.iter().enumerate() {
                prop_assert_eq!(card.id as usize, i + 1);
                let r2 = card.x * card.x + card.y * card.y;
                prop_assert!((r2 - radius * radius).abs() < 1e-6 * radius * radius);
            }
        }
    }
}
