use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;
use unidecode::unidecode;

/// Avatar images the add-player dialog offers.
pub const AVATARS: [&str; 3] = ["player1", "player2", "player3"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("player name is empty")]
    EmptyName,
    #[error("no avatar selected")]
    EmptyAvatar,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub avatar: String,
}

impl Player {
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Player {
        Player {
            name: name.into(),
            avatar: avatar.into(),
        }
    }

    /// Strict constructor for callers that want to refuse blank entries.
    pub fn validated(name: &str, avatar: &str) -> Result<Player, PlayerError> {
        let name = collapse_whitespace(name);
        if name.is_empty() {
            return Err(PlayerError::EmptyName);
        }
        let avatar = avatar.trim();
        if avatar.is_empty() {
            return Err(PlayerError::EmptyAvatar);
        }
        Ok(Player::new(name, avatar))
    }
}

fn whitespace() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

fn collapse_whitespace(s: &str) -> String {
    whitespace().replace_all(s.trim(), " ").into_owned()
}

/// Key used to compare names: ASCII-folded, lowercased, punctuation dropped.
fn name_key(name: &str) -> String {
    let folded: String = unidecode(name)
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    collapse_whitespace(&folded)
}

/// Players in turn order. Duplicates are allowed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

impl Default for Roster {
    fn default() -> Self {
        Roster {
            players: vec![
                Player::new("Holger", "player1"),
                Player::new("Berthold", "player2"),
                Player::new("Gerhardt", "player3"),
                Player::new("Klaus", "player2"),
                Player::new("Birgit", "player1"),
            ],
        }
    }
}

impl Roster {
    pub fn empty() -> Roster {
        Roster { players: vec![] }
    }

    pub fn push(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Whether someone with an equivalent name is already seated.
    pub fn has_player(&self, name: &str) -> bool {
        let key = name_key(name);
        !key.is_empty() && self.players.iter().any(|p| name_key(&p.name) == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster() {
        let roster = Roster::default();
        let names: Vec<&str> = roster.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Holger", "Berthold", "Gerhardt", "Klaus", "Birgit"]);
        assert_eq!(roster.players()[3].avatar, "player2");
    }

    #[test]
    fn test_push_accepts_anything() {
        let mut roster = Roster::empty();
        roster.push(Player::new("", ""));
        roster.push(Player::new("Klaus", "player2"));
        roster.push(Player::new("Klaus", "player2"));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_validated() {
        assert_eq!(
            Player::validated("  Anna   Lena ", " player3 "),
            Ok(Player::new("Anna Lena", "player3"))
        );
        assert_eq!(Player::validated(" \t ", "player1"), Err(PlayerError::EmptyName));
        assert_eq!(Player::validated("Anna", ""), Err(PlayerError::EmptyAvatar));
    }

    #[test]
    fn test_has_player_folds_case_and_accents() {
        let mut roster = Roster::default();
        roster.push(Player::new("Jürgen", "player1"));
        assert!(roster.has_player("holger"));
        assert!(roster.has_player("  BIRGIT "));
        assert!(roster.has_player("Jurgen"));
        assert!(!roster.has_player("Hans"));
        assert!(!roster.has_player(""));
    }

    #[test]
    fn test_name_key() {
        assert_eq!(name_key("  Ça   va? "), "ca va");
    }
}
