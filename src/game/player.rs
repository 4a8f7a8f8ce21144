use serde::{Deserialize, Serialize};

use super::board::Token;

/// A display name paired with the token the player drops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub token: Token,
}

impl Player {
    pub fn new(name: impl Into<String>, token: Token) -> Self {
        Player {
            name: name.into(),
            token,
        }
    }
}

/// Which of the two players is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

/// The fixed pair of players for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roster {
    pub one: Player,
    pub two: Player,
}

impl Default for Roster {
    fn default() -> Self {
        Roster {
            one: Player::new("Red", Token::new(31)),
            two: Player::new("Green", Token::new(32)),
        }
    }
}

impl Roster {
    pub fn get(&self, seat: Seat) -> &Player {
        match seat {
            Seat::One => &self.one,
            Seat::Two => &self.two,
        }
    }

    /// The player dropping `token`, if any.
    pub fn owner_of(&self, token: Token) -> Option<&Player> {
        [&self.one, &self.two]
            .into_iter()
            .find(|player| player.token == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_seat() {
        assert_eq!(Seat::One.other(), Seat::Two);
        assert_eq!(Seat::Two.other(), Seat::One);
    }

    #[test]
    fn test_default_roster() {
        let roster = Roster::default();
        assert_eq!(roster.get(Seat::One).name, "Red");
        assert_eq!(roster.get(Seat::One).token, Token::new(31));
        assert_eq!(roster.get(Seat::Two).name, "Green");
        assert_eq!(roster.get(Seat::Two).token, Token::new(32));
    }

    #[test]
    fn test_owner_of() {
        let roster = Roster::default();
        assert_eq!(roster.owner_of(Token::new(31)), Some(&roster.one));
        assert_eq!(roster.owner_of(Token::new(32)), Some(&roster.two));
        assert_eq!(roster.owner_of(Token::new(33)), None);
    }
}
