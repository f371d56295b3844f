use tracing::{debug, warn};

use crate::cards::Card;

use super::GameError;

/// How to read a line that holds more than one `:`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColonPolicy {
    /// Reject the line.
    #[default]
    Strict,
    /// Keep the first segment as the name and the last as the cards, dropping the rest.
    FirstLast,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub face_total: u32,
    pub suit_total: u32,
}

impl Score {
    pub fn new(face_total: u32, suit_total: u32) -> Self {
        Self {
            face_total,
            suit_total,
        }
    }

    pub fn from_cards(cards: &[Card]) -> Self {
        cards
            .iter()
            .fold(Self::default(), |score, card| score.add_card(card))
    }

    /// Totals stop at `u32::MAX` instead of wrapping.
    pub fn add_card(self, card: &Card) -> Self {
        Self {
            face_total: self.face_total.saturating_add(card.face_value()),
            suit_total: self.suit_total.saturating_add(card.suit_value()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: Score,
}

impl Player {
    pub fn new(name: impl Into<String>, score: Score) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Parses `Name:Card,Card,...`. `line_number` is 1-based and only used in errors.
    pub fn from_line(
        line: &str,
        line_number: usize,
        policy: ColonPolicy,
    ) -> Result<Self, GameError> {
        let segments: Vec<&str> = line.split(':').collect();

        let (name, card_data) = match (segments.as_slice(), policy) {
            ([] | [_], _) => {
                return Err(GameError::malformed(line_number, "expected 'name:cards'"));
            }
            ([name, card_data], _) => (*name, *card_data),
            ([name, .., card_data], ColonPolicy::FirstLast) => {
                warn!(
                    line = line_number,
                    dropped = segments.len() - 2,
                    "Dropping middle segments of multi-colon line"
                );
                (*name, *card_data)
            }
            (_, ColonPolicy::Strict) => {
                return Err(GameError::malformed(
                    line_number,
                    "more than one ':' in line",
                ));
            }
        };

        if card_data.is_empty() {
            return Err(GameError::malformed(line_number, "no cards after ':'"));
        }

        let cards = card_data
            .split(',')
            .map(|token| {
                if token.is_empty() {
                    Err(GameError::malformed(line_number, "empty card token"))
                } else {
                    Ok(Card::from_token(token)?)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let score = Score::from_cards(&cards);
        debug!(
            name = %name,
            cards = cards.len(),
            face_total = score.face_total,
            suit_total = score.suit_total,
            "Parsed player"
        );

        Ok(Self::new(name, score))
    }
}

/// Parses every line in order. The first failure aborts the whole parse.
pub fn parse_players<S: AsRef<str>>(
    lines: &[S],
    policy: ColonPolicy,
) -> Result<Vec<Player>, GameError> {
    if lines.is_empty() {
        return Err(GameError::EmptyInput);
    }

    lines
        .iter()
        .enumerate()
        .map(|(index, line)| Player::from_line(line.as_ref(), index + 1, policy))
        .collect()
}
