use std::cmp::Ordering;

use tracing::debug;

use super::{GameError, Player, WinnerResult};

/// Picks the winner in one left-to-right pass.
///
/// Face total decides first and suit total breaks ties. Players equal on
/// both are kept as co-winners in input order. A player equal on face but
/// lower on suit is dropped, and a strictly better player clears every tie
/// collected so far.
pub fn resolve_winner(players: &[Player]) -> Result<WinnerResult, GameError> {
    let (first, rest) = players.split_first().ok_or(GameError::EmptyInput)?;

    let mut winner = first;
    let mut tied: Vec<&str> = Vec::new();

    for player in rest {
        let ordering = player
            .score
            .face_total
            .cmp(&winner.score.face_total)
            .then(player.score.suit_total.cmp(&winner.score.suit_total));

        match ordering {
            Ordering::Greater => {
                debug!(
                    previous = %winner.name,
                    leader = %player.name,
                    cleared_ties = tied.len(),
                    "New leader"
                );
                winner = player;
                tied.clear();
            }
            Ordering::Equal => {
                debug!(leader = %winner.name, tied_with = %player.name, "Tie");
                tied.push(&player.name);
            }
            Ordering::Less => {}
        }
    }

    Ok(WinnerResult {
        winner: winner.name.clone(),
        tied: tied.into_iter().map(str::to_string).collect(),
        face_total: winner.score.face_total,
    })
}
