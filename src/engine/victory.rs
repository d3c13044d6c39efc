//! Win-condition arbitration.
//!
//! Evaluated after every HP mutation. Dragon deaths settle the match
//! before rider deaths are even considered; mutual deaths go against the
//! active side, whose action caused them.

use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::state::{Match, MatchPhase, WinKind};

/// A decided match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub winner: Side,
    pub kind: WinKind,
}

/// Evaluate win conditions against the current state.
#[must_use]
pub fn check_win(game: &Match) -> Option<Verdict> {
    let a = game.side(Side::A);
    let b = game.side(Side::B);

    let a_dragon_dead = !a.dragon.is_alive();
    let b_dragon_dead = !b.dragon.is_alive();

    if a_dragon_dead && b_dragon_dead {
        return Some(Verdict {
            winner: game.active.opponent(),
            kind: WinKind::DragonKill,
        });
    }
    if a_dragon_dead {
        return Some(Verdict {
            winner: Side::B,
            kind: WinKind::DragonKill,
        });
    }
    if b_dragon_dead {
        return Some(Verdict {
            winner: Side::A,
            kind: WinKind::DragonKill,
        });
    }

    let a_rider_dead = !a.rider.is_alive();
    let b_rider_dead = !b.rider.is_alive();

    if a_rider_dead && b_rider_dead {
        return Some(Verdict {
            winner: game.active.opponent(),
            kind: WinKind::RiderKill,
        });
    }
    if a_rider_dead {
        return Some(Verdict {
            winner: Side::B,
            kind: WinKind::RiderKill,
        });
    }
    if b_rider_dead {
        return Some(Verdict {
            winner: Side::A,
            kind: WinKind::RiderKill,
        });
    }

    None
}

/// Record the verdict if one exists. Idempotent: the first recorded
/// winner is never overwritten.
pub fn apply_win(game: &mut Match) -> Option<Verdict> {
    if game.winner.is_some() {
        return None;
    }
    let verdict = check_win(game)?;
    game.phase = MatchPhase::Ended;
    game.winner = Some(verdict.winner);
    game.win_kind = Some(verdict.kind);
    Some(verdict)
}
