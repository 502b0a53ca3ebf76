use crate::{Answer, Player};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConfrontationOutcome {
    ChallengerWins,
    DefenderWins,
    Stalemate,
    Declined,
}

/// Settles a confrontation by comparing net worth.
///
/// The richer side (assets minus debits) gains `bonus` pending turns; equal
/// nets change nothing. Returns `None` for an invalid answer so the caller can
/// ask again; in that case neither player is touched.
pub fn resolve_confrontation(
    challenger: &mut Player,
    defender: &mut Player,
    answer: Answer,
    bonus: i32,
) -> Option<ConfrontationOutcome> {
    match answer {
        Answer::Invalid => None,
        Answer::Decline => Some(ConfrontationOutcome::Declined),
        Answer::Accept => {
            let challenger_net = challenger.net();
            let defender_net = defender.net();
            let outcome = if challenger_net > defender_net {
                challenger.pending_turns = challenger.pending_turns.saturating_add(bonus);
                ConfrontationOutcome::ChallengerWins
            } else if challenger_net < defender_net {
                defender.pending_turns = defender.pending_turns.saturating_add(bonus);
                ConfrontationOutcome::DefenderWins
            } else {
                ConfrontationOutcome::Stalemate
            };
            Some(outcome)
        }
    }
}
