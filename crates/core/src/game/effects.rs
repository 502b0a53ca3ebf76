use super::*;
use crate::{resolve_confrontation, DecisionProvider, Event, EventBus, Prompt};

impl Game {
    /// Draws the card at `role`'s draw index, applies it, and advances the
    /// index by one.
    ///
    /// Lookup and magnitude checks run before anything is mutated, so a deck
    /// error leaves both players untouched.
    pub fn draw_card<D: DecisionProvider>(
        &mut self,
        role: Role,
        decisions: &mut D,
        events: &mut EventBus,
    ) -> Result<CardAction, GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver);
        }
        let draw_index = self.player(role).draw_index;
        let card = self
            .decks
            .for_role(role)
            .card_at(draw_index, self.config.deck_exhaustion)?
            .clone();
        let magnitude = match (card.action.carries_magnitude(), card.magnitude) {
            (true, Some(value)) => value,
            (true, None) => {
                return Err(GameError::MissingMagnitude {
                    role,
                    draw_index,
                    action: card.action,
                })
            }
            (false, _) => 0,
        };

        log::debug!(
            "{} draws card {} ({})",
            role.keyword(),
            draw_index,
            card.action.keyword()
        );
        events.push(Event::CardDrawn {
            role,
            draw_index,
            action: card.action,
            prompt: card.prompt,
        });

        match card.action {
            CardAction::Asset => {
                let player = self.player_mut(role);
                player.assets = player.assets.saturating_add(magnitude);
                let assets = player.assets;
                events.push(Event::AssetsChanged {
                    role,
                    delta: magnitude,
                    assets,
                });
            }
            CardAction::Debit => {
                let player = self.player_mut(role);
                player.debits = player.debits.saturating_add(magnitude);
                let debits = player.debits;
                events.push(Event::DebitsChanged {
                    role,
                    delta: magnitude,
                    debits,
                });
            }
            CardAction::Position => self.shift_position(role, magnitude, events),
            CardAction::Turn => {
                let delta = magnitude.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
                let player = self.player_mut(role);
                player.pending_turns = player.pending_turns.saturating_add(delta);
                let pending = player.pending_turns;
                events.push(Event::PendingTurnsChanged {
                    role,
                    delta: magnitude,
                    pending,
                });
            }
            CardAction::Confrontation => self.confront(role, decisions, events),
        }

        self.player_mut(role).draw_index += 1;
        Ok(card.action)
    }

    fn shift_position(&mut self, role: Role, delta: i64, events: &mut EventBus) {
        let end = self.config.board_end;
        let player = self.player_mut(role);
        // An overflowing sum lies past whichever edge `delta` points at.
        let target = match player.position.checked_add(delta) {
            Some(target) => target,
            None if delta < 0 => i64::MIN,
            None => i64::MAX,
        };
        if target > end {
            let position = player.position;
            events.push(Event::PositionBlocked {
                role,
                delta,
                position,
            });
        } else if target < 0 {
            player.position = 0;
            events.push(Event::PositionClamped { role, delta });
        } else {
            player.position = target;
            events.push(Event::PositionChanged {
                role,
                delta,
                position: target,
            });
            if target == end {
                self.finish(role, events);
            }
        }
    }

    /// Asks until the provider gives a usable answer.
    fn confront<D: DecisionProvider>(
        &mut self,
        role: Role,
        decisions: &mut D,
        events: &mut EventBus,
    ) {
        let bonus = self.config.confrontation_bonus;
        loop {
            decisions.observe(events);
            let answer = decisions.confront(&self.view(role));
            let (challenger, defender) = self.pair_mut(role);
            let Some(outcome) = resolve_confrontation(challenger, defender, answer, bonus) else {
                events.push(Event::InvalidAnswer {
                    role,
                    prompt: Prompt::Confrontation,
                });
                continue;
            };
            let challenger_net = challenger.net();
            let defender_net = defender.net();
            log::debug!(
                "{} confrontation: {:?} ({} vs {})",
                role.keyword(),
                outcome,
                challenger_net,
                defender_net
            );
            events.push(Event::ConfrontationResolved {
                challenger: role,
                outcome,
                challenger_net,
                defender_net,
            });
            return;
        }
    }
}
