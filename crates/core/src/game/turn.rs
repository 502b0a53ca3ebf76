use super::*;
use crate::{DecisionProvider, Event, EventBus, MenuChoice, Outcome, Prompt};

impl Game {
    /// Plays turns until someone wins or a player exits.
    pub fn play<D: DecisionProvider>(
        &mut self,
        decisions: &mut D,
        events: &mut EventBus,
    ) -> Result<Outcome, GameError> {
        loop {
            if let Some(outcome) = self.state.outcome() {
                return Ok(outcome);
            }
            self.next_turn(decisions, events)?;
        }
    }

    /// Takes the next queued turn, starting a new round when the queue is empty.
    /// The turn menu is offered first; an exit there ends the game without a winner.
    pub fn next_turn<D: DecisionProvider>(
        &mut self,
        decisions: &mut D,
        events: &mut EventBus,
    ) -> Result<TurnOutcome, GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver);
        }
        let entry = match self.queue.pop_front() {
            Some(entry) => entry,
            None => {
                self.start_round(events);
                self.queue.pop_front().ok_or(GameError::GameOver)?
            }
        };
        events.push(Event::TurnStarted {
            role: entry.role,
            kind: entry.kind,
            position: self.player(entry.role).position,
        });
        if !self.offer_turn_menu(entry.role, decisions, events) {
            return Ok(TurnOutcome::Exited);
        }
        self.run_turn(entry.role, decisions, events)
    }

    /// One turn for `role` with a fresh die roll.
    pub fn run_turn<D: DecisionProvider>(
        &mut self,
        role: Role,
        decisions: &mut D,
        events: &mut EventBus,
    ) -> Result<TurnOutcome, GameError> {
        self.take_turn(role, None, decisions, events)
    }

    /// Same as [`Game::run_turn`] but with the die result supplied by the caller.
    pub fn run_turn_with_roll<D: DecisionProvider>(
        &mut self,
        role: Role,
        roll: u8,
        decisions: &mut D,
        events: &mut EventBus,
    ) -> Result<TurnOutcome, GameError> {
        self.take_turn(role, Some(roll), decisions, events)
    }

    fn start_round(&mut self, events: &mut EventBus) {
        self.state.round += 1;
        self.queue.clear();
        for role in self.turn_order {
            self.queue.push_back(TurnEntry {
                role,
                kind: TurnKind::Normal,
            });
        }
        log::debug!("round {} started", self.state.round);
        events.push(Event::RoundStarted {
            round: self.state.round,
        });
    }

    fn offer_turn_menu<D: DecisionProvider>(
        &mut self,
        role: Role,
        decisions: &mut D,
        events: &mut EventBus,
    ) -> bool {
        loop {
            decisions.observe(events);
            match decisions.turn_menu(&self.view(role)) {
                MenuChoice::Continue => return true,
                MenuChoice::Stats => events.push(Event::StatsShown {
                    player: self.player(role).clone(),
                }),
                MenuChoice::Exit => {
                    self.state.force_exit();
                    log::info!("{} exited the game", role.keyword());
                    events.push(Event::GameExited { role });
                    return false;
                }
                MenuChoice::Invalid => events.push(Event::InvalidAnswer {
                    role,
                    prompt: Prompt::TurnMenu,
                }),
            }
        }
    }

    fn take_turn<D: DecisionProvider>(
        &mut self,
        role: Role,
        roll: Option<u8>,
        decisions: &mut D,
        events: &mut EventBus,
    ) -> Result<TurnOutcome, GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver);
        }
        self.state.turns_played += 1;

        let pending = self.player(role).pending_turns;
        if pending < 0 {
            let player = self.player_mut(role);
            player.pending_turns += 1;
            let remaining = player.pending_turns;
            log::debug!("{} skips a turn, {} pending", role.keyword(), remaining);
            events.push(Event::TurnSkipped { role, remaining });
            return Ok(TurnOutcome::Skipped { remaining });
        }
        if pending > 0 {
            self.schedule_extra_turns(role, pending, events);
        }

        self.player_mut(role).turns_taken += 1;
        let roll = match roll {
            Some(roll) => roll,
            None => self.rng.roll_die(self.config.die_sides),
        };
        events.push(Event::DiceRolled { role, roll });
        self.resolve_roll(role, roll, decisions, events)
    }

    /// Extra turns go to the front of the queue so they follow the current
    /// turn before anyone else moves.
    fn schedule_extra_turns(&mut self, role: Role, count: i32, events: &mut EventBus) {
        for _ in 0..count {
            self.queue.push_front(TurnEntry {
                role,
                kind: TurnKind::Extra,
            });
        }
        self.player_mut(role).pending_turns = 0;
        log::debug!("{} gains {} extra turn(s)", role.keyword(), count);
        events.push(Event::ExtraTurnsScheduled { role, count });
    }

    fn resolve_roll<D: DecisionProvider>(
        &mut self,
        role: Role,
        roll: u8,
        decisions: &mut D,
        events: &mut EventBus,
    ) -> Result<TurnOutcome, GameError> {
        let end = self.config.board_end;
        let from = self.player(role).position;
        let target = from + i64::from(roll);

        if target > end {
            events.push(Event::MoveBlocked {
                role,
                position: from,
                roll,
            });
            return Ok(TurnOutcome::Overshoot { roll });
        }

        self.player_mut(role).position = target;
        events.push(Event::Moved {
            role,
            from,
            to: target,
        });
        if target == end {
            self.finish(role, events);
            return Ok(TurnOutcome::Won { roll });
        }

        let drawn = self.draw_card(role, decisions, events)?;
        Ok(TurnOutcome::Moved { roll, drawn })
    }

    pub(super) fn finish(&mut self, role: Role, events: &mut EventBus) {
        if self.state.declare_winner(role) {
            let position = self.player(role).position;
            log::info!("{} reached {} and wins", role.keyword(), position);
            events.push(Event::GameWon { role, position });
        }
    }
}
