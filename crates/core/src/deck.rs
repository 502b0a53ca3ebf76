use crate::{Card, DeckExhaustion, GameError, RngState, Role};
use serde::{Deserialize, Serialize};

/// Raw card tables as read from the deck source, before duplication and shuffling.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckTables {
    pub capitalist: Vec<Card>,
    pub worker: Vec<Card>,
}

impl DeckTables {
    pub fn for_role(&self, role: Role) -> &[Card] {
        match role {
            Role::Capitalist => &self.capitalist,
            Role::Worker => &self.worker,
        }
    }
}

/// An ordered chance deck for one role, read by 1-based draw index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    role: Role,
    cards: Vec<Card>,
}

impl Deck {
    /// Keeps `cards` in the given order.
    pub fn new(role: Role, cards: Vec<Card>) -> Self {
        Self { role, cards }
    }

    /// Repeats `table` `copies` times and shuffles the result.
    pub fn shuffled(
        role: Role,
        table: &[Card],
        copies: usize,
        rng: &mut RngState,
    ) -> Result<Self, GameError> {
        let size = table.len().checked_mul(copies).ok_or_else(|| {
            GameError::InvalidConfig(format!(
                "{} deck of {} cards repeated {copies} times is too large",
                role.keyword(),
                table.len()
            ))
        })?;
        let mut cards = Vec::with_capacity(size);
        for _ in 0..copies {
            cards.extend_from_slice(table);
        }
        rng.shuffle(&mut cards);
        Ok(Self { role, cards })
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_at(&self, draw_index: usize, policy: DeckExhaustion) -> Result<&Card, GameError> {
        let exhausted = || GameError::DeckExhausted {
            role: self.role,
            draw_index,
            size: self.cards.len(),
        };
        let offset = draw_index.checked_sub(1).ok_or_else(exhausted)?;
        let offset = match policy {
            DeckExhaustion::Fail => offset,
            DeckExhaustion::Cycle if !self.cards.is_empty() => offset % self.cards.len(),
            DeckExhaustion::Cycle => return Err(exhausted()),
        };
        self.cards.get(offset).ok_or_else(exhausted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChanceDecks {
    capitalist: Deck,
    worker: Deck,
}

impl ChanceDecks {
    pub fn new(capitalist: Deck, worker: Deck) -> Result<Self, GameError> {
        for (expected, deck) in [(Role::Capitalist, &capitalist), (Role::Worker, &worker)] {
            if deck.role() != expected {
                return Err(GameError::DeckRoleMismatch {
                    expected,
                    found: deck.role(),
                });
            }
            if deck.is_empty() {
                return Err(GameError::EmptyDeck(expected));
            }
        }
        Ok(Self { capitalist, worker })
    }

    pub fn shuffled(
        tables: &DeckTables,
        copies: usize,
        rng: &mut RngState,
    ) -> Result<Self, GameError> {
        let capitalist = Deck::shuffled(Role::Capitalist, &tables.capitalist, copies, rng)?;
        let worker = Deck::shuffled(Role::Worker, &tables.worker, copies, rng)?;
        Self::new(capitalist, worker)
    }

    pub fn for_role(&self, role: Role) -> &Deck {
        match role {
            Role::Capitalist => &self.capitalist,
            Role::Worker => &self.worker,
        }
    }
}
