// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure that combines:
//! - Tier 1 (MEMO): the configuration and the data precomputed from it
//! - Tier 2 (DYNAMIC): mutable search state with trail-based backtracking
//!
//! Predicates only change trailed state through [`SearchContext::place`], so
//! the engine's rewind is the single place where state is restored.

pub mod diagnostics;

pub use diagnostics::{Diagnostics, RateLimiter};

use crate::config::SearchConfig;
use crate::constraints::Prune;
use crate::error::SearchError;
use crate::geometry::{Deck, Direction, Symbol, SymbolId, Track};
use crate::memo::MemoizedData;
use crate::state::{Counters, DynamicState, Statistics};
use crate::trail::{Register, Trail};

/// Search context combining MEMO and DYNAMIC state.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     config: SearchConfig,      // Tier 1: Immutable policy
///     memo: MemoizedData,        // Tier 1: Immutable, precomputed
///     trail: Trail,              // Tier 2: Mutable, owned
///     state: DynamicState,       // Tier 2: Mutable, owned
///     statistics: Statistics,    // Per-run counters, not trailed
///     diagnostics: Option<..>,   // Rate-limited printer
/// }
/// ```
#[derive(Debug)]
pub struct SearchContext {
    pub config: SearchConfig,
    pub memo: MemoizedData,
    pub trail: Trail,
    pub state: DynamicState,
    pub statistics: Statistics,
    pub diagnostics: Option<Diagnostics>,
}

impl SearchContext {
    /// Create a new search context, computing the MEMO data for `config`.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let memo = MemoizedData::new(&config)?;
        Ok(Self::with_memo(config, memo))
    }

    /// Create a search context with existing MEMO data.
    pub fn with_memo(config: SearchConfig, memo: MemoizedData) -> Self {
        Self {
            config,
            memo,
            trail: Trail::new(),
            state: DynamicState::new(),
            statistics: Statistics::new(),
            diagnostics: None,
        }
    }

    /// Drop all search state and counters ahead of a new run.
    pub fn reset(&mut self) {
        self.trail.clear();
        self.state = DynamicState::new();
        self.statistics = Statistics::new();
    }

    pub fn symbol(&self, id: SymbolId) -> Symbol {
        self.memo.table.get(id)
    }

    /// The placed prefix as symbols.
    pub fn sequence(&self) -> Vec<Symbol> {
        self.state.placed().iter().map(|&id| self.symbol(id)).collect()
    }

    /// Place `symbol` at the end of the sequence, moving the cursor onto `road`.
    ///
    /// Every register change goes through the trail.
    pub fn place(&mut self, symbol: SymbolId, road: Track, budget: u32) {
        let state = &mut self.state;
        let direction = Direction::between(state.cursor(), road);
        let pool = state.pool().without(symbol);
        let length = state.len() as u64 + 1;

        state.write_slot(symbol, road);
        let regs = &mut state.registers;
        self.trail.record_and_set(regs, Register::Pool, pool.bits());
        self.trail.record_and_set(regs, Register::Length, length);
        self.trail
            .record_and_set(regs, Register::Cursor, u64::from(road.value()));
        self.trail
            .record_and_set(regs, Register::Direction, direction.to_bits());
        self.trail
            .record_and_set(regs, Register::Budget, u64::from(budget));

        self.statistics.increment_counter(Counters::Placements);
    }

    /// Note that a branch was rejected for `reason`.
    pub fn prune(&mut self, reason: Prune) {
        self.state.last_prune = Some(reason);
        self.statistics.record_prune(reason);
    }

    /// Hand the partial sequence to the diagnostics sink, if there is one.
    pub fn observe(&mut self) {
        if self.diagnostics.is_none() {
            return;
        }
        let symbols = self.sequence();
        let width = self.config.layout.width();
        if let Some(diagnostics) = self.diagnostics.as_mut() {
            diagnostics.observe(&symbols, width);
        }
    }

    /// Snapshot of the current sequence and walk.
    pub fn deck(&self) -> Deck {
        Deck::new(
            self.sequence(),
            self.state.seed_len(),
            self.state.start(),
            self.state.walk().to_vec(),
            self.config.layout.width(),
        )
    }
}
