// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Top-level entry point: validate a request and run one search.
//!
//! # Example
//!
//! ```
//! use deck_search::{Assembler, SearchConfig, SearchRequest};
//! use deck_search::geometry::Direction;
//!
//! let mut assembler = Assembler::new(SearchConfig::weighted()).unwrap();
//! let request = SearchRequest::new("A2345D")
//!     .with_pool("$BT<V")
//!     .with_cursor(6)
//!     .with_direction(Direction::Ascending)
//!     .with_budget(1);
//! let deck = assembler.assemble(&request).unwrap();
//! assert_eq!(deck.to_string(), "A2345D$BT<V");
//! ```

use crate::config::SearchConfig;
use crate::constraints::Prune;
use crate::context::{Diagnostics, SearchContext};
use crate::engine::EngineBuilder;
use crate::error::SearchError;
use crate::geometry::{Deck, Direction, SymbolId, SymbolSet, Track};
use crate::memo::SymbolTable;
use crate::predicates::{PlacementPredicate, Request, SeedPredicate, SuspendPredicate};
use crate::state::{Counters, Statistics};

/// What to assemble: a seed prefix, the starting walk state, and the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seed: String,
    /// Symbols to place after the seed; `None` means every symbol not in the seed.
    pub pool: Option<String>,
    pub cursor: usize,
    pub direction: Direction,
    pub budget: u32,
}

impl SearchRequest {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            ..Self::default()
        }
    }

    pub fn with_pool(mut self, pool: impl Into<String>) -> Self {
        self.pool = Some(pool.into());
        self
    }

    pub fn with_cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_budget(mut self, budget: u32) -> Self {
        self.budget = budget;
        self
    }
}

impl Default for SearchRequest {
    /// The seed and walk state the command-line driver starts from.
    fn default() -> Self {
        Self {
            seed: String::from("A2345D"),
            pool: None,
            cursor: 4,
            direction: Direction::Ascending,
            budget: 1,
        }
    }
}

/// Runs deck searches for one configuration.
#[derive(Debug)]
pub struct Assembler {
    ctx: SearchContext,
}

impl Assembler {
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            ctx: SearchContext::new(config)?,
        })
    }

    /// Print the partial sequence through `diagnostics` while searching.
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.ctx.diagnostics = Some(diagnostics);
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.ctx.config
    }

    pub fn table(&self) -> &SymbolTable {
        &self.ctx.memo.table
    }

    /// Counters of the most recent run.
    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }

    /// Find the first deck, in branch order, that extends the seed with the pool.
    pub fn assemble(&mut self, request: &SearchRequest) -> Result<Deck, SearchError> {
        let resolved = self.resolve(request)?;

        self.ctx.reset();
        if let Some(diagnostics) = self.ctx.diagnostics.as_mut() {
            diagnostics.limiter_mut().reset();
        }

        let engine = EngineBuilder::new()
            .add(Box::new(SeedPredicate::new(resolved)))
            .add(Box::new(PlacementPredicate::new()))
            .add(Statistics::counting_predicate(Counters::Solutions))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let outcome = match engine.search(&mut self.ctx) {
            Some(_suspended) => Ok(self.ctx.deck()),
            None => Err(SearchError::Exhausted(
                self.ctx.state.last_prune.unwrap_or(Prune::NoCandidate),
            )),
        };

        let stats = &self.ctx.statistics;
        log::debug!(
            "search {}: {} calls, {} placements, {} prunes",
            if outcome.is_ok() { "succeeded" } else { "failed" },
            stats.get(Counters::Calls),
            stats.get(Counters::Placements),
            stats.total_prunes()
        );
        outcome
    }

    /// Check a request against the symbol table and layout.
    fn resolve(&self, request: &SearchRequest) -> Result<Request, SearchError> {
        let table = &self.ctx.memo.table;
        let width = self.ctx.config.layout.width();

        let mut used = SymbolSet::empty();
        let mut seed = Vec::with_capacity(request.seed.len());
        for c in request.seed.chars() {
            let id = lookup(table, c)?;
            if used.contains(id) {
                return Err(SearchError::DuplicateSymbol(c));
            }
            used.insert(id);
            seed.push(id);
        }

        for pair in seed.windows(2) {
            if self.ctx.memo.conflicts.conflicts(pair[0], pair[1]) {
                return Err(SearchError::SeedAdjacency {
                    first: table.get(pair[0]).character(),
                    second: table.get(pair[1]).character(),
                });
            }
        }

        if let Some(slot) = self.ctx.memo.fixed {
            if let Some(&found) = seed.get(slot.index) {
                if found != slot.symbol {
                    return Err(SearchError::SeedFixedPosition {
                        index: slot.index,
                        expected: table.get(slot.symbol).character(),
                        found: table.get(found).character(),
                    });
                }
            }
        }

        let pool = match &request.pool {
            Some(chars) => {
                let mut pool = SymbolSet::empty();
                for c in chars.chars() {
                    let id = lookup(table, c)?;
                    if used.contains(id) {
                        return Err(SearchError::DuplicateSymbol(c));
                    }
                    used.insert(id);
                    pool.insert(id);
                }
                pool
            }
            None => table
                .iter()
                .map(|s| s.id())
                .filter(|&id| !used.contains(id))
                .collect(),
        };

        let cursor = Track::try_new(request.cursor)
            .filter(|track| track.as_usize() < width)
            .ok_or(SearchError::CursorOutOfRange {
                cursor: request.cursor,
                width,
            })?;

        Ok(Request {
            seed,
            pool,
            cursor,
            direction: request.direction,
            budget: request.budget,
        })
    }
}

fn lookup(table: &SymbolTable, c: char) -> Result<SymbolId, SearchError> {
    table
        .lookup(c)
        .map(|symbol| symbol.id())
        .ok_or(SearchError::UnknownSymbol(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assembler() -> Assembler {
        Assembler::new(SearchConfig::default()).unwrap()
    }

    #[test]
    fn test_default_request() {
        let request = SearchRequest::default();
        assert_eq!(request.seed, "A2345D");
        assert_eq!(request.cursor, 4);
        assert_eq!(request.direction, Direction::Ascending);
        assert_eq!(request.budget, 1);
        assert!(request.pool.is_none());
    }

    #[test]
    fn test_resolve_default_pool_excludes_seed() {
        let assembler = assembler();
        let resolved = assembler.resolve(&SearchRequest::default()).unwrap();
        assert_eq!(resolved.seed.len(), 6);
        assert_eq!(resolved.pool.len(), 56);
        for id in &resolved.seed {
            assert!(!resolved.pool.contains(*id));
        }
    }

    #[test]
    fn test_resolve_rejects_bad_requests() {
        let assembler = assembler();
        let unknown = SearchRequest::new("A~");
        assert!(matches!(
            assembler.resolve(&unknown),
            Err(SearchError::UnknownSymbol('~'))
        ));

        let overlap = SearchRequest::new("A2").with_pool("B2");
        assert!(matches!(
            assembler.resolve(&overlap),
            Err(SearchError::DuplicateSymbol('2'))
        ));

        let repeated = SearchRequest::new("AA");
        assert!(matches!(
            assembler.resolve(&repeated),
            Err(SearchError::DuplicateSymbol('A'))
        ));

        // A {0, 3} and B {0, 4} share the 12 zone
        let clash = SearchRequest::new("AB");
        assert!(matches!(
            assembler.resolve(&clash),
            Err(SearchError::SeedAdjacency {
                first: 'A',
                second: 'B'
            })
        ));

        let off_card = SearchRequest::new("A").with_cursor(12);
        assert!(matches!(
            assembler.resolve(&off_card),
            Err(SearchError::CursorOutOfRange {
                cursor: 12,
                width: 12
            })
        ));
    }

    #[test]
    fn test_resolve_checks_fixed_index_in_seed() {
        let assembler = assembler();
        // U {2, 6} follows $ without conflict but sits where B belongs
        let wrong = SearchRequest::new("A2345D$U").with_pool("").with_cursor(5);
        assert!(matches!(
            assembler.resolve(&wrong),
            Err(SearchError::SeedFixedPosition {
                index: 7,
                expected: 'B',
                found: 'U'
            })
        ));

        let right = SearchRequest::new("A2345D$B").with_pool("").with_cursor(4);
        assert!(assembler.resolve(&right).is_ok());
    }

    #[test]
    fn test_assemble_records_statistics() {
        let mut assembler = assembler();
        let request = SearchRequest::new("A2345D").with_pool("$BT<V").with_cursor(6);
        let deck = assembler.assemble(&request).unwrap();
        assert_eq!(deck.to_string(), "A2345D$BT<V");
        assert_eq!(assembler.statistics().get(Counters::Solutions), 1);
        assert!(assembler.statistics().get(Counters::Placements) >= 5);
    }
}
