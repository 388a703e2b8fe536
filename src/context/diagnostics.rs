// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rate-limited progress printer.
//!
//! The search offers its partial sequence to the [`Diagnostics`] sink on every
//! call; the sink writes it out at most once per interval. Output never
//! affects the search, and write failures are logged and dropped.

use std::fmt;
use std::io::Write;
use std::time::{Duration, Instant};

use crate::geometry::{write_listing, Symbol};

/// Emits at most once per interval.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    interval: Duration,
    last: Instant,
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Instant::now(),
        }
    }

    /// True if more than the interval has passed since the last emission.
    /// A ready limiter restarts its interval.
    ///
    /// A zero interval is always ready.
    pub fn ready(&mut self) -> bool {
        if self.interval.is_zero() {
            return true;
        }
        let now = Instant::now();
        if now.duration_since(self.last) > self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }

    /// Restart the interval from now.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

/// Diagnostics sink owned by the search context.
pub struct Diagnostics {
    limiter: RateLimiter,
    writer: Box<dyn Write>,
    diagram: bool,
}

impl Diagnostics {
    pub fn new(limiter: RateLimiter, writer: Box<dyn Write>) -> Self {
        Self {
            limiter,
            writer,
            diagram: false,
        }
    }

    /// Also print one bit diagram row per symbol.
    pub fn with_diagram(mut self, diagram: bool) -> Self {
        self.diagram = diagram;
        self
    }

    pub fn limiter_mut(&mut self) -> &mut RateLimiter {
        &mut self.limiter
    }

    /// Offer the current partial sequence.
    pub fn observe(&mut self, symbols: &[Symbol], width: usize) {
        if !self.limiter.ready() {
            return;
        }
        let result = if self.diagram {
            write_listing(&mut self.writer, symbols, width)
        } else {
            let line: String = symbols.iter().map(Symbol::character).collect();
            writeln!(self.writer, "{}", line)
        };
        if let Err(err) = result.and_then(|()| self.writer.flush()) {
            log::warn!("diagnostics output failed: {}", err);
        }
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("limiter", &self.limiter)
            .field("diagram", &self.diagram)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_zero_interval_is_always_ready() {
        let mut limiter = RateLimiter::new(Duration::ZERO);
        assert!(limiter.ready());
        assert!(limiter.ready());
    }

    #[test]
    fn test_long_interval_is_not_ready() {
        let mut limiter = RateLimiter::new(Duration::from_secs(3600));
        assert!(!limiter.ready());
        limiter.reset();
        assert!(!limiter.ready());
        assert_eq!(limiter.interval(), Duration::from_secs(3600));
    }

    #[test]
    fn test_default_interval_is_one_second() {
        assert_eq!(RateLimiter::default().interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_observe_writes_when_ready() {
        use crate::memo::{SymbolTable, TrackLayout};

        let table = SymbolTable::build(TrackLayout::Zoned).unwrap();
        let symbols: Vec<Symbol> = "A2".chars().filter_map(|c| table.lookup(c)).collect();
        let buffer = SharedBuffer::default();

        let mut diagnostics = Diagnostics::new(RateLimiter::new(Duration::ZERO), Box::new(buffer.clone()));
        diagnostics.observe(&symbols, 12);
        assert_eq!(String::from_utf8(buffer.0.borrow().clone()).unwrap(), "A2\n");

        let buffer = SharedBuffer::default();
        let mut diagnostics = Diagnostics::new(RateLimiter::new(Duration::ZERO), Box::new(buffer.clone()))
            .with_diagram(true);
        diagnostics.observe(&symbols, 12);
        let text = String::from_utf8(buffer.0.borrow().clone()).unwrap();
        assert!(text.starts_with("A2\nA: * . . * "));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_observe_swallows_write_errors() {
        let mut diagnostics = Diagnostics::new(RateLimiter::new(Duration::ZERO), Box::new(BrokenPipe));
        diagnostics.observe(&[], 12);
    }
}
