//! Random Number Printer
//!
//! An infinite, lazy iterator of `f64` values in `[0, 1)`, and a printer
//! that pulls a fixed number of them.
//!
//! By default the printer spawns a brand-new sequence for every line and
//! only ever reads its first element. `DrawMode::Shared` consumes a single
//! sequence instead; the printed values have the same distribution either way.

use crate::error::{DemoError, Result};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, RngCore, SeedableRng};
use std::io::Write;
use tracing::{debug, trace};

/// Number of values printed when the caller gives no count.
pub const DEFAULT_COUNT: i64 = 3;

/// Infinite iterator over uniformly distributed values in `[0, 1)`.
///
/// Owns its generator, so the cursor only moves forward and the sequence
/// cannot be restarted once consumption begins.
#[derive(Debug)]
pub struct RandomNumbers<R> {
    rng: R,
}

impl<R: Rng> RandomNumbers<R> {
    pub fn new(rng: R) -> Self {
        RandomNumbers { rng }
    }
}

impl<R: RngCore + 'static> RandomNumbers<R> {
    /// Erases the generator type so differently backed sequences can be
    /// handed out from one place.
    pub fn boxed(self) -> RandomNumbers<Box<dyn RngCore>> {
        RandomNumbers::new(Box::new(self.rng))
    }
}

impl<R: Rng> Iterator for RandomNumbers<R> {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        // `Standard` for f64 samples the half-open interval [0, 1).
        let value = self.rng.gen::<f64>();
        trace!(value, "drew random number");
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// A fresh sequence backed by the thread-local, OS-seeded generator.
pub fn next_random() -> RandomNumbers<ThreadRng> {
    RandomNumbers::new(rand::thread_rng())
}

/// Where freshly spawned sequences get their generator from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Entropy {
    #[default]
    Os,
    /// Every spawned sequence is seeded from a master generator built from
    /// this seed, so a whole run can be replayed.
    Seeded(u64),
}

/// How the printer consumes sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// One new sequence per printed value; only its first element is read.
    #[default]
    FreshPerDraw,
    /// One sequence, consumed once per printed value.
    Shared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrintSettings {
    pub entropy: Entropy,
    pub mode: DrawMode,
}

/// Spawns brand-new random sequences.
pub struct SequenceFactory {
    master: Option<StdRng>,
}

impl SequenceFactory {
    pub fn new(entropy: Entropy) -> Self {
        let master = match entropy {
            Entropy::Os => None,
            Entropy::Seeded(seed) => Some(StdRng::seed_from_u64(seed)),
        };
        SequenceFactory { master }
    }

    /// A brand-new sequence: `next_random()` for OS entropy, or one seeded
    /// from the master generator.
    pub fn spawn(&mut self) -> RandomNumbers<Box<dyn RngCore>> {
        debug!(seeded = self.master.is_some(), "spawned fresh random sequence");
        match &mut self.master {
            Some(master) => RandomNumbers::new(StdRng::seed_from_u64(master.gen())).boxed(),
            None => next_random().boxed(),
        }
    }
}

/// Number of iterations for a requested count. Negative counts run zero times.
pub fn resolve_count(n: Option<i64>) -> usize {
    usize::try_from(n.unwrap_or(DEFAULT_COUNT)).unwrap_or(0)
}

/// Parses a count from user input. Anything that is not an integer is an
/// `InvalidArgument`; negative integers are accepted.
pub fn parse_count(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|e| DemoError::invalid_argument(input, e.to_string()))
}

/// Writes `n` (default 3) lines of the form `A random number: <value>`.
pub fn print_random_numbers<W: Write>(
    out: &mut W,
    n: Option<i64>,
    settings: PrintSettings,
) -> Result<()> {
    let count = resolve_count(n);
    let mut factory = SequenceFactory::new(settings.entropy);
    debug!(count, mode = ?settings.mode, "printing random numbers");

    let values: Box<dyn Iterator<Item = f64> + '_> = match settings.mode {
        DrawMode::FreshPerDraw => {
            Box::new(std::iter::repeat_with(|| factory.spawn()).filter_map(|mut seq| seq.next()))
        }
        DrawMode::Shared => Box::new(factory.spawn()),
    };

    for value in values.take(count) {
        writeln!(out, "A random number: {}", value)?;
    }
    Ok(())
}
