//! Unpacking Demo
//!
//! Six independent destructuring demonstrations: multiple assignment,
//! fixed-size sequences, lazily produced sources, nested patterns, the
//! swap idiom, and a head/rest/tail split.
//!
//! Literal tuples and arrays destructure irrefutably. Sequences whose length
//! is only known at runtime go through the helpers below, which report a
//! `ShapeMismatch` instead of panicking.

use crate::error::{Arity, DemoError, Result};
use itertools::Itertools;
use std::io::Write;
use tracing::debug;

// =============================================================================
// Fallible destructuring helpers
// =============================================================================

/// Drains `source` into an array of exactly `N` elements.
///
/// The source is consumed in full before the length is checked, so a
/// lazy producer always runs to completion.
pub fn unpack_exact<const N: usize, I>(source: I) -> Result<[I::Item; N]>
where
    I: IntoIterator,
{
    let items: Vec<I::Item> = source.into_iter().collect();
    let actual = items.len();
    <[I::Item; N]>::try_from(items)
        .map_err(|_| DemoError::shape_mismatch(Arity::Exactly(N), actual))
}

/// Drains `source` into a three-element tuple.
pub fn unpack_triple<I>(source: I) -> Result<(I::Item, I::Item, I::Item)>
where
    I: IntoIterator,
{
    let items = source.into_iter().collect_vec();
    let actual = items.len();
    items
        .into_iter()
        .collect_tuple()
        .ok_or_else(|| DemoError::shape_mismatch(Arity::Exactly(3), actual))
}

/// Splits a slice into its first element, everything strictly between, and
/// its last element. Needs at least two elements.
pub fn split_head_rest_tail<T>(items: &[T]) -> Result<(&T, &[T], &T)> {
    let mismatch = || DemoError::shape_mismatch(Arity::AtLeast(2), items.len());
    let (head, rest) = items.split_first().ok_or_else(mismatch)?;
    let (tail, middle) = rest.split_last().ok_or_else(mismatch)?;
    Ok((head, middle, tail))
}

/// Exchanges the two values with a parallel assignment; both right-hand
/// values are read before either binding changes.
pub fn swap_pair<T>(pair: (T, T)) -> (T, T) {
    let (mut a, mut b) = pair;
    (a, b) = (b, a);
    (a, b)
}

// =============================================================================
// Demonstration steps
// =============================================================================

/// One demonstration: an optional heading and the lines printed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub title: Option<&'static str>,
    pub lines: Vec<String>,
    /// Printed straight after the previous step, without a blank line.
    pub continues: bool,
}

impl Step {
    fn new(title: &'static str, lines: Vec<String>) -> Self {
        Step {
            title: Some(title),
            lines,
            continues: false,
        }
    }

    fn continuation(lines: Vec<String>) -> Self {
        Step {
            title: None,
            lines,
            continues: true,
        }
    }
}

pub fn scalar_tuple() -> Step {
    let (a, b, c) = (1, 2, 3);
    Step::new(
        "let (a, b, c) = (1, 2, 3);",
        vec![format!("a: {} b: {} c: {}", a, b, c)],
    )
}

pub fn fixed_sequence() -> Result<Step> {
    let [a, b, c] = unpack_exact::<3, _>(vec![1, 2, 3])?;
    Ok(Step::new(
        "let [a, b, c] = unpack_exact::<3, _>(vec![1, 2, 3])?;",
        vec![format!("a: {} b: {} c: {}", a, b, c)],
    ))
}

pub fn lazy_source() -> Result<Step> {
    let (a, b, c) = unpack_triple((0..3).map(|i| 2 * i + 1))?;
    Ok(Step::new(
        "let (a, b, c) = unpack_triple((0..3).map(|i| 2 * i + 1))?;",
        vec![format!("a: {} b: {} c: {}", a, b, c)],
    ))
}

pub fn nested() -> Step {
    let (a, [b, c], d) = (1, [2, 3], 4);
    Step::new(
        "let (a, [b, c], d) = (1, [2, 3], 4);",
        vec![format!("a: {} b: {} c: {} d: {}", a, b, c, d)],
    )
}

pub fn swap() -> Step {
    let (a, b) = swap_pair((1, 2));
    Step::new("Unpacking to swap", vec![format!("a: {}, b: {}", a, b)])
}

pub fn head_rest_tail() -> Result<Step> {
    let (a, rest, c) = split_head_rest_tail(&[1, 2, 3, 4, 5])?;
    Ok(Step::continuation(vec![
        format!("a: {}", a),
        format!("L: {:?}", rest),
        format!("c: {}", c),
    ]))
}

/// All six steps, in order.
pub fn steps() -> Result<Vec<Step>> {
    Ok(vec![
        scalar_tuple(),
        fixed_sequence()?,
        lazy_source()?,
        nested(),
        swap(),
        head_rest_tail()?,
    ])
}

/// Writes every step, separated by blank lines unless a step continues the
/// previous one. Holds no state between calls.
pub fn run_unpacking_demo<W: Write>(out: &mut W) -> Result<()> {
    for (index, step) in steps()?.iter().enumerate() {
        debug!(step = index + 1, title = ?step.title, "unpacking step");
        if index > 0 && !step.continues {
            writeln!(out)?;
        }
        if let Some(title) = step.title {
            writeln!(out, "{}", title)?;
        }
        for line in &step.lines {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}
