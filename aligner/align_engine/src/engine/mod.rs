//! Core alignment algorithm.
//!
//! One call evaluates one scope. The steps, in order:
//!
//! 1. Drop items with no right span (nothing to align against)
//! 2. Bucket the rest by left-span start column, preserving input order
//! 3. Keep only buckets whose right spans disagree; none left means the
//!    scope is a no-op
//! 4. Per kept bucket, pick the reference item (highest effective key end,
//!    counting a computed key's closing bracket, earliest on ties) and pad
//!    every member up to it
//!
//! Grouping by start column assumes the host's formatter already aligned
//! the left edges; a bucket whose members start at a different indent is
//! padded independently of its siblings. Deficits are clamped at zero so a
//! violated precondition can never produce negative padding.
//!
//! The whole pass is stateless and linear in the number of items. Emitted
//! insertion positions are columns of the original line, so application
//! order does not matter.

use align_diagnostic::{Diagnostic, Insertion, RuleCode};
use align_ir::{Item, ScopeKind};
use rustc_hash::FxHashMap;

use crate::config::{AlignConfig, ComputedKeyPolicy, Padding};
use crate::spacer;

/// Everything the engine has to say about one misaligned scope.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ScopeReport {
    /// Exactly one diagnostic per scope, however many groups misaligned.
    pub diagnostic: Diagnostic,
    /// One insertion per item of every misaligned group, in input order.
    pub edits: Vec<Insertion>,
}

/// Evaluate one scope.
///
/// Returns `None` for a degenerate scope: no eligible items, or every
/// group already aligned. A `Some` report carries the scope's single
/// diagnostic and the full insertion list.
pub fn evaluate(
    scope: ScopeKind,
    items: &[Item],
    code: RuleCode,
    config: &AlignConfig,
) -> Option<ScopeReport> {
    let eligible: Vec<Item> = items.iter().copied().filter(|i| i.right.is_some()).collect();

    let misaligned: Vec<Vec<Item>> = group_by_left_start(&eligible)
        .into_iter()
        .filter(|group| !is_aligned(group))
        .collect();

    if misaligned.is_empty() {
        tracing::debug!(%scope, items = items.len(), "scope already aligned, skipping");
        return None;
    }

    let mut edits = Vec::new();
    for group in &misaligned {
        let Some(reference) = reference_item(group) else {
            continue;
        };
        for item in group {
            edits.push(insertion_for(item, &reference, config));
        }
    }

    tracing::debug!(
        %scope,
        groups = misaligned.len(),
        edits = edits.len(),
        "scope reported"
    );

    Some(ScopeReport {
        diagnostic: Diagnostic::not_aligned(code, scope),
        edits,
    })
}

/// Bucket items by left-span start column.
///
/// Buckets appear in first-seen order and keep their members in input
/// order, so edit emission stays stable relative to the host's traversal.
fn group_by_left_start(items: &[Item]) -> Vec<Vec<Item>> {
    let mut index: FxHashMap<u32, usize> = FxHashMap::default();
    let mut groups: Vec<Vec<Item>> = Vec::new();

    for &item in items {
        let slot = *index.entry(item.left.start).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(item);
    }

    groups
}

/// A group is aligned iff every member's right span starts where the first
/// member's does.
fn is_aligned(group: &[Item]) -> bool {
    let mut rights = group.iter().filter_map(|i| i.right);
    match rights.next() {
        Some(first) => rights.all(|right| right.start == first.start),
        None => true,
    }
}

/// The column just past an item's key text.
///
/// A computed key's `left.end` sits before the closing bracket, but the
/// bracket occupies a column like any other key character, so it counts
/// toward both reference selection and the deficit.
fn effective_end(item: &Item) -> u32 {
    if item.is_computed() {
        item.left.end + 1
    } else {
        item.left.end
    }
}

/// The padding target: maximum effective end, earliest item on ties.
fn reference_item(group: &[Item]) -> Option<Item> {
    group.iter().copied().reduce(|best, current| {
        if effective_end(&current) > effective_end(&best) {
            current
        } else {
            best
        }
    })
}

/// Compute one item's insertion.
///
/// Deficit is the column distance to the reference's effective end, minus
/// one for an optional marker (`?` occupies a column `left.end` does not
/// count), plus one for a missing separator (the absent colon before a
/// method-shorthand body), clamped at zero.
fn insertion_for(item: &Item, reference: &Item, config: &AlignConfig) -> Insertion {
    let mut deficit = i64::from(effective_end(reference)) - i64::from(effective_end(item));
    if item.is_optional() {
        deficit -= 1;
    }
    if item.needs_separator() {
        deficit += 1;
    }
    let width = usize::try_from(deficit.max(0)).unwrap_or(0);

    // Default placement is immediately after the left span, which for a
    // computed key is after the key expression and before the closing
    // bracket. The outside-brackets policy crosses the bracket.
    let at = if item.is_computed() && config.computed_key == ComputedKeyPolicy::OutsideBrackets {
        item.left.end + 1
    } else {
        item.left.end
    };

    let text = match config.padding {
        Padding::Spaces => spacer::generate(width, config.fill, false),
        Padding::Comment => {
            // A literal space keeps the comment off the key token:
            // `key /*  */: value`. Items missing their separator get a
            // trailing space too: `key /*  */ () {}`.
            let delimiter = spacer::generate(width, config.fill, true);
            let mut text = String::with_capacity(delimiter.len() + 2);
            text.push(' ');
            text.push_str(&delimiter);
            if item.needs_separator() {
                text.push(' ');
            }
            text
        }
    };

    Insertion::new(at, text)
}
