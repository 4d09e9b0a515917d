//! Gallery layout allocator.
//!
//! Turns an ordered artifact list into grid slots for a three-column dense
//! grid, without measuring rendered content. The first eleven artifacts and
//! the four function cards follow a fixed pattern; artifacts 11..20 get spans
//! from a periodic rule. Anything past the first [`MAX_PLACED`] artifacts is
//! left to the page's "load more" affordance.
//!
//! The periodic rule checks `mod 7`, then `mod 5`, then `mod 3`; the order
//! decides ties (position 0 is `(2, 1)`, not `(2, 2)`) and must not change.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Maximum number of artifacts the allocator places.
pub const MAX_PLACED: usize = 20;

/// First artifact index handled by the periodic rule.
pub const PERIODIC_START: usize = 11;

/// Column/row span of a grid slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub cols: u8,
    pub rows: u8,
}

impl Span {
    pub const SMALL: Self = Self::new(1, 1);
    pub const WIDE: Self = Self::new(2, 1);
    pub const TALL: Self = Self::new(1, 2);
    pub const LARGE: Self = Self::new(2, 2);

    #[must_use]
    pub const fn new(cols: u8, rows: u8) -> Self {
        Self { cols, rows }
    }

    /// Grid utility classes, e.g. `"col-span-2 row-span-1"`.
    #[must_use]
    pub fn class(self) -> String {
        format!("col-span-{} row-span-{}", self.cols, self.rows)
    }
}

/// Non-artifact cards interleaved into the gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FunctionCard {
    Trending,
    Topics,
    Guide,
    News,
}

impl FunctionCard {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Trending => "trending",
            Self::Topics => "topics",
            Self::Guide => "guide",
            Self::News => "news",
        }
    }
}

/// One positioned unit of the gallery grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot<'a, T> {
    /// The lead artifact, rendered as a large image card.
    Featured { index: usize, artifact: &'a T, span: Span },
    /// A regular compact artifact card.
    Artifact { index: usize, artifact: &'a T, span: Span },
    /// A fixed function card.
    Function { card: FunctionCard, span: Span },
}

impl<T> Slot<'_, T> {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Featured { span, .. } | Self::Artifact { span, .. } | Self::Function { span, .. } => *span,
        }
    }

    /// Input index of the artifact in this slot, if any.
    #[must_use]
    pub fn artifact_index(&self) -> Option<usize> {
        match self {
            Self::Featured { index, .. } | Self::Artifact { index, .. } => Some(*index),
            Self::Function { .. } => None,
        }
    }
}

#[derive(Clone, Copy)]
enum Entry {
    Featured(usize),
    Artifact(usize, Span),
    Function(FunctionCard, Span),
}

/// Fixed head of the gallery, in output order.
const LEAD_PATTERN: [Entry; 15] = [
    Entry::Featured(0),
    Entry::Artifact(1, Span::SMALL),
    Entry::Function(FunctionCard::Trending, Span::TALL),
    Entry::Artifact(2, Span::SMALL),
    Entry::Artifact(3, Span::SMALL),
    Entry::Function(FunctionCard::Topics, Span::WIDE),
    Entry::Artifact(4, Span::SMALL),
    Entry::Artifact(5, Span::WIDE),
    Entry::Artifact(6, Span::SMALL),
    Entry::Artifact(7, Span::SMALL),
    Entry::Function(FunctionCard::Guide, Span::WIDE),
    Entry::Artifact(8, Span::SMALL),
    Entry::Function(FunctionCard::News, Span::TALL),
    Entry::Artifact(9, Span::SMALL),
    Entry::Artifact(10, Span::TALL),
];

/// Span for an artifact at `index >= PERIODIC_START`.
#[must_use]
pub fn periodic_span(index: usize) -> Span {
    let position = index.saturating_sub(PERIODIC_START);
    if position % 7 == 0 {
        Span::WIDE
    } else if position % 5 == 0 {
        Span::TALL
    } else if position % 3 == 0 {
        Span::LARGE
    } else {
        Span::SMALL
    }
}

/// Allocate gallery slots for `artifacts`.
///
/// Empty input yields no slots at all. Otherwise every function card is
/// emitted, and each artifact entry of the lead pattern only when the input
/// has an artifact at that index.
#[must_use]
pub fn allocate<T>(artifacts: &[T]) -> Vec<Slot<'_, T>> {
    if artifacts.is_empty() {
        return Vec::new();
    }

    let mut slots = Vec::with_capacity(LEAD_PATTERN.len() + MAX_PLACED - PERIODIC_START);
    for entry in LEAD_PATTERN {
        match entry {
            Entry::Featured(index) => {
                if let Some(artifact) = artifacts.get(index) {
                    slots.push(Slot::Featured { index, artifact, span: Span::LARGE });
                }
            }
            Entry::Artifact(index, span) => {
                if let Some(artifact) = artifacts.get(index) {
                    slots.push(Slot::Artifact { index, artifact, span });
                }
            }
            Entry::Function(card, span) => slots.push(Slot::Function { card, span }),
        }
    }

    let end = artifacts.len().min(MAX_PLACED);
    for (index, artifact) in artifacts.iter().enumerate().take(end).skip(PERIODIC_START) {
        slots.push(Slot::Artifact { index, artifact, span: periodic_span(index) });
    }
    slots
}

/// Whether the page should offer a "load more" control for `count` artifacts.
#[must_use]
pub fn has_overflow(count: usize) -> bool {
    count > MAX_PLACED
}
