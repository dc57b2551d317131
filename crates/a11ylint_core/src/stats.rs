//! Per-document diagnostic statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Diagnostic;

/// The four WCAG principles, in tally order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Principle {
    Perceivable,
    Operable,
    Understandable,
    Robust,
}

impl Principle {
    pub const ALL: [Principle; 4] = [
        Principle::Perceivable,
        Principle::Operable,
        Principle::Understandable,
        Principle::Robust,
    ];

    /// Principle of a success-criterion code, from its first character.
    pub fn of_code(code: &str) -> Option<Self> {
        match code.as_bytes().first()? {
            b'1' => Some(Principle::Perceivable),
            b'2' => Some(Principle::Operable),
            b'3' => Some(Principle::Understandable),
            b'4' => Some(Principle::Robust),
            _ => None,
        }
    }

    /// Index into [`Statistics::tallies`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Principle::Perceivable => "Perceivable",
            Principle::Operable => "Operable",
            Principle::Understandable => "Understandable",
            Principle::Robust => "Robust",
        }
    }
}

/// Counts derived from a set of diagnostics.
///
/// `guidelines`, `amounts` and `messages` are parallel: entry `i` describes
/// one success-criterion code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Diagnostics per principle, indexed by [`Principle::index`].
    pub tallies: [u32; 4],
    /// Distinct codes.
    pub guidelines: Vec<String>,
    /// Occurrences of each code.
    pub amounts: Vec<u32>,
    /// A representative message for each code.
    pub messages: Vec<String>,
    /// Message text to code. The first code seen for a message wins.
    pub codes_by_message: BTreeMap<String, String>,
    /// Diagnostics with an empty code. They are not in any other field.
    pub uncoded: u32,
}

impl Statistics {
    /// Tally for one principle.
    #[inline]
    pub fn tally(&self, principle: Principle) -> u32 {
        self.tallies[principle.index()]
    }

    /// Coded diagnostics counted.
    pub fn total(&self) -> u32 {
        self.amounts.iter().sum()
    }

    /// Occurrences of `code`, if it was seen.
    pub fn amount_of(&self, code: &str) -> Option<u32> {
        self.position(code).map(|i| self.amounts[i])
    }

    /// `(code, amount)` pairs in list order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.guidelines
            .iter()
            .map(String::as_str)
            .zip(self.amounts.iter().copied())
    }

    /// All messages recorded for `code`, in lexicographic order.
    pub fn messages_for<'s>(&'s self, code: &str) -> impl Iterator<Item = &'s str> {
        let code = code.to_owned();
        self.codes_by_message
            .iter()
            .filter(move |(_, c)| **c == code)
            .map(|(message, _)| message.as_str())
    }

    /// The first-seen message for `code`.
    ///
    /// Looks through [`Statistics::messages`] in order for a message that
    /// [`Statistics::codes_by_message`] attributes to `code`. Merging can cut
    /// the message list short; then the lexicographically first indexed
    /// message is returned.
    pub fn message_for(&self, code: &str) -> Option<&str> {
        self.messages
            .iter()
            .map(String::as_str)
            .find(|message| {
                self.codes_by_message
                    .get(*message)
                    .is_some_and(|c| c == code)
            })
            .or_else(|| self.messages_for(code).next())
    }

    /// True when nothing at all was counted.
    pub fn is_empty(&self) -> bool {
        self.guidelines.is_empty() && self.uncoded == 0
    }

    pub(crate) fn position(&self, code: &str) -> Option<usize> {
        self.guidelines.iter().position(|c| c == code)
    }
}

/// Builds statistics for one document's diagnostics.
///
/// Uncoded diagnostics are counted into [`Statistics::uncoded`] and left out
/// of everything else. The rest are stably sorted by code, so equal codes keep
/// their traversal order and the first one supplies the representative
/// message.
pub fn aggregate(diagnostics: &[Diagnostic]) -> Statistics {
    let mut stats = Statistics::default();

    let mut coded: Vec<&Diagnostic> = Vec::with_capacity(diagnostics.len());
    for diagnostic in diagnostics {
        if diagnostic.is_uncoded() {
            stats.uncoded += 1;
        } else {
            coded.push(diagnostic);
        }
    }
    coded.sort_by(|a, b| a.code.cmp(&b.code));

    for diagnostic in coded {
        if let Some(principle) = Principle::of_code(&diagnostic.code) {
            stats.tallies[principle.index()] += 1;
        }

        match stats.guidelines.last() {
            Some(last) if *last == diagnostic.code => {
                if let Some(amount) = stats.amounts.last_mut() {
                    *amount += 1;
                }
            }
            _ => {
                stats.guidelines.push(diagnostic.code.clone());
                stats.amounts.push(1);
                stats.messages.push(diagnostic.message.clone());
            }
        }

        stats
            .codes_by_message
            .entry(diagnostic.message.clone())
            .or_insert_with(|| diagnostic.code.clone());
    }

    stats
}
