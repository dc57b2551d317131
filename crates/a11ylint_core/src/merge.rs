//! Cross-document statistics merging.

use std::collections::HashSet;

use crate::Statistics;

impl Statistics {
    /// Folds `other` into `self`.
    ///
    /// Tallies, amounts and `uncoded` are summed. Codes not seen before are
    /// appended in `other`'s order along with their representative message.
    /// Message index entries from `other` replace existing ones.
    pub fn merge_from(&mut self, other: &Statistics) {
        for (total, tally) in self.tallies.iter_mut().zip(other.tallies) {
            *total += tally;
        }

        for (i, code) in other.guidelines.iter().enumerate() {
            let amount = other.amounts.get(i).copied().unwrap_or_default();
            match self.position(code) {
                Some(existing) => self.amounts[existing] += amount,
                None => {
                    self.guidelines.push(code.clone());
                    self.amounts.push(amount);
                    if let Some(message) = other.messages.get(i) {
                        self.messages.push(message.clone());
                    }
                }
            }
        }

        self.codes_by_message.extend(
            other
                .codes_by_message
                .iter()
                .map(|(message, code)| (message.clone(), code.clone())),
        );
        self.uncoded += other.uncoded;
    }
}

/// Merges per-document statistics into one summary.
///
/// Tallies and per-code amounts do not depend on input order. The
/// representative message list is rebuilt from every input's messages,
/// deduplicated and cut to the number of distinct codes, so after merging it
/// is only a best-effort pairing with `guidelines`. Use
/// [`Statistics::message_for`] for exact lookups.
pub fn merge<'a, I>(inputs: I) -> Statistics
where
    I: IntoIterator<Item = &'a Statistics>,
{
    let mut merged = Statistics::default();
    let mut messages: Vec<String> = Vec::new();

    for stats in inputs {
        merged.merge_from(stats);
        messages.extend(stats.messages.iter().cloned());
    }

    let mut seen = HashSet::new();
    messages.retain(|message| seen.insert(message.clone()));
    messages.truncate(merged.guidelines.len());
    merged.messages = messages;

    merged
}
