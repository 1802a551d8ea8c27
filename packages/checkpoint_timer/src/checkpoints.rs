use foldhash::{HashMap, HashMapExt};
use tracing::debug;

use crate::CheckpointRecord;

/// How checkpoint names are compared when deciding which record an interval belongs to.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum KeyStrategy {
    /// Names with the same text share a record, no matter where the text is stored.
    #[default]
    Content,

    /// Names share a record only if they are the same string slice in memory (same address
    /// and length).
    ///
    /// This skips hashing the name text but silently splits one logical checkpoint into
    /// several rows if its name is supplied from different storage, and may merge
    /// unrelated checkpoints if temporary strings reuse the same memory. Only use this
    /// when every checkpoint name is a `&'static str` literal.
    Identity,
}

#[derive(Debug)]
struct Checkpoint {
    name: Box<str>,
    record: CheckpointRecord,
}

/// Maps a checkpoint name to its position in `Checkpoints::entries`.
#[derive(Debug)]
enum NameIndex {
    Content(HashMap<Box<str>, usize>),
    Identity(HashMap<(usize, usize), usize>),
}

/// The set of checkpoints seen by a profiler, each with its running statistics.
///
/// Names are never removed. Resetting only clears the statistics, which keeps the shape
/// of consecutive reports stable.
#[derive(Debug)]
pub(crate) struct Checkpoints {
    index: NameIndex,

    // In order of first appearance.
    entries: Vec<Checkpoint>,
}

impl Checkpoints {
    pub(crate) fn new(key_strategy: KeyStrategy) -> Self {
        let index = match key_strategy {
            KeyStrategy::Content => NameIndex::Content(HashMap::new()),
            KeyStrategy::Identity => NameIndex::Identity(HashMap::new()),
        };

        Self {
            index,
            entries: Vec::new(),
        }
    }

    /// Attributes one interval to the named checkpoint, creating it on first use.
    pub(crate) fn record(&mut self, name: &str, elapsed_micros: u64) {
        let slot = self.slot(name);

        self.entries
            .get_mut(slot)
            .expect("the index only refers to existing entries")
            .record
            .observe(elapsed_micros);
    }

    fn slot(&mut self, name: &str) -> usize {
        let next = self.entries.len();

        let existing = match &mut self.index {
            NameIndex::Content(index) => {
                let existing = index.get(name).copied();

                if existing.is_none() {
                    index.insert(name.into(), next);
                }

                existing
            }
            NameIndex::Identity(index) => {
                let key = (name.as_ptr().addr(), name.len());
                let existing = index.get(&key).copied();

                if existing.is_none() {
                    index.insert(key, next);
                }

                existing
            }
        };

        existing.unwrap_or_else(|| {
            debug!(checkpoint = name, "first sample for checkpoint");

            self.entries.push(Checkpoint {
                name: name.into(),
                record: CheckpointRecord::new(),
            });

            next
        })
    }

    /// Resets the statistics of every checkpoint. The checkpoints themselves remain.
    pub(crate) fn reset_all(&mut self) {
        for entry in &mut self.entries {
            entry.record.reset();
        }
    }

    /// Sum of the totals of all checkpoints, in microseconds.
    pub(crate) fn total_micros(&self) -> u64 {
        self.entries.iter().fold(0_u64, |sum, entry| {
            sum.checked_add(entry.record.total())
                .expect("sum of checkpoint totals overflows u64 microseconds - this indicates an unrealistic scenario")
        })
    }

    /// Number of distinct checkpoints seen so far.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// All checkpoints sorted by name.
    ///
    /// Checkpoints with equal names (only possible with [`KeyStrategy::Identity`]) keep
    /// their order of first appearance.
    pub(crate) fn sorted(&self) -> impl Iterator<Item = (&str, &CheckpointRecord)> {
        let mut sorted = self.entries.iter().collect::<Vec<_>>();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));

        sorted
            .into_iter()
            .map(|entry| (entry.name.as_ref(), &entry.record))
    }
}
