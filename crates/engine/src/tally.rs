// crates/engine/src/tally.rs
use std::cmp::Reverse;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::fingerprint::Fingerprint;
use crate::report::LineInfo;

/// Maximum number of bytes kept per distribution sample.
pub const MAX_SAMPLE_SIZE: usize = 512;

#[derive(Debug, Clone, Copy)]
struct Slot {
    count: u64,
    /// Order of first appearance, used to break ties in the distribution.
    seen: usize,
}

/// Frequency table plus the optional first-seen sample cache.
///
/// When samples are collected the two maps always share the same key set.
#[derive(Debug, Default)]
pub struct Tally {
    counts: HashMap<Fingerprint, Slot>,
    samples: Option<HashMap<Fingerprint, Box<[u8]>>>,
}

impl Tally {
    pub fn new(collect_samples: bool) -> Self {
        Self {
            counts: HashMap::new(),
            samples: collect_samples.then(HashMap::new),
        }
    }

    /// Count one occurrence of `line`. Returns `true` when the fingerprint is new.
    pub fn record(&mut self, fingerprint: Fingerprint, line: &[u8]) -> bool {
        let seen = self.counts.len();
        match self.counts.entry(fingerprint) {
            Entry::Occupied(mut slot) => {
                slot.get_mut().count += 1;
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(Slot { count: 1, seen });
                if let Some(samples) = self.samples.as_mut() {
                    let end = line.len().min(MAX_SAMPLE_SIZE);
                    samples.insert(fingerprint, line[..end].into());
                }
                true
            }
        }
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, fingerprint: Fingerprint) -> Option<u64> {
        self.counts.get(&fingerprint).map(|slot| slot.count)
    }

    pub fn sample(&self, fingerprint: Fingerprint) -> Option<&[u8]> {
        self.samples.as_ref()?.get(&fingerprint).map(|sample| &**sample)
    }

    pub const fn collects_samples(&self) -> bool {
        self.samples.is_some()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().map(|slot| slot.count).sum()
    }

    /// Every distinct line ordered by descending count, ties in first-seen order.
    pub fn distribution(&self) -> Vec<LineInfo> {
        let mut slots: Vec<_> = self.counts.iter().collect();
        slots.sort_unstable_by_key(|(_, slot)| (Reverse(slot.count), slot.seen));
        slots
            .into_iter()
            .map(|(&fingerprint, slot)| LineInfo {
                fingerprint,
                count: slot.count,
                sample: self.sample(fingerprint).map(<[u8]>::to_vec).unwrap_or_default(),
            })
            .collect()
    }
}
