//! Particles grouped by palette index so the renderer can switch fill style
//! once per color instead of once per square.

use crate::particle::Particle;
use smallvec::SmallVec;

/// Stable index of a particle in the simulation's particle vector.
pub type Slot = usize;

type Members = SmallVec<[Slot; 4]>;

#[derive(Clone, Debug)]
pub struct ColorBuckets {
    buckets: Vec<Members>,
    len: usize,
}

impl ColorBuckets {
    pub fn new(steps: usize) -> Self {
        Self {
            buckets: vec![Members::new(); steps.max(1)],
            len: 0,
        }
    }

    pub fn steps(&self) -> usize {
        self.buckets.len()
    }

    /// Total membership across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        for b in &mut self.buckets {
            b.clear();
        }
        self.len = 0;
    }

    /// Drop all membership and reinsert every particle at its cached bucket.
    pub fn rebuild(&mut self, particles: &[Particle]) {
        self.clear();
        for (slot, p) in particles.iter().enumerate() {
            self.insert(slot, p.bucket);
        }
    }

    pub fn insert(&mut self, slot: Slot, bucket: usize) {
        let bucket = bucket.min(self.buckets.len() - 1);
        self.buckets[bucket].push(slot);
        self.len += 1;
    }

    /// Move `slot` from `*current` to `next` unless they are already equal.
    /// Returns whether the particle changed bucket.
    pub fn move_if_changed(&mut self, slot: Slot, current: &mut usize, next: usize) -> bool {
        let next = next.min(self.buckets.len() - 1);
        if next == *current {
            return false;
        }
        let removed = self
            .buckets
            .get_mut(*current)
            .and_then(|old| {
                let pos = old.iter().position(|&s| s == slot)?;
                old.remove(pos);
                Some(())
            })
            .is_some();
        debug_assert!(removed, "slot {slot} not found in bucket {}", *current);
        self.buckets[next].push(slot);
        if !removed {
            // Slot was untracked; it now holds one more membership
            self.len += 1;
        }
        *current = next;
        true
    }

    pub fn members(&self, bucket: usize) -> &[Slot] {
        self.buckets.get(bucket).map(|b| b.as_slice()).unwrap_or(&[])
    }

    /// Non-empty buckets in increasing index (brightness) order.
    pub fn iter_non_empty(&self) -> impl Iterator<Item = (usize, &[Slot])> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, b)| !b.is_empty())
            .map(|(i, b)| (i, b.as_slice()))
    }

    pub fn for_each_non_empty(&self, mut f: impl FnMut(usize, &[Slot])) {
        for (i, members) in self.iter_non_empty() {
            f(i, members);
        }
    }
}
