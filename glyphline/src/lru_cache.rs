// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

struct Entry<K, T> {
    epoch: u64,
    key: K,
    data: T,
}

/// A least-recently-used cache with a linear scan over its entries.
///
/// Intended for a handful of entries (tens at most), such as per-typeface
/// shaper data.
pub(crate) struct LruCache<K, T> {
    entries: Vec<Entry<K, T>>,
    epoch: u64,
    max_entries: usize,
}

impl<K: PartialEq, T> LruCache<K, T> {
    pub(crate) fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            epoch: 0,
            max_entries: max_entries.max(1),
        }
    }

    /// Returns the entry for `key`, creating it with `make_data` if it is not
    /// cached. When the cache is full the least recently used entry is
    /// replaced.
    pub(crate) fn entry(&mut self, key: K, make_data: impl FnOnce() -> T) -> &T {
        self.epoch += 1;
        let epoch = self.epoch;
        let index = match self.entries.iter().position(|entry| entry.key == key) {
            Some(index) => index,
            None if self.entries.len() < self.max_entries => {
                self.entries.push(Entry {
                    epoch,
                    key,
                    data: make_data(),
                });
                self.entries.len() - 1
            }
            None => {
                let index = self
                    .entries
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, entry)| entry.epoch)
                    .map_or(0, |(index, _)| index);
                self.entries[index] = Entry {
                    epoch,
                    key,
                    data: make_data(),
                };
                index
            }
        };
        let entry = &mut self.entries[index];
        entry.epoch = epoch;
        &entry.data
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}
