//! Bounded LRU cache mapping `(body_id, interval_idx) -> CoeffBlock` (§4.5).
//!
//! No external `lru` crate is used anywhere in this corpus's dependency
//! graph, so this is a small hand-rolled cache: a `HashMap` for lookup plus
//! a `VecDeque` recording access order, evicted from the front on overflow.

use std::collections::{HashMap, VecDeque};

use eph_container::codec::CoeffBlock;

pub struct BlockCache {
    capacity: usize,
    entries: HashMap<(i32, usize), CoeffBlock>,
    order: VecDeque<(i32, usize)>,
}

impl BlockCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub fn get(&mut self, key: (i32, usize)) -> Option<CoeffBlock> {
        if let Some(block) = self.entries.get(&key) {
            let block = block.clone();
            self.touch(key);
            Some(block)
        } else {
            None
        }
    }

    pub fn put(&mut self, key: (i32, usize), block: CoeffBlock) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.insert(key, block).is_some() {
            self.touch(key);
            return;
        }
        self.order.push_back(key);
        while self.entries.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            } else {
                break;
            }
        }
    }

    fn touch(&mut self, key: (i32, usize)) {
        if let Some(pos) = self.order.iter().position(|&k| k == key) {
            self.order.remove(pos);
        }
        self.order.push_back(key);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(v: f64) -> CoeffBlock {
        CoeffBlock {
            x: vec![v],
            y: vec![v],
            z: vec![v],
        }
    }

    #[test]
    fn disabled_cache_never_stores() {
        let mut cache = BlockCache::new(0);
        cache.put((1, 0), block(1.0));
        assert_eq!(cache.get((1, 0)), None);
    }

    #[test]
    fn evicts_oldest_on_overflow() {
        let mut cache = BlockCache::new(2);
        cache.put((1, 0), block(1.0));
        cache.put((1, 1), block(2.0));
        cache.put((1, 2), block(3.0));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get((1, 0)), None);
        assert_eq!(cache.get((1, 2)), Some(block(3.0)));
    }

    #[test]
    fn touching_an_entry_protects_it_from_eviction() {
        let mut cache = BlockCache::new(2);
        cache.put((1, 0), block(1.0));
        cache.put((1, 1), block(2.0));
        assert_eq!(cache.get((1, 0)), Some(block(1.0)));
        cache.put((1, 2), block(3.0));
        assert_eq!(cache.get((1, 0)), Some(block(1.0)));
        assert_eq!(cache.get((1, 1)), None);
    }
}
