use std::collections::{HashMap, VecDeque};

/// Decoded page pixels
pub struct CachedPage {
    pub rgba_data: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

/// Maximum number of decoded pages to keep
const MAX_CACHED_PAGES: usize = 24;

/// LRU cache of decoded page images, keyed by page index
pub struct PageCache {
    pages: HashMap<usize, CachedPage>,
    order: VecDeque<usize>,
    capacity: usize,
}

impl PageCache {
    pub fn new() -> Self {
        Self::with_capacity(MAX_CACHED_PAGES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pages: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn insert(&mut self, page_index: usize, page: CachedPage) {
        // Remove if already exists (update LRU)
        if self.pages.contains_key(&page_index) {
            self.order.retain(|&k| k != page_index);
        }

        // Evict LRU if full
        while self.order.len() >= self.capacity {
            if let Some(old) = self.order.pop_front() {
                self.pages.remove(&old);
            }
        }

        self.pages.insert(page_index, page);
        self.order.push_back(page_index);
    }

    pub fn get(&mut self, page_index: usize) -> Option<&CachedPage> {
        if self.pages.contains_key(&page_index) {
            self.order.retain(|&k| k != page_index);
            self.order.push_back(page_index);
            self.pages.get(&page_index)
        } else {
            None
        }
    }

    pub fn contains(&self, page_index: usize) -> bool {
        self.pages.contains_key(&page_index)
    }

    pub fn clear(&mut self) {
        self.pages.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> CachedPage {
        CachedPage {
            rgba_data: vec![0; 4],
            width: 1,
            height: 1,
        }
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let mut cache = PageCache::with_capacity(2);
        cache.insert(0, page());
        cache.insert(1, page());

        // Touch 0 so 1 becomes the eviction candidate
        assert!(cache.get(0).is_some());
        cache.insert(2, page());

        assert!(cache.contains(0));
        assert!(!cache.contains(1));
        assert!(cache.contains(2));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_reinsert_does_not_grow() {
        let mut cache = PageCache::with_capacity(3);
        cache.insert(5, page());
        cache.insert(5, page());
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.get(5).is_none());
    }
}
