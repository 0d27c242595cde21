//! Recency List Module
//!
//! Arena-backed doubly linked list ordering entries by access time.

use crate::cache::Entry;

// == Recency List ==
/// Orders entries from most to least recently used.
///
/// Entries live in a slot arena and link to each other by slot handle:
/// - `head` = Most recently used
/// - `tail` = Least recently used
///
/// A handle stays valid until its entry is removed; vacated slots are
/// reused by later insertions.
#[derive(Debug, Default)]
pub struct RecencyList {
    /// Entry storage, `None` marks a vacated slot
    slots: Vec<Option<Entry>>,
    /// Vacated slots available for reuse
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl RecencyList {
    // == Constructor ==
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    // == Push Front ==
    /// Inserts an entry as the new head and returns its handle.
    pub fn push_front(&mut self, mut entry: Entry) -> usize {
        entry.prev = None;
        entry.next = self.head;

        let handle = match self.free.pop() {
            Some(handle) => {
                self.slots[handle] = Some(entry);
                handle
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        };

        match self.head {
            Some(old_head) => self.link_mut(old_head).prev = Some(handle),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
        self.len += 1;
        handle
    }

    // == Move To Front ==
    /// Marks an entry as most recently used.
    ///
    /// No-op when the entry already is the head, which includes the
    /// single-entry list.
    pub fn move_to_front(&mut self, handle: usize) {
        if self.head == Some(handle) {
            return;
        }

        self.unlink(handle);

        let old_head = self.head;
        let node = self.link_mut(handle);
        node.prev = None;
        node.next = old_head;

        match old_head {
            Some(old_head) => self.link_mut(old_head).prev = Some(handle),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
    }

    // == Remove ==
    /// Splices an entry out of the list and returns it.
    ///
    /// Returns None if the handle does not refer to a live entry.
    pub fn remove(&mut self, handle: usize) -> Option<Entry> {
        self.slots.get(handle)?.as_ref()?;

        self.unlink(handle);
        let mut entry = self.slots[handle].take()?;
        entry.prev = None;
        entry.next = None;
        self.free.push(handle);
        self.len -= 1;
        Some(entry)
    }

    // == Accessors ==
    /// Handle of the most recently used entry.
    pub fn head(&self) -> Option<usize> {
        self.head
    }

    /// Handle of the least recently used entry.
    pub fn tail(&self) -> Option<usize> {
        self.tail
    }

    pub fn get(&self, handle: usize) -> Option<&Entry> {
        self.slots.get(handle).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, handle: usize) -> Option<&mut Entry> {
        self.slots.get_mut(handle).and_then(Option::as_mut)
    }

    /// Returns the number of linked entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Iteration ==
    /// Iterates entries from head (newest) to tail (oldest).
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    // == Clear ==
    /// Drops every entry and resets the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Internal Helpers ==
    /// Detaches an entry from its neighbours, rewiring `head`/`tail` when
    /// the entry sits at either end. The entry's own links are left stale.
    fn unlink(&mut self, handle: usize) {
        let (prev, next) = match self.get(handle) {
            Some(entry) => (entry.prev, entry.next),
            None => return,
        };

        match prev {
            Some(prev) => self.link_mut(prev).next = next,
            None => self.head = next,
        }

        match next {
            Some(next) => self.link_mut(next).prev = prev,
            None => self.tail = prev,
        }
    }

    /// Mutable access to a slot that the list links guarantee is occupied.
    fn link_mut(&mut self, handle: usize) -> &mut Entry {
        match self.slots[handle].as_mut() {
            Some(entry) => entry,
            None => unreachable!("recency list links to vacated slot {handle}"),
        }
    }
}

// == Iterator ==
/// Head-to-tail iterator over a [`RecencyList`].
pub struct Iter<'a> {
    list: &'a RecencyList,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a Entry);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.cursor?;
        let entry = self.list.get(handle)?;
        self.cursor = entry.next;
        Some((handle, entry))
    }
}
