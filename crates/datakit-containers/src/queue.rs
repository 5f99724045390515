use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("queue is full (capacity {capacity})")]
    Full { capacity: usize },
}

/// Fixed-capacity FIFO queue over a circular buffer.
///
/// Front and rear cursors wrap modulo the capacity; emptiness and fullness
/// are derived from the element count, so the full capacity is usable.
/// Enqueueing onto a full queue reports [`QueueError::Full`]; dequeueing or
/// peeking an empty queue returns `None`.
///
/// # Examples
///
/// ```
/// use datakit_containers::Queue;
///
/// let mut queue = Queue::with_capacity(2);
/// queue.enqueue('a').unwrap();
/// queue.enqueue('b').unwrap();
/// assert!(queue.enqueue('c').is_err());
///
/// assert_eq!(queue.dequeue(), Some('a'));
/// queue.enqueue('c').unwrap();
/// assert_eq!(queue.dequeue(), Some('b'));
/// assert_eq!(queue.dequeue(), Some('c'));
/// assert_eq!(queue.dequeue(), None);
/// ```
pub struct Queue<T> {
    slots: Vec<Option<T>>,
    front: usize,
    rear: usize,
    count: usize,
}

impl<T> Queue<T> {
    pub const DEFAULT_CAPACITY: usize = 50;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// A zero capacity is bumped to one slot.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            front: 0,
            rear: 0,
            count: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    pub fn enqueue(&mut self, value: T) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::Full {
                capacity: self.slots.len(),
            });
        }
        self.slots[self.rear] = Some(value);
        self.rear = (self.rear + 1) % self.slots.len();
        self.count += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.front].take();
        self.front = (self.front + 1) % self.slots.len();
        self.count -= 1;
        value
    }

    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    /// Front-to-rear rendering plus the cursor positions.
    pub fn print(&self) -> String
    where
        T: std::fmt::Debug,
    {
        let mut items = Vec::with_capacity(self.count);
        for offset in 0..self.count {
            let i = (self.front + offset) % self.slots.len();
            if let Some(value) = &self.slots[i] {
                items.push(format!("{value:?}"));
            }
        }
        format!(
            "[{}] front={} rear={} size={}",
            items.join(", "),
            self.front,
            self.rear,
            self.count
        )
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
