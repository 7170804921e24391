use crate::{
    Error, Options, PeekingStack,
    iter::{IntoIter, Lifo},
};

/// A [PeekingStack] backed by a `Vec`, doubling its capacity whenever it is full.
///
/// Popped and cleared items are moved out of the backing storage immediately, so the stack
/// never keeps a value alive past its logical lifetime.
#[derive(Debug)]
pub struct VecStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> VecStack<T> {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self::with_options(Options { initial_capacity })
    }

    pub fn with_options(options: Options) -> Self {
        let capacity = options.initial_capacity.max(1);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    fn grow(&mut self) {
        let old = self.capacity;
        self.capacity += old;
        self.items.reserve_exact(self.capacity - self.items.len());
        tracing::trace!(old, new = self.capacity, "doubled stack capacity");
    }

    fn push_item(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.grow();
        }
        debug_assert!(self.items.len() < self.capacity);
        self.items.push(item);
    }
}

impl<T> PeekingStack<T> for VecStack<T> {
    fn ensure_capacity(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity {
            return;
        }
        self.items.reserve_exact(new_capacity - self.items.len());
        tracing::trace!(old = self.capacity, new = new_capacity, "reserved stack capacity");
        self.capacity = new_capacity;
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn push_opt(&mut self, item: Option<T>) -> Result<(), Error> {
        let Some(item) = item else {
            return Err(Error::NullItem);
        };
        self.push_item(item);
        Ok(())
    }

    fn pop(&mut self) -> Result<T, Error> {
        self.items.pop().ok_or(Error::EmptyContainer)
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> Clone for VecStack<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
        }
    }
}

impl<T> Default for VecStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for VecStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_item(item);
        }
    }
}

impl<T> FromIterator<T> for VecStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<'a, T> IntoIterator for &'a VecStack<T> {
    type Item = &'a T;
    type IntoIter = Lifo<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.lifo_iter()
    }
}

impl<T> IntoIterator for VecStack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.items)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use rand::{Rng, SeedableRng, rngs::StdRng};

    use crate::{Error, INITIAL_CAPACITY, Options, PeekingStack, VecStack};

    #[test]
    fn push_peek_iterate() {
        let mut stack: VecStack<i32> = VecStack::new();
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();
        assert_eq!(stack.top(), Ok(&3));
        assert_eq!(stack.peek(0), stack.top());
        assert_eq!(stack.peek(1), Ok(&2));
        assert_eq!(stack.peek(2), Ok(&1));
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.lifo_iter().collect::<Vec<_>>(), [&3, &2, &1]);
        assert_eq!(stack.fifo_iter().collect::<Vec<_>>(), [&1, &2, &3]);
        assert!(!stack.is_empty());

        // iterating does not consume the stack and can be restarted
        assert_eq!(stack.lifo_iter().count(), 3);
        assert_eq!((&stack).into_iter().collect::<Vec<_>>(), [&3, &2, &1]);
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn pop_after_push() {
        let mut stack: VecStack<i32> = VecStack::new();
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(0), Ok(&1));
    }

    #[test]
    fn doubles_when_full() {
        let mut stack: VecStack<u32> = VecStack::with_capacity(2);
        assert_eq!(stack.capacity(), 2);
        for value in 10u32..15 {
            stack.push(value).unwrap();
        }
        assert_eq!(stack.capacity(), 8);
        for (pos, value) in (10u32..15).rev().enumerate() {
            assert_eq!(stack.peek(pos), Ok(&value));
        }

        let mut stack: VecStack<u32> = VecStack::new();
        assert_eq!(stack.capacity(), INITIAL_CAPACITY);
        for value in 0u32..17 {
            stack.push(value).unwrap();
        }
        assert_eq!(stack.capacity(), 2 * INITIAL_CAPACITY);
    }

    #[test]
    fn zero_capacity_still_grows() {
        let mut stack: VecStack<u32> = VecStack::with_options(Options {
            initial_capacity: 0,
        });
        assert_eq!(stack.capacity(), 1);
        stack.push(1u32).unwrap();
        stack.push(2u32).unwrap();
        stack.push(3u32).unwrap();
        assert_eq!(stack.capacity(), 4);
    }

    #[test]
    fn ensure_capacity_never_shrinks() {
        let mut stack: VecStack<u32> = VecStack::with_capacity(4);
        stack.ensure_capacity(2);
        assert_eq!(stack.capacity(), 4);
        stack.ensure_capacity(100);
        assert_eq!(stack.capacity(), 100);
        for value in 0u32..100 {
            stack.push(value).unwrap();
        }
        assert_eq!(stack.capacity(), 100);
        stack.push(100u32).unwrap();
        assert_eq!(stack.capacity(), 200);
    }

    #[test]
    fn empty_stack_errors() {
        let mut stack: VecStack<i32> = VecStack::new();
        assert_eq!(stack.pop(), Err(Error::EmptyContainer));
        assert_eq!(stack.top(), Err(Error::EmptyContainer));
        assert_eq!(stack.peek(0), Err(Error::EmptyContainer));
        assert_eq!(stack.peek(1), Err(Error::EmptyContainer));
        assert_eq!(stack.lifo_iter().next(), None);
        assert_eq!(stack.fifo_iter().next(), None);
    }

    #[test]
    fn null_item_leaves_stack_untouched() {
        let mut stack: VecStack<i32> = VecStack::new();
        stack.push(7).unwrap();
        assert_eq!(stack.push(Option::<i32>::None), Err(Error::NullItem));
        assert_eq!(stack.push_opt(None), Err(Error::NullItem));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.top(), Ok(&7));
        stack.push(Some(8)).unwrap();
        assert_eq!(stack.top(), Ok(&8));
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut stack: VecStack<i32> = VecStack::with_capacity(2);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.capacity(), 4);
        assert_eq!(stack.pop(), Err(Error::EmptyContainer));
        stack.push(9).unwrap();
        assert_eq!(stack.pop(), Ok(9));
    }

    #[test]
    fn popped_and_cleared_items_are_released() {
        let item = Rc::new(0u8);
        let mut stack: VecStack<Rc<u8>> = VecStack::new();
        stack.push(item.clone()).unwrap();
        stack.push(item.clone()).unwrap();
        assert_eq!(Rc::strong_count(&item), 3);
        drop(stack.pop());
        assert_eq!(Rc::strong_count(&item), 2);
        stack.push(item.clone()).unwrap();
        stack.clear();
        assert_eq!(Rc::strong_count(&item), 1);
    }

    #[test]
    fn reverse_order_round_trip() {
        let pushed: Vec<u64> = (0..1000).map(|n| n * 7 % 13).collect();
        let mut stack: VecStack<u64> = VecStack::with_capacity(3);
        for value in &pushed {
            stack.push(*value).unwrap();
        }
        let mut popped = vec![];
        while let Ok(value) = stack.pop() {
            popped.push(value);
        }
        popped.reverse();
        assert_eq!(popped, pushed);
    }

    #[test]
    fn collect_extend_and_drain() {
        let mut stack: VecStack<char> = "abc".chars().collect();
        assert_eq!(stack.top(), Ok(&'c'));
        stack.extend(['d', 'e']);
        assert_eq!(stack.fifo_iter().collect::<String>(), "abcde");

        let copy = stack.clone();
        assert_eq!(copy.capacity(), stack.capacity());
        assert_eq!(stack.into_iter().collect::<String>(), "edcba");
        assert_eq!(copy.len(), 5);
    }

    #[test]
    fn matches_vec_model() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut model: Vec<u32> = vec![];
        let mut stack: VecStack<u32> = VecStack::with_capacity(1);
        for _ in 0..10_000 {
            match rng.gen_range(0..10) {
                0..=4 => {
                    let value = rng.gen_range(0..1000);
                    stack.push(value).unwrap();
                    model.push(value);
                }
                5..=7 => match model.pop() {
                    Some(value) => assert_eq!(stack.pop(), Ok(value)),
                    None => assert_eq!(stack.pop(), Err(Error::EmptyContainer)),
                },
                8 => {
                    let pos = rng.gen_range(0..model.len() + 2);
                    let expected = match model.len() {
                        0 => Err(Error::EmptyContainer),
                        len if pos >= len => Err(Error::OutOfRange { pos, len }),
                        len => Ok(&model[len - pos - 1]),
                    };
                    assert_eq!(stack.peek(pos), expected);
                }
                _ => {
                    if rng.gen_bool(0.05) {
                        stack.clear();
                        model.clear();
                    }
                }
            }
            assert_eq!(stack.len(), model.len());
            assert!(stack.len() <= stack.capacity());
            assert!(stack.capacity().is_power_of_two());
        }
        assert!(stack.lifo_iter().eq(model.iter().rev()));
        assert!(stack.fifo_iter().eq(model.iter()));
        assert_eq!(stack.lifo_iter().len(), stack.len());
    }
}
