use crate::{
    Error,
    iter::{Fifo, Lifo},
};

/// A growable LIFO container that can be inspected at any depth without popping.
///
/// Positions count down from the top: `peek(0)` is the most recently pushed item.
///
/// Nothing here is synchronized. Callers sharing a stack across threads must hold their own
/// lock around every structural change (`push`, `pop`, `clear`). Iterators borrow the stack,
/// so it cannot be mutated while one is alive.
pub trait PeekingStack<T> {
    /// Reserve room for at least `new_capacity` items. Never shrinks.
    fn ensure_capacity(&mut self, new_capacity: usize);

    fn capacity(&self) -> usize;

    /// Push an item that may be absent. `None` is rejected with [Error::NullItem] and leaves
    /// the stack untouched.
    fn push_opt(&mut self, item: Option<T>) -> Result<(), Error>;

    /// Push one item onto the top of the stack. Accepts both `T` and `Option<T>`.
    fn push(&mut self, item: impl Into<Option<T>>) -> Result<(), Error>
    where
        Self: Sized,
    {
        self.push_opt(item.into())
    }

    /// Remove and return the top item.
    fn pop(&mut self) -> Result<T, Error>;

    /// Drop every item. Capacity is kept.
    fn clear(&mut self);

    /// Live items, bottom first.
    fn as_slice(&self) -> &[T];

    fn top(&self) -> Result<&T, Error> {
        self.peek(0)
    }

    /// Read the item `pos` slots below the top.
    fn peek(&self, pos: usize) -> Result<&T, Error> {
        let items = self.as_slice();
        let len = items.len();
        if len == 0 {
            return Err(Error::EmptyContainer);
        }
        if pos >= len {
            return Err(Error::OutOfRange { pos, len });
        }
        Ok(&items[len - pos - 1])
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate from the top of the stack down to the bottom.
    fn lifo_iter(&self) -> Lifo<'_, T> {
        Lifo::new(self.as_slice())
    }

    /// Iterate from the bottom of the stack up to the top.
    fn fifo_iter(&self) -> Fifo<'_, T> {
        Fifo::new(self.as_slice())
    }
}

impl<T, S> PeekingStack<T> for Box<S>
where
    S: PeekingStack<T> + ?Sized,
{
    fn ensure_capacity(&mut self, new_capacity: usize) {
        (**self).ensure_capacity(new_capacity)
    }

    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn push_opt(&mut self, item: Option<T>) -> Result<(), Error> {
        (**self).push_opt(item)
    }

    fn pop(&mut self) -> Result<T, Error> {
        (**self).pop()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn as_slice(&self) -> &[T] {
        (**self).as_slice()
    }

    fn peek(&self, pos: usize) -> Result<&T, Error> {
        (**self).peek(pos)
    }
}
