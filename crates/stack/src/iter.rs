use std::iter::FusedIterator;

/// Top-to-bottom iterator. See [crate::PeekingStack::lifo_iter].
#[derive(Clone, Debug)]
pub struct Lifo<'a, T> {
    items: &'a [T],
}

/// Bottom-to-top iterator. See [crate::PeekingStack::fifo_iter].
#[derive(Clone, Debug)]
pub struct Fifo<'a, T> {
    items: &'a [T],
}

/// Owning iterator that drains a stack from the top down.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    inner: std::iter::Rev<std::vec::IntoIter<T>>,
}

impl<'a, T> Lifo<'a, T> {
    /// `items` are stored bottom first.
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }
}

impl<'a, T> Fifo<'a, T> {
    /// `items` are stored bottom first.
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self {
            inner: items.into_iter().rev(),
        }
    }
}

impl<'a, T> Iterator for Lifo<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let (top, rest) = self.items.split_last()?;
        self.items = rest;
        Some(top)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.items.len(), Some(self.items.len()))
    }
}

impl<T> DoubleEndedIterator for Lifo<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (bottom, rest) = self.items.split_first()?;
        self.items = rest;
        Some(bottom)
    }
}

impl<T> ExactSizeIterator for Lifo<'_, T> {}

impl<T> FusedIterator for Lifo<'_, T> {}

impl<'a, T> Iterator for Fifo<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let (bottom, rest) = self.items.split_first()?;
        self.items = rest;
        Some(bottom)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.items.len(), Some(self.items.len()))
    }
}

impl<T> DoubleEndedIterator for Fifo<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (top, rest) = self.items.split_last()?;
        self.items = rest;
        Some(top)
    }
}

impl<T> ExactSizeIterator for Fifo<'_, T> {}

impl<T> FusedIterator for Fifo<'_, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
