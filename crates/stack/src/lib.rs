//! A growable stack that can be read at any depth and walked in either direction without
//! popping.
//!
//! ## Usage
//!
//! ```rs
//! use peekstack::PeekingStack;
//!
//! let mut stack = peekstack::of_capacity::<u32>(2);
//! stack.push(1)?;
//! stack.push(2)?;
//! stack.push(3)?; // capacity doubles to 4
//!
//! assert_eq!(stack.top()?, &3);
//! assert_eq!(stack.peek(2)?, &1);
//!
//! let top_down: Vec<_> = stack.lifo_iter().collect();  // [3, 2, 1]
//! let bottom_up: Vec<_> = stack.fifo_iter().collect(); // [1, 2, 3]
//! ```
//!
//! Implementations can also be resolved by name:
//!
//! ```rs
//! let mut registry = peekstack::Registry::new();
//! peekstack::register::<u32>(&mut registry)?;
//! let stack = registry.get_default()?;
//! ```
pub mod error;
pub mod iter;
pub mod options;
pub mod stack;
pub mod vec_stack;

pub use error::Error;
pub use iter::{Fifo, IntoIter, Lifo};
pub use options::{INITIAL_CAPACITY, Options};
pub use registry::Registry;
pub use stack::PeekingStack;
pub use vec_stack::VecStack;

/// Name [VecStack] is registered under by [register].
pub const VEC_STACK: &str = "VEC_STACK";

/// Create an empty stack with the default initial capacity.
pub fn of<T>() -> VecStack<T> {
    VecStack::new()
}

pub fn of_capacity<T>(initial_capacity: usize) -> VecStack<T> {
    VecStack::with_capacity(initial_capacity)
}

/// Register the stacks provided by this crate, marking [VecStack] as the default.
pub fn register<T: 'static>(
    registry: &mut Registry<dyn PeekingStack<T>>,
) -> Result<(), registry::Error> {
    registry.register_default(VEC_STACK, || Box::new(VecStack::<T>::new()))
}
