//! A name-keyed table of constructors for implementations of a shared interface.
//!
//! ## Usage
//!
//! ```rs
//! use peekstack_registry::Registry;
//!
//! let mut registry: Registry<dyn Shape> = Registry::new();
//! registry.register_default("circle", || Box::new(Circle::default()))?;
//! registry.register("square", || Box::new(Square::default()))?;
//!
//! let shape = registry.get_default()?;
//! let square = registry.named("square")?;
//! ```
use ahash::AHashMap;

pub mod error;
pub use error::Error;

type Constructor<S> = Box<dyn Fn() -> Box<S> + Send + Sync>;

struct Entry<S: ?Sized> {
    name: String,
    make: Constructor<S>,
}

/// Constructors of `S`, looked up by name, registration order, or the default marker.
pub struct Registry<S: ?Sized> {
    entries: Vec<Entry<S>>,
    by_name: AHashMap<String, usize>,
    default: Option<usize>,
}

impl<S: ?Sized> Registry<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_name: AHashMap::new(),
            default: None,
        }
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        make: impl Fn() -> Box<S> + Send + Sync + 'static,
    ) -> Result<(), Error> {
        self.insert(name.into(), Box::new(make)).map(|_| ())
    }

    /// Register a constructor and mark it as the default. Only one default may exist.
    pub fn register_default(
        &mut self,
        name: impl Into<String>,
        make: impl Fn() -> Box<S> + Send + Sync + 'static,
    ) -> Result<(), Error> {
        if let Some(index) = self.default {
            return Err(Error::DefaultAlreadySet(self.entries[index].name.clone()));
        }
        let index = self.insert(name.into(), Box::new(make))?;
        self.default = Some(index);
        Ok(())
    }

    fn insert(&mut self, name: String, make: Constructor<S>) -> Result<usize, Error> {
        if self.by_name.contains_key(&name) {
            return Err(Error::Duplicate(name));
        }
        let index = self.entries.len();
        tracing::debug!(name = %name, index, "registered");
        self.by_name.insert(name.clone(), index);
        self.entries.push(Entry { name, make });
        Ok(index)
    }

    /// Build the first registered entry.
    pub fn first(&self) -> Result<Box<S>, Error> {
        let entry = self.entries.first().ok_or(Error::Empty)?;
        tracing::debug!(name = %entry.name, "resolved first");
        Ok((entry.make)())
    }

    /// Build the only registered entry, failing if there are zero or several.
    pub fn single(&self) -> Result<Box<S>, Error> {
        if self.entries.len() != 1 {
            return Err(Error::NotSingle(self.entries.len()));
        }
        self.first()
    }

    pub fn get_default(&self) -> Result<Box<S>, Error> {
        let index = self.default.ok_or(Error::NoDefault)?;
        let entry = &self.entries[index];
        tracing::debug!(name = %entry.name, "resolved default");
        Ok((entry.make)())
    }

    pub fn named(&self, name: &str) -> Result<Box<S>, Error> {
        let Some(&index) = self.by_name.get(name) else {
            return Err(Error::Unknown(name.to_owned()));
        };
        tracing::debug!(name, "resolved by name");
        Ok((self.entries[index].make)())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn default_name(&self) -> Option<&str> {
        self.default.map(|index| self.entries[index].name.as_str())
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: ?Sized> Default for Registry<S> {
    fn default() -> Self {
        Self::new()
    }
}
