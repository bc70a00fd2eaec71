use derive_more::IntoIterator;

///
/// Wherable
///
/// The single extension point of the chain contract. A context wraps an
/// ordered item sequence; `where_by` filters it into a freshly
/// constructed context of the same concrete type, so every method a
/// concrete context defines, built-in or custom, survives any chain.
///
/// `from_items` is the polymorphic "construct another one like me"
/// operation; implementors provide it once and inherit the rest.
///

pub trait Wherable: Sized {
    type Item: Clone;

    /// Construct a fresh context of the same concrete type over `items`.
    fn from_items(items: Vec<Self::Item>) -> Self;

    /// Read access to the wrapped item sequence.
    fn items(&self) -> &[Self::Item];

    #[must_use]
    fn count(&self) -> usize {
        self.items().len()
    }

    #[must_use]
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Stable filter: keeps the items satisfying `predicate`, in their
    /// original order, never mutating the source sequence.
    #[must_use]
    fn where_by<P>(&self, predicate: P) -> Self
    where
        P: Fn(&Self::Item) -> bool,
    {
        let kept = self
            .items()
            .iter()
            .filter(|&item| predicate(item))
            .cloned()
            .collect();

        Self::from_items(kept)
    }
}

///
/// Chain
///
/// Base context over an ordered item sequence. Concrete vocabularies
/// either use it directly or embed it in their own context type and
/// delegate `from_items`/`items`.
///

#[derive(Clone, Debug, IntoIterator)]
pub struct Chain<T> {
    #[into_iterator(owned, ref)]
    items: Vec<T>,
}

impl<T> Chain<T> {
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> Wherable for Chain<T> {
    type Item = T;

    fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    fn items(&self) -> &[T] {
        &self.items
    }
}
