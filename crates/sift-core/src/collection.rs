use crate::chain::Wherable;
use derive_more::Deref;

///
/// Collection
///
/// User-facing pairing of an item sequence with its bound chain
/// context. The context owns the sequence; the collection fixes which
/// concrete context a caller starts from. Callers must not mutate the
/// items they passed in after construction (by convention, not
/// enforcement).
///

#[derive(Clone, Debug, Deref)]
pub struct Collection<C: Wherable> {
    chain: C,
}

impl<C: Wherable> Collection<C> {
    #[must_use]
    pub fn new(items: Vec<C::Item>) -> Self {
        Self {
            chain: C::from_items(items),
        }
    }

    /// The bound chain context; every filter call starts here.
    #[must_use]
    pub const fn chain(&self) -> &C {
        &self.chain
    }

    #[must_use]
    pub fn items(&self) -> &[C::Item] {
        self.chain.items()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.chain.count()
    }
}
