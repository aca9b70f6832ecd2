//! Single-writer, many-reader holder for the current catalog snapshot.

use std::sync::Arc;

use tokio::sync::watch;

use crate::Catalog;

/// Publishes the latest [`Catalog`] to readers.
///
/// Snapshots are swapped whole: a reader that got an `Arc<Catalog>` keeps a
/// consistent view no matter how many updates land afterwards. Subscribers
/// are woken once per replacement.
#[derive(Clone)]
pub struct CatalogStore {
    tx: Arc<watch::Sender<Arc<Catalog>>>,
}

impl CatalogStore {
    /// Creates a store holding `initial`.
    #[must_use]
    pub fn new(initial: Catalog) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(initial));
        Self { tx: Arc::new(tx) }
    }

    /// The current snapshot.
    #[must_use]
    pub fn current(&self) -> Arc<Catalog> {
        Arc::clone(&*self.tx.borrow())
    }

    /// Replaces the current snapshot and notifies subscribers.
    pub fn replace(&self, next: Catalog) -> Arc<Catalog> {
        let next = Arc::new(next);
        self.tx.send_replace(Arc::clone(&next));
        next
    }

    /// Derives the next snapshot from the current one and publishes it.
    pub fn advance(&self, step: impl FnOnce(&Catalog) -> Catalog) -> Arc<Catalog> {
        let current = self.current();
        self.replace(step(&current))
    }

    /// A receiver that observes every future replacement.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<Catalog>> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ward_air_catalog::catalog_by_id;

    use super::*;
    use crate::step_catalog;

    fn store() -> CatalogStore {
        let definition = catalog_by_id("delhi_ncr").unwrap();
        CatalogStore::new(Catalog::build(&definition, &mut StdRng::seed_from_u64(1)))
    }

    #[test]
    fn old_snapshot_survives_replacement() {
        let store = store();
        let held = store.current();

        let mut rng = StdRng::seed_from_u64(2);
        store.advance(|c| step_catalog(c, &mut rng));

        assert_eq!(held.tick, 0);
        assert_eq!(store.current().tick, 1);
        assert_ne!(held.wards, store.current().wards);
    }

    #[tokio::test]
    async fn subscribers_see_each_replacement() {
        let store = store();
        let mut rx = store.subscribe();

        let mut rng = StdRng::seed_from_u64(3);
        store.advance(|c| step_catalog(c, &mut rng));

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().tick, 1);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn clones_share_the_same_cell() {
        let store = store();
        let reader = store.clone();

        let mut rng = StdRng::seed_from_u64(4);
        store.advance(|c| step_catalog(c, &mut rng));

        assert_eq!(reader.current().tick, 1);
    }
}
