//! Realtime catalog subscription.

use std::rc::Rc;

use crate::backend::{BackendError, Document, DocumentStore, ListenerGuard, catalog_path};
use crate::catalog::{CatalogEntry, catalog_from_documents, default_catalog};

/// Open the realtime catalog query for a namespace. Every snapshot
/// replaces the catalog wholesale with the snapshot's documents; on
/// subscription error the static default catalog is emitted instead and
/// no retry happens until a fresh subscription is opened. Dropping the
/// returned guard releases the subscription.
pub fn subscribe_catalog(
    store: &Rc<dyn DocumentStore>,
    namespace: &str,
    on_catalog: Rc<dyn Fn(Vec<CatalogEntry>)>,
) -> ListenerGuard {
    let path = catalog_path(namespace);
    let on_snapshot = {
        let on_catalog = on_catalog.clone();
        Box::new(move |docs: Vec<Document>| on_catalog(catalog_from_documents(&docs)))
    };
    let on_error = Box::new(move |e: BackendError| {
        log::error!("catalog subscription failed, falling back to defaults: {e}");
        on_catalog(default_catalog());
    });
    store.subscribe(&path, on_snapshot, on_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{ErrorListener, SnapshotListener};
    use async_trait::async_trait;
    use serde_json::json;
    use std::cell::RefCell;

    /// Store fake that captures the listeners so tests can drive snapshot
    /// and error events by hand.
    #[derive(Default)]
    struct ScriptedStore {
        subscribed_paths: RefCell<Vec<String>>,
        listeners: Rc<RefCell<Option<(SnapshotListener, ErrorListener)>>>,
    }

    #[async_trait(?Send)]
    impl DocumentStore for ScriptedStore {
        fn subscribe(
            &self,
            path: &str,
            on_snapshot: SnapshotListener,
            on_error: ErrorListener,
        ) -> ListenerGuard {
            self.subscribed_paths.borrow_mut().push(path.to_string());
            *self.listeners.borrow_mut() = Some((on_snapshot, on_error));
            let listeners = self.listeners.clone();
            ListenerGuard::new(move || *listeners.borrow_mut() = None)
        }

        async fn write_document(
            &self,
            _path: &str,
            _doc_id: &str,
            _fields: serde_json::Value,
        ) -> Result<(), BackendError> {
            Ok(())
        }

        fn new_document_id(&self) -> String {
            "unused".to_string()
        }
    }

    fn subscribe_collecting(
        store: &Rc<ScriptedStore>,
    ) -> (ListenerGuard, Rc<RefCell<Vec<Vec<CatalogEntry>>>>) {
        let seen: Rc<RefCell<Vec<Vec<CatalogEntry>>>> = Rc::default();
        let sink = seen.clone();
        let handle: Rc<dyn DocumentStore> = store.clone();
        let guard = subscribe_catalog(
            &handle,
            "shop",
            Rc::new(move |catalog| sink.borrow_mut().push(catalog)),
        );
        (guard, seen)
    }

    #[test]
    fn subscription_targets_the_namespaced_catalog_path() {
        let store = Rc::new(ScriptedStore::default());
        let (_guard, _seen) = subscribe_collecting(&store);
        assert_eq!(
            *store.subscribed_paths.borrow(),
            vec!["artifacts/shop/public/data/books".to_string()]
        );
    }

    #[test]
    fn each_snapshot_replaces_the_catalog_wholesale() {
        let store = Rc::new(ScriptedStore::default());
        let (_guard, seen) = subscribe_collecting(&store);

        let fire = |docs: Vec<Document>| {
            let mut listeners = store.listeners.borrow_mut();
            let (on_snapshot, _) = listeners.as_mut().expect("subscription active");
            on_snapshot(docs);
        };
        fire(vec![Document {
            id: "a".to_string(),
            fields: json!({ "title": "A", "description": "", "price": 1 }),
        }]);
        fire(vec![Document {
            id: "b".to_string(),
            fields: json!({ "title": "B", "description": "", "price": 2 }),
        }]);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].len(), 1);
        assert_eq!(seen[0][0].id, "a");
        assert_eq!(seen[1][0].id, "b");
    }

    #[test]
    fn subscription_error_emits_the_default_catalog() {
        let store = Rc::new(ScriptedStore::default());
        let (_guard, seen) = subscribe_collecting(&store);

        {
            let mut listeners = store.listeners.borrow_mut();
            let (_, on_error) = listeners.as_mut().expect("subscription active");
            on_error(BackendError::Subscription("permission denied".to_string()));
        }

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], default_catalog());
    }

    #[test]
    fn dropping_the_guard_releases_the_subscription() {
        let store = Rc::new(ScriptedStore::default());
        let (guard, _seen) = subscribe_collecting(&store);
        assert!(store.listeners.borrow().is_some());
        drop(guard);
        assert!(store.listeners.borrow().is_none());
    }
}
