use std::collections::HashSet;

use depot_types::ContentKey;

use crate::snapshot::InventorySnapshot;

/// The reconciliation decision: which natural keys to add to and remove from
/// the repository to match the remote.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Delta {
    /// Remote keys absent locally.
    pub to_add: HashSet<ContentKey>,
    /// Local keys absent remotely. Empty unless the sync mirrors.
    pub to_remove: HashSet<ContentKey>,
}

impl Delta {
    /// Set-difference remote keys against the local snapshot.
    ///
    /// `to_add = remote − local`. `to_remove = local − remote`, computed only
    /// when `mirror` is set; an additive sync never deletes. Runs in
    /// O(R + L) time and space over the two key counts.
    pub fn compute<I>(remote: I, local: &InventorySnapshot, mirror: bool) -> Self
    where
        I: IntoIterator<Item = ContentKey>,
    {
        let remote_keys: HashSet<ContentKey> = remote.into_iter().collect();
        let to_add = remote_keys.difference(local.keys()).cloned().collect();
        let to_remove = if mirror {
            local.keys().difference(&remote_keys).cloned().collect()
        } else {
            HashSet::new()
        };
        Self { to_add, to_remove }
    }

    /// Returns `true` if local and remote already agree.
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn key(path: &str, digest: &str) -> ContentKey {
        ContentKey::new(path, digest)
    }

    fn snapshot(keys: &[ContentKey]) -> InventorySnapshot {
        keys.iter().cloned().collect()
    }

    #[test]
    fn remote_only_keys_are_added() {
        let local = snapshot(&[key("a.txt", "d1")]);
        let delta = Delta::compute(
            vec![key("a.txt", "d1"), key("b.txt", "d2")],
            &local,
            true,
        );
        assert_eq!(delta.to_add, HashSet::from([key("b.txt", "d2")]));
        assert!(delta.to_remove.is_empty());
    }

    #[test]
    fn local_only_keys_are_removed_under_mirror() {
        let local = snapshot(&[key("a.txt", "d1"), key("old.txt", "dX")]);
        let delta = Delta::compute(vec![key("a.txt", "d1")], &local, true);
        assert!(delta.to_add.is_empty());
        assert_eq!(delta.to_remove, HashSet::from([key("old.txt", "dX")]));
    }

    #[test]
    fn non_mirror_sync_never_removes() {
        let local = snapshot(&[key("old.txt", "dX")]);
        let delta = Delta::compute(vec![key("a.txt", "d1")], &local, false);
        assert_eq!(delta.to_add, HashSet::from([key("a.txt", "d1")]));
        assert!(delta.to_remove.is_empty());
    }

    #[test]
    fn updated_content_is_remove_old_plus_add_new() {
        // Same path, new digest: the update decomposes into two decisions.
        let local = snapshot(&[key("a.txt", "d1")]);
        let delta = Delta::compute(vec![key("a.txt", "d2")], &local, true);
        assert_eq!(delta.to_add, HashSet::from([key("a.txt", "d2")]));
        assert_eq!(delta.to_remove, HashSet::from([key("a.txt", "d1")]));
    }

    #[test]
    fn identical_sets_yield_empty_delta() {
        let keys = vec![key("a.txt", "d1"), key("b.txt", "d2")];
        let local = snapshot(&keys);
        let delta = Delta::compute(keys, &local, true);
        assert!(delta.is_empty());
    }

    #[test]
    fn empty_remote_mirrors_away_the_whole_inventory() {
        let local = snapshot(&[key("a.txt", "d1"), key("b.txt", "d2")]);
        let delta = Delta::compute(Vec::new(), &local, true);
        assert!(delta.to_add.is_empty());
        assert_eq!(delta.to_remove.len(), 2);
    }

    #[test]
    fn first_sync_adds_everything_removes_nothing() {
        let local = InventorySnapshot::default();
        let delta = Delta::compute(vec![key("a.txt", "d1")], &local, true);
        assert_eq!(delta.to_add.len(), 1);
        assert!(delta.to_remove.is_empty());
    }

    #[test]
    fn duplicate_remote_keys_collapse() {
        let local = InventorySnapshot::default();
        let delta = Delta::compute(
            vec![key("a.txt", "d1"), key("a.txt", "d1")],
            &local,
            true,
        );
        assert_eq!(delta.to_add.len(), 1);
    }

    proptest! {
        #[test]
        fn add_and_remove_are_always_disjoint(
            remote in proptest::collection::hash_set("[a-d]\\.txt", 0..8),
            local in proptest::collection::hash_set("[a-d]\\.txt", 0..8),
        ) {
            let remote: Vec<ContentKey> =
                remote.into_iter().map(|p| key(&p, "d")).collect();
            let local: InventorySnapshot =
                local.into_iter().map(|p| key(&p, "d")).collect();
            let delta = Delta::compute(remote, &local, true);
            prop_assert!(delta.to_add.is_disjoint(&delta.to_remove));
        }

        #[test]
        fn delta_algebra_matches_set_difference(
            remote in proptest::collection::hash_set("[a-e]", 0..10),
            local in proptest::collection::hash_set("[a-e]", 0..10),
        ) {
            let remote_keys: HashSet<ContentKey> =
                remote.iter().map(|p| key(p, "d")).collect();
            let local_keys: HashSet<ContentKey> =
                local.iter().map(|p| key(p, "d")).collect();
            let snapshot: InventorySnapshot = local_keys.iter().cloned().collect();
            let delta = Delta::compute(remote_keys.iter().cloned(), &snapshot, true);
            prop_assert_eq!(
                delta.to_add,
                remote_keys.difference(&local_keys).cloned().collect::<HashSet<_>>()
            );
            prop_assert_eq!(
                delta.to_remove,
                local_keys.difference(&remote_keys).cloned().collect::<HashSet<_>>()
            );
        }

        #[test]
        fn recomputing_after_a_mirror_sync_is_empty(
            remote in proptest::collection::hash_set("[a-e]", 0..10),
        ) {
            // After applying a mirror delta, local equals remote; a second
            // run must find nothing to do.
            let remote_keys: Vec<ContentKey> =
                remote.iter().map(|p| key(p, "d")).collect();
            let local: InventorySnapshot = remote_keys.iter().cloned().collect();
            let delta = Delta::compute(remote_keys, &local, true);
            prop_assert!(delta.is_empty());
        }
    }
}
