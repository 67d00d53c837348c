//! Unit tests for `PersistentList`.

use evergreen::persistent::PersistentList;
use evergreen::typeclass::{Foldable, Functor};
use rstest::rstest;

#[rstest]
fn test_new_creates_empty_list() {
    let list: PersistentList<i32> = PersistentList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.head(), None);
}

#[rstest]
fn test_cons_prepends_element() {
    let list = PersistentList::new().cons(3).cons(2).cons(1);
    assert_eq!(list.len(), 3);
    assert_eq!(list.head(), Some(&1));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[rstest]
fn test_tail_of_empty_is_empty() {
    let list: PersistentList<i32> = PersistentList::new();
    assert!(list.tail().is_empty());
}

#[rstest]
fn test_uncons_splits_head_and_tail() {
    let list = PersistentList::new().cons(2).cons(1);
    let (head, tail) = list.uncons().unwrap();
    assert_eq!(head, &1);
    assert_eq!(tail.len(), 1);
    assert_eq!(tail.head(), Some(&2));
    assert!(PersistentList::<i32>::new().uncons().is_none());
}

#[rstest]
fn test_get_by_index() {
    let list: PersistentList<i32> = vec![10, 20, 30].into_iter().collect();
    assert_eq!(list.get(0), Some(&10));
    assert_eq!(list.get(2), Some(&30));
    assert_eq!(list.get(3), None);
}

#[rstest]
fn test_structural_sharing_of_tails() {
    let shared = PersistentList::new().cons(3).cons(2);
    let left = shared.cons(1);
    let right = shared.cons(0);

    // Both extensions see the shared suffix; neither sees the other's head.
    assert_eq!(left.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(right.iter().copied().collect::<Vec<_>>(), vec![0, 2, 3]);
    assert_eq!(shared.len(), 2);
}

#[rstest]
fn test_reverse() {
    let list: PersistentList<i32> = vec![1, 2, 3].into_iter().collect();
    let reversed = list.reverse();
    assert_eq!(reversed.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    // original untouched
    assert_eq!(list.head(), Some(&1));
    assert!(PersistentList::<i32>::new().reverse().is_empty());
}

#[rstest]
fn test_append_preserves_order_and_shares_suffix() {
    let first: PersistentList<i32> = vec![1, 2].into_iter().collect();
    let second: PersistentList<i32> = vec![3, 4].into_iter().collect();
    let joined = first.append(&second);
    assert_eq!(joined.len(), 4);
    assert_eq!(joined.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
}

#[rstest]
fn test_from_iterator_preserves_order() {
    let list: PersistentList<i32> = (1..=5).collect();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn test_into_iterator_yields_owned_elements() {
    let list: PersistentList<String> = vec!["a".to_string(), "b".to_string()].into_iter().collect();
    let collected: Vec<String> = list.into_iter().collect();
    assert_eq!(collected, vec!["a".to_string(), "b".to_string()]);
}

#[rstest]
fn test_equality_ignores_sharing_history() {
    let built = PersistentList::new().cons(2).cons(1);
    let collected: PersistentList<i32> = vec![1, 2].into_iter().collect();
    assert_eq!(built, collected);
    assert_ne!(built, PersistentList::new().cons(1));
}

#[rstest]
fn test_fmap_and_fold() {
    let list: PersistentList<i32> = vec![1, 2, 3].into_iter().collect();
    let doubled = list.clone().fmap(|value| value * 2);
    assert_eq!(doubled.iter().copied().collect::<Vec<_>>(), vec![2, 4, 6]);
    assert_eq!(list.fold_left(0, |accumulator, element| accumulator + element), 6);
}

#[rstest]
fn test_long_shared_list_drops_without_overflow() {
    // A deep list whose tail is shared with a second handle; dropping
    // either handle must not recurse through every node.
    let mut list = PersistentList::new();
    for index in 0..200_000 {
        list = list.cons(index);
    }
    let shared = list.clone();
    drop(list);
    assert_eq!(shared.len(), 200_000);
    drop(shared);
}
