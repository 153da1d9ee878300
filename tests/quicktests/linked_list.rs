use classic_ds::{DoublyLinkedList, NotFound};
use quickcheck::quickcheck;

use crate::init_logging;

fn one_to_five() -> DoublyLinkedList<i32> {
    let mut list = DoublyLinkedList::new();
    for value in 1..=5 {
        list.add(value);
    }
    list
}

#[test]
fn remove_head_then_tail_then_missing() {
    init_logging();
    let mut list = one_to_five();

    assert_eq!(list.remove(1), Ok(1));
    assert_eq!(list.to_vec(), [&2, &3, &4, &5]);

    assert_eq!(list.remove(5), Ok(5));
    assert_eq!(list.to_vec(), [&2, &3, &4]);

    assert_eq!(list.remove(99), Err(NotFound(99)));
    assert_eq!(list.to_vec(), [&2, &3, &4]);
}

#[test]
fn single_element_list() {
    init_logging();
    let mut list = DoublyLinkedList::new();
    list.add(1);

    assert_eq!(list.remove(2), Err(NotFound(2)));
    assert_eq!(list.to_vec(), [&1]);

    assert_eq!(list.remove(1), Ok(1));
    assert!(list.to_vec().is_empty());
}

#[test]
fn not_found_is_an_error() {
    let mut list = DoublyLinkedList::<&str>::new();

    let err: Box<dyn std::error::Error> = Box::new(list.remove("missing").unwrap_err());
    assert_eq!(err.to_string(), "value not found in list");
}

quickcheck! {
    fn remove_on_empty_is_not_found(x: i32) -> bool {
        init_logging();
        let mut list = DoublyLinkedList::new();

        list.remove(x) == Err(NotFound(x)) && list.is_empty()
    }
}

quickcheck! {
    fn to_vec_preserves_insertion_order(xs: Vec<i32>) -> bool {
        let list: DoublyLinkedList<_> = xs.iter().copied().collect();

        list.to_vec() == xs.iter().collect::<Vec<_>>()
            && list.iter().rev().eq(xs.iter().rev())
    }
}

quickcheck! {
    fn remove_everything_empties_the_list(xs: Vec<i8>) -> bool {
        let mut list: DoublyLinkedList<_> = xs.iter().copied().collect();

        xs.iter().all(|x| list.remove(*x) == Ok(*x)) && list.is_empty()
    }
}
