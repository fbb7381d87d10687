use dynamic_list::{DynamicList, ListError, DEFAULT_CAPACITY};
use proptest::prelude::*;

fn elements() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..64)
}

proptest! {
    #[test]
    fn set_then_get(values in elements(), index in any::<prop::sample::Index>(), value in any::<u8>()) {
        prop_assume!(!values.is_empty());
        let index = index.index(values.len());
        let mut list = DynamicList::from(values.clone());

        prop_assert_eq!(list.set(index, value), Ok(values[index]));
        prop_assert_eq!(list.get(index), Ok(&value));
        prop_assert_eq!(list.len(), values.len());
    }

    #[test]
    fn append_matches_insert_at_len(values in elements()) {
        let mut appended = DynamicList::new();
        let mut inserted = DynamicList::new();
        for &value in &values {
            prop_assert!(appended.append(value));
            inserted.insert(inserted.len(), value).unwrap();
        }
        prop_assert_eq!(appended.as_slice(), values.as_slice());
        prop_assert_eq!(&appended, &inserted);
        prop_assert_eq!(appended.capacity(), inserted.capacity());
    }

    #[test]
    fn insert_shifts_the_tail(values in elements(), index in any::<prop::sample::Index>(), value in any::<u8>()) {
        let index = index.index(values.len() + 1);
        let mut list = DynamicList::from(values.clone());
        list.insert(index, value).unwrap();

        prop_assert_eq!(list.len(), values.len() + 1);
        prop_assert_eq!(list.get(index), Ok(&value));
        prop_assert_eq!(&list.as_slice()[..index], &values[..index]);
        prop_assert_eq!(&list.as_slice()[index + 1..], &values[index..]);
    }

    #[test]
    fn remove_at_shifts_the_tail(values in elements(), index in any::<prop::sample::Index>()) {
        prop_assume!(!values.is_empty());
        let index = index.index(values.len());
        let mut list = DynamicList::from(values.clone());

        prop_assert_eq!(list.remove_at(index), Ok(values[index]));
        let mut expected = values.clone();
        expected.remove(index);
        prop_assert_eq!(list.as_slice(), expected.as_slice());
    }

    #[test]
    fn remove_value_removes_one_occurrence(values in elements(), value in any::<u8>()) {
        let mut list = DynamicList::from(values.clone());
        let mut expected = values.clone();
        while let Some(position) = expected.iter().position(|&element| element == value) {
            prop_assert!(list.remove_value(&value));
            expected.remove(position);
            prop_assert_eq!(list.as_slice(), expected.as_slice());
        }
        prop_assert!(!list.remove_value(&value));
    }

    #[test]
    fn insert_all_splices(values in elements(), extra in elements(), index in any::<prop::sample::Index>()) {
        let index = index.index(values.len() + 1);
        let mut list = DynamicList::from(values.clone());
        prop_assert_eq!(
            list.insert_all(index, extra.clone()),
            Ok(!extra.is_empty())
        );

        let mut expected = values[..index].to_vec();
        expected.extend(&extra);
        expected.extend(&values[index..]);
        prop_assert_eq!(list.as_slice(), expected.as_slice());
    }

    #[test]
    fn retain_all_matches_retain(values in elements(), keep in elements()) {
        let mut list = DynamicList::from(values.clone());
        let mut expected = values.clone();
        expected.retain(|value| keep.contains(value));

        prop_assert_eq!(list.retain_all(&keep), expected.len() != values.len());
        prop_assert_eq!(list.as_slice(), expected.as_slice());
    }

    #[test]
    fn index_of_scans_from_each_end(values in elements(), value in any::<u8>()) {
        let list = DynamicList::from(values.clone());
        prop_assert_eq!(list.index_of(&value), values.iter().position(|&v| v == value));
        prop_assert_eq!(list.last_index_of(&value), values.iter().rposition(|&v| v == value));
        prop_assert_eq!(list.contains(&value), values.contains(&value));
    }

    #[test]
    fn clear_resets_capacity(values in elements()) {
        let mut list = DynamicList::from(values);
        list.clear();
        prop_assert!(list.is_empty());
        prop_assert_eq!(list.capacity(), DEFAULT_CAPACITY);

        for _ in 0..DEFAULT_CAPACITY {
            list.append(0);
        }
        prop_assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        list.append(0);
        prop_assert_eq!(list.capacity(), 19);
    }

    #[test]
    fn cursor_round_trip(values in elements(), start in any::<prop::sample::Index>()) {
        prop_assume!(!values.is_empty());
        let start = start.index(values.len());
        let mut list = DynamicList::from(values.clone());
        let mut cursor = list.cursor_at(start).unwrap();

        let forward = *cursor.next().unwrap();
        let backward = *cursor.previous().unwrap();
        prop_assert_eq!(forward, values[start]);
        prop_assert_eq!(forward, backward);
        prop_assert_eq!(cursor.next_index(), start);
    }
}

#[test]
fn capacity_boundaries() {
    let mut list = DynamicList::new();
    let mut boundaries = Vec::new();
    for value in 0..41_u32 {
        let before = list.capacity();
        list.append(value);
        if list.capacity() != before {
            boundaries.push((list.len() - 1, list.capacity()));
        }
    }
    assert_eq!(boundaries, [(15, 19), (19, 24), (24, 31), (31, 40), (40, 52)]);
}

#[test]
fn out_of_range_indices() {
    let mut list = DynamicList::from(['A', 'B']);
    let len = list.len();
    let at_len = ListError::IndexOutOfRange { index: len, len };
    let past_len = ListError::IndexOutOfRange {
        index: len + 1,
        len,
    };

    assert_eq!(list.get(len), Err(at_len));
    assert_eq!(list.set(len, 'C'), Err(at_len));
    assert_eq!(list.remove_at(len), Err(at_len));
    assert_eq!(list.sub_list(0, len + 1), Err(past_len));
    assert_eq!(list.insert(len + 1, 'C'), Err(past_len));
    assert_eq!(list.insert_all(len + 1, ['C']), Err(past_len));
    assert_eq!(list.as_slice(), &['A', 'B']);
}

#[test]
fn owned_iteration() {
    let list: DynamicList<String> = ["agate", "diamond"].into_iter().map(String::from).collect();
    let joined: Vec<String> = list.into_iter().rev().collect();
    assert_eq!(joined, ["diamond", "agate"]);
}
