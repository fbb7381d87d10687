use dynamic_list::DynamicList;

#[cfg_attr(test, test)]
fn main() {
    let mut list: DynamicList<u32> = (1..=6).collect();
    println!("{list}"); // > [1, 2, 3, 4, 5, 6]

    let mut cursor = list.cursor();
    while let Ok(&value) = cursor.next() {
        if value % 3 == 0 {
            cursor.replace_last(value * 10).unwrap();
            cursor.insert_before(0).unwrap();
        }
    }
    println!("{:?}", cursor.as_list()); // > [1, 2, 30, 0, 4, 5, 60, 0]

    assert_eq!(cursor.previous(), Ok(&0));
    cursor.remove_last().unwrap();
    assert!(!cursor.has_next());
    println!("{list}"); // > [1, 2, 30, 0, 4, 5, 60]

    let mut cursor = list.forward_cursor();
    while cursor.has_next() {
        if *cursor.next().unwrap() == 0 {
            cursor.remove_last().unwrap();
        }
    }
    println!("{list}"); // > [1, 2, 30, 4, 5, 60]
}
