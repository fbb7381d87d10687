use dynamic_list::DynamicList;
use gemstones::{Gemstone, GemstoneError};

fn display(list: &DynamicList<Gemstone>) {
    for gemstone in list {
        println!("{gemstone}");
    }
    println!("\n===================================\n");
}

#[cfg_attr(test, test)]
fn main() -> Result<(), Box<dyn core::error::Error>> {
    let agate = Gemstone::agate(1.0, 1.0, 1.0)?;
    let diamond = Gemstone::diamond(1.0, 1.0, 1.0)?;
    let emerald = Gemstone::emerald(1.0, 1.0, 1.0)?;
    let opal = Gemstone::opal(1.0, 1.0, 1.0)?;

    let mut list = DynamicList::from_element(agate);
    list.append(diamond);
    list.append(emerald);

    println!("Initial list:");
    display(&list);

    println!("list.len(): {}", list.len());
    println!("list.contains(&diamond): {}", list.contains(&diamond));
    println!("list.contains(&opal): {}", list.contains(&opal));
    println!("list.is_empty(): {}", list.is_empty());
    println!("list.index_of(&agate): {:?}", list.index_of(&agate));
    println!("list.index_of(&opal): {:?}", list.index_of(&opal));

    println!("list.remove_value(&opal): {}", list.remove_value(&opal));
    println!("After list.remove_value(&opal):");
    display(&list);

    println!("list.remove_value(&agate): {}", list.remove_value(&agate));
    println!("After list.remove_value(&agate):");
    display(&list);

    println!("list.remove_at(0): {}", list.remove_at(0)?);
    println!("After list.remove_at(0):");
    display(&list);

    println!("list.get(0): {}", list.get(0)?);
    println!("list.set(0, opal): {}", list.set(0, opal)?);
    println!("After list.set(0, opal):");
    display(&list);

    match Gemstone::rubin(-1.0, 1.0, 1.0) {
        Err(GemstoneError::InvalidWeight(weight)) => println!("Rejected a rubin weighing {weight:?}"),
        other => println!("Unexpected: {other:?}"),
    }

    list.clear();
    println!("After list.clear():");
    display(&list);

    Ok(())
}
