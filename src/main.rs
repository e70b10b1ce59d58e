use colored::*;
use heapcheck::{BinTree, BinTreeValidator, IterativeMaxHeapValidator, MaxHeapValidator};
use tracing_subscriber::EnvFilter;

fn verdict(accepted: bool) -> ColoredString {
    if accepted {
        "accepted".green()
    } else {
        "rejected".red()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!(
        "{}",
        "Demonstration of validating proposed max-heap mutations".green()
    );

    let validator = MaxHeapValidator;

    let old = BinTree::node(10, BinTree::leaf(7), BinTree::leaf(3));
    println!("starting heap: {:?}", old);

    let grown = BinTree::node(
        10,
        BinTree::node(7, BinTree::Empty, BinTree::leaf(6)),
        BinTree::leaf(3),
    );
    println!(
        "add {} as a leaf below 7: {}",
        "6".yellow(),
        verdict(validator.valid_add(&old, &6, &grown))
    );

    let reparented = BinTree::node(8, old.clone(), BinTree::Empty);
    println!(
        "add {} as a new root above 10: {}",
        "8".yellow(),
        verdict(validator.valid_add(&old, &8, &reparented))
    );

    let shrunk = BinTree::node(10, BinTree::Empty, BinTree::leaf(3));
    println!(
        "remove {}: {}",
        "7".yellow(),
        verdict(validator.valid_remove(&old, &7, &shrunk))
    );

    let swapped = BinTree::node(10, BinTree::leaf(9), BinTree::leaf(3));
    println!(
        "remove 7 but gain {}: {}",
        "9".yellow(),
        verdict(validator.valid_remove(&old, &7, &swapped))
    );

    let deep = IterativeMaxHeapValidator;
    let agrees = deep.valid_add(&old, &6, &grown)
        && !deep.valid_add(&old, &8, &reparented)
        && deep.valid_remove(&old, &7, &shrunk)
        && !deep.valid_remove(&old, &7, &swapped);
    println!(
        "explicit-stack validator agrees on all four: {}",
        if agrees { "yes".green() } else { "no".red() }
    );
}
