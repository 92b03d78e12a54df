use log::info;
use red_black_tree::{check, render, RBTree};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("logger already initialized");

    let mut rb_tree = RBTree::new();
    for key in [10, 20, 30, 40, 50, 25] {
        rb_tree.insert(key);
        info!("inserted {}, size is now {}", key, rb_tree.len());
    }
    println!("{}", render(&rb_tree));

    info!("search(25) -> {:?}", rb_tree.search(&25));
    info!("search(99) -> {:?}", rb_tree.search(&99));

    info!("delete(30) -> {:?}", rb_tree.delete(&30));
    println!("{}", render(&rb_tree));

    let ascending: Vec<i32> = rb_tree.iter().collect();
    info!("in-order: {:?}", ascending);
    info!("invariant violations: {:?}", check(&rb_tree));
}
