mod bst;
mod linked_list;
mod value_tree;

/// Routes the crate's `log` output through the test harness. Run with `RUST_LOG=debug` to see it.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
