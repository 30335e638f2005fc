pub mod graph_enumerator;
pub mod random_graphs;

#[cfg(not(miri))]
mod proptest_tests;
