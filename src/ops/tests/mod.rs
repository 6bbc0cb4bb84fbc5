//! Unit tests for the mask, rank and rolling-matrix operations

mod rolling_test;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
