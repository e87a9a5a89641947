use rand::SeedableRng;
use rand::rngs::StdRng;

/// Number of random cases per property.
pub const CASES: usize = 10_000;

/// Fixed seed so a failing case can be reproduced.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_f10a7)
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
