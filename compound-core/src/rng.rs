use rand::rngs::StdRng;
use rand::SeedableRng;

/// Derives an independent seed for one project from the run seed, so a
/// project's stream does not depend on which worker runs it or in what order.
pub fn project_seed(run_seed: u64, project_id: u32) -> u64 {
    // splitmix64 finalizer over the combined value.
    let mut z = run_seed ^ u64::from(project_id).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

pub fn project_rng(run_seed: u64, project_id: u32) -> StdRng {
    StdRng::seed_from_u64(project_seed(run_seed, project_id))
}
