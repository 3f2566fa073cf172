//! Random source selection.

use log::debug;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Process RNG when `seed` is `None`, otherwise a reproducible seeded RNG.
pub fn source(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => {
            debug!("using seeded StdRng");
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => {
            debug!("using thread_rng");
            Box::new(rand::thread_rng())
        }
    }
}

pub fn source_name(seed: Option<u64>) -> &'static str {
    match seed {
        Some(_) => "seeded StdRng",
        None => "thread_rng",
    }
}
