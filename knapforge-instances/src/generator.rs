use anyhow::{anyhow, Result};
use crate::{GeneratorParams, Instance};
use rand::{rngs::StdRng, Rng, SeedableRng};

// Rejection sampling: candidate seeds are drawn from a master rng so a run is
// reproducible from `seed` alone, while each accepted instance can also be
// regenerated from its own embedded seed.
pub fn generate_instances(seed: &[u8; 32], params: &GeneratorParams) -> Result<Vec<Instance>> {
    params.validate()?;
    let mut rng = StdRng::from_seed(seed.clone());
    let mut instances = Vec::new();
    let mut attempts = 0u64;
    while instances.len() < params.num_instances {
        if let Some(max_attempts) = params.max_attempts {
            if attempts >= max_attempts {
                return Err(anyhow!(
                    "Max attempts ({}) reached with ({}) of ({}) instances accepted",
                    max_attempts,
                    instances.len(),
                    params.num_instances
                ));
            }
        }
        attempts += 1;
        if let Some(instance) = Instance::generate(&rng.gen(), params)? {
            instances.push(instance);
        }
    }
    Ok(instances)
}
