use anyhow::{anyhow, Result};
use knapforge_utils::{jsonify, seed_from_str};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorParams {
    pub num_instances: usize,
    pub num_items: usize,
    pub capacity: u32,
    // Half-open ranges [lo, hi) for the uniform weight and profit draws
    pub weight_range: (u32, u32),
    pub profit_range: (u32, u32),
    pub greedy_check: bool,
    pub max_attempts: Option<u64>,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            num_instances: 100,
            num_items: 5,
            capacity: 10,
            weight_range: (1, 10),
            profit_range: (1, 10),
            greedy_check: false,
            max_attempts: None,
        }
    }
}

impl GeneratorParams {
    pub fn validate(&self) -> Result<()> {
        if self.num_items == 0 {
            return Err(anyhow!("Number of items must be at least 1"));
        }
        if self.capacity == 0 {
            return Err(anyhow!("Capacity must be at least 1"));
        }
        let (lo, hi) = self.weight_range;
        if lo == 0 || lo >= hi {
            return Err(anyhow!(
                "Weight range [{}, {}) must have 1 <= lo < hi",
                lo,
                hi
            ));
        }
        let (lo, hi) = self.profit_range;
        if lo == 0 || lo >= hi {
            return Err(anyhow!(
                "Profit range [{}, {}) must have 1 <= lo < hi",
                lo,
                hi
            ));
        }
        Ok(())
    }

    pub fn calc_seed(&self, rand_hash: &str) -> [u8; 32] {
        seed_from_str(format!("{}_{}", jsonify(self), rand_hash).as_str())
    }
}
