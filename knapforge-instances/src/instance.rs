use anyhow::{anyhow, Result};
use crate::{baselines, DpTable, GeneratorParams};
use rand::{
    distributions::{Distribution, Uniform},
    rngs::SmallRng,
    SeedableRng,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Instance {
    pub seed: [u8; 32],
    pub weights: Vec<u32>,
    pub profits: Vec<u32>,
    pub capacity: u32,
    // Optimal item indices, sorted ascending. No other feasible subset
    // attains `value`
    pub solution: Vec<usize>,
    pub value: u64,
}

impl Instance {
    // Runs one candidate cycle: sample, solve, check uniqueness, extract.
    // Ok(None) means the candidate was rejected and the caller should retry
    // with a fresh seed.
    pub fn generate(seed: &[u8; 32], params: &GeneratorParams) -> Result<Option<Instance>> {
        params.validate()?;
        let mut rng = SmallRng::from_seed(seed.clone());

        let weight_distr = Uniform::new(params.weight_range.0, params.weight_range.1);
        let profit_distr = Uniform::new(params.profit_range.0, params.profit_range.1);
        let weights: Vec<u32> = (0..params.num_items)
            .map(|_| weight_distr.sample(&mut rng))
            .collect();
        let profits: Vec<u32> = (0..params.num_items)
            .map(|_| profit_distr.sample(&mut rng))
            .collect();

        let table = DpTable::build(&weights, &profits, params.capacity)?;
        let (value, budget) = match table.unique_optimum() {
            Some(optimum) => optimum,
            None => return Ok(None),
        };
        if params.greedy_check {
            let (_, greedy_value) =
                baselines::greedy_by_profit(&weights, &profits, params.capacity);
            if greedy_value == value {
                return Ok(None);
            }
        }
        let solution = table.backtrack(budget)?;

        Ok(Some(Instance {
            seed: seed.clone(),
            weights,
            profits,
            capacity: params.capacity,
            solution,
            value,
        }))
    }

    pub fn verify(&self) -> Result<()> {
        if self.weights.len() != self.profits.len() {
            return Err(anyhow!(
                "Weights ({}) and profits ({}) must have the same length",
                self.weights.len(),
                self.profits.len()
            ));
        }
        let mut total_weight = 0u64;
        let mut total_profit = 0u64;
        for (i, &item) in self.solution.iter().enumerate() {
            if item >= self.weights.len() {
                return Err(anyhow!("Item ({}) is out of bounds", item));
            }
            if i > 0 && self.solution[i - 1] >= item {
                return Err(anyhow!("Solution items must be strictly ascending"));
            }
            total_weight += self.weights[item] as u64;
            total_profit += self.profits[item] as u64;
        }
        if total_weight > self.capacity as u64 {
            return Err(anyhow!(
                "Total weight ({}) exceeded capacity ({})",
                total_weight,
                self.capacity
            ));
        }
        if total_profit != self.value {
            return Err(anyhow!(
                "Solution profit ({}) does not match recorded value ({})",
                total_profit,
                self.value
            ));
        }
        let table = DpTable::build(&self.weights, &self.profits, self.capacity)?;
        let (value, budget) = table
            .unique_optimum()
            .ok_or_else(|| anyhow!("Optimal solution is not unique"))?;
        if value != self.value {
            return Err(anyhow!(
                "Optimal value ({}) does not match recorded value ({})",
                value,
                self.value
            ));
        }
        if table.backtrack(budget)? != self.solution {
            return Err(anyhow!("Solution does not match the unique optimum"));
        }
        Ok(())
    }
}
