//! Implementation of the Apriori algorithm for mining frequent item sets and
//! association rules from transactional data.
//!
//! Mining is driven by a [`Config`]: either a fixed support threshold, or a
//! target number of frequent item sets that is approached by iteratively
//! relaxing the threshold. Rule generation works the same way with confidence
//! thresholds. Transactions may carry [`TimeInterval`]s, in which case the
//! derived rules inherit the merged validity interval of their witnesses.
//!
//! # Examples
//!
//! ```
//! use apriori::{Apriori, Config};
//!
//! let transactions = vec![
//!     vec!["milk", "bread"],
//!     vec!["milk", "butter"],
//!     vec!["milk", "bread", "butter"],
//! ];
//!
//! let config = Config::builder()
//!     .min_support(0.5)
//!     .generate_rules_with(0.8)
//!     .build()?;
//!
//! let output = Apriori::with_config(config).mine(transactions)?;
//!
//! assert!(!output.frequent_item_sets().is_empty());
//! for rule in output.rules().into_iter().flatten() {
//!     println!("{rule}");
//! }
//! # Ok::<(), apriori::Error>(())
//! ```

mod combi;
pub mod config;
pub mod error;
pub mod interval;
pub mod itemset;
mod itemsets;
pub mod metrics;
pub mod output;
pub mod rules;
mod tasks;
pub mod transaction;
mod types;

use std::collections::HashMap;
use std::time::Instant;

use log::debug;

pub use crate::config::{Config, ConfigBuilder};
pub use crate::error::Error;
pub use crate::interval::TimeInterval;
pub use crate::itemset::{Item, ItemSet};
pub use crate::output::Output;
pub use crate::rules::rule::AssociationRule;
pub use crate::rules::ruleset::RuleSet;
pub use crate::transaction::{TimedTransaction, Transaction};

use crate::itemsets::count::Dataset;
use crate::itemsets::MinedItemSets;

/// The top-level driver threading a [`Config`] through frequent-item-set
/// mining and rule generation.
#[derive(Debug, Clone)]
pub struct Apriori {
    config: Config,
}

impl Apriori {
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mines the given transactions. The source is materialised up front, so
    /// single-pass iterators are fine; the items themselves are cloned into
    /// the result, which stays valid independently of the input.
    pub fn mine<I, T>(
        &self,
        transactions: impl IntoIterator<Item = T>,
    ) -> Result<Output<I>, Error>
    where
        I: Item,
        T: Transaction<I>,
    {
        let started = Instant::now();

        let raw: Vec<T> = transactions.into_iter().collect();
        let dataset = Dataset::from_transactions(&raw);
        debug!(
            "mining {} transactions over {} distinct items",
            dataset.len(),
            dataset.item_count()
        );

        let outcome = tasks::find_frequent_item_sets(&self.config, &dataset)?;
        let frequent_item_sets = decode_frequent_item_sets(&outcome.mined, &dataset.inventory);

        let (rules, effective_min_confidence) = if self.config.generate_rules() {
            let (rule_set, confidence) =
                tasks::generate_association_rules(&self.config, &outcome.mined, &dataset.inventory);
            (Some(rule_set), Some(confidence))
        } else {
            (None, None)
        };

        Ok(Output::new(
            frequent_item_sets,
            rules,
            started.elapsed(),
            outcome.min_support,
            effective_min_confidence,
        ))
    }
}

/// Mines the given transactions with the given configuration.
pub fn mine<I, T>(
    config: Config,
    transactions: impl IntoIterator<Item = T>,
) -> Result<Output<I>, Error>
where
    I: Item,
    T: Transaction<I>,
{
    Apriori::with_config(config).mine(transactions)
}

fn decode_frequent_item_sets<I: Item>(
    mined: &MinedItemSets,
    inventory: &[I],
) -> HashMap<u64, ItemSet<I>> {
    mined
        .levels
        .values()
        .flat_map(HashMap::iter)
        .map(|(ids, &count)| {
            let support = count as f64 / mined.transaction_count as f64;
            let item_set =
                ItemSet::with_support(ids.iter().map(|&id| inventory[id].clone()), support);
            (item_set.fingerprint(), item_set)
        })
        .collect()
}
