//! The outer control loops that relax the support and confidence thresholds
//! until a requested number of frequent item sets or rules is reached.

use log::debug;

use crate::config::Config;
use crate::error::Error;
use crate::itemset::Item;
use crate::itemsets::count::Dataset;
use crate::itemsets::{FrequentItemSetFinder, MinedItemSets};
use crate::rules::generate_rules;
use crate::rules::ruleset::RuleSet;

/// Slack for the threshold sequence `max - i * delta`, which accumulates a
/// rounding error of a few ulps.
const THRESHOLD_TOLERANCE: f64 = 1e-9;

/// The mined item sets together with the support threshold that produced
/// them.
#[derive(Debug, Clone)]
pub(crate) struct MinedWithThreshold {
    pub(crate) mined: MinedItemSets,
    pub(crate) min_support: f64,
}

/// Runs the finder once, or repeatedly at decreasing support thresholds when
/// a frequent-item-set count is requested.
///
/// Lowering the threshold never shrinks the result, so the first result
/// reaching the requested count is the one with the greatest threshold. If
/// the floor is crossed first, the largest result wins, ties going to the
/// larger threshold.
pub(crate) fn find_frequent_item_sets<I: Item>(
    config: &Config,
    dataset: &Dataset<I>,
) -> Result<MinedWithThreshold, Error> {
    if config.frequent_item_set_count() == 0 {
        let finder = FrequentItemSetFinder::new(config.min_support(), config.max_support())?;

        return Ok(MinedWithThreshold {
            mined: finder.find(dataset)?,
            min_support: config.min_support(),
        });
    }

    let mut best = MinedWithThreshold {
        mined: MinedItemSets::default(),
        min_support: config.max_support(),
    };

    for step in 0.. {
        let threshold = config.max_support() - step as f64 * config.support_delta();
        if threshold < config.min_support() - THRESHOLD_TOLERANCE {
            break;
        }

        let finder = FrequentItemSetFinder::new(threshold.max(0.0), config.max_support())?;
        let mined = finder.find(dataset)?;
        debug!(
            "min support {:.3}: {} frequent item sets (want {})",
            threshold,
            mined.len(),
            config.frequent_item_set_count()
        );

        if mined.len() >= config.frequent_item_set_count() {
            return Ok(MinedWithThreshold {
                mined,
                min_support: threshold,
            });
        }

        if mined.len() > best.mined.len() {
            best = MinedWithThreshold {
                mined,
                min_support: threshold,
            };
        }
    }

    Ok(best)
}

/// Generates rules once, or repeatedly at decreasing confidence thresholds
/// when a rule count is requested. The loop mirrors
/// [`find_frequent_item_sets`].
pub(crate) fn generate_association_rules<I: Item>(
    config: &Config,
    mined: &MinedItemSets,
    inventory: &[I],
) -> (RuleSet<I>, f64) {
    if config.rule_count() == 0 {
        return (
            generate_rules(config.min_confidence(), mined, inventory),
            config.min_confidence(),
        );
    }

    let mut best = (RuleSet::new(), config.max_confidence());

    for step in 0.. {
        let threshold = config.max_confidence() - step as f64 * config.confidence_delta();
        if threshold < config.min_confidence() - THRESHOLD_TOLERANCE {
            break;
        }

        let rules = generate_rules(threshold, mined, inventory);
        debug!(
            "min confidence {:.3}: {} rules (want {})",
            threshold,
            rules.len(),
            config.rule_count()
        );

        if rules.len() >= config.rule_count() {
            return (rules, threshold);
        }

        if rules.len() > best.0.len() {
            best = (rules, threshold);
        }
    }

    best
}
