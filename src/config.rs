use crate::error::Error;

/// The configuration of a mining run. All thresholds are fractions in
/// `[0, 1]`; a `Config` can only be obtained through the validating
/// [`ConfigBuilder`], so every instance satisfies its constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    min_support: f64,
    max_support: f64,
    support_delta: f64,
    frequent_item_set_count: usize,
    generate_rules: bool,
    min_confidence: f64,
    max_confidence: f64,
    confidence_delta: f64,
    rule_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_support: 0.0,
            max_support: 1.0,
            support_delta: 0.1,
            frequent_item_set_count: 0,
            generate_rules: false,
            min_confidence: 0.0,
            max_confidence: 1.0,
            confidence_delta: 0.1,
            rule_count: 0,
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// The support threshold the search never relaxes below.
    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    /// The initial support threshold of the search, and the ceiling above
    /// which item sets are discarded.
    pub fn max_support(&self) -> f64 {
        self.max_support
    }

    /// The step by which the support threshold is relaxed per iteration.
    pub fn support_delta(&self) -> f64 {
        self.support_delta
    }

    /// The number of frequent item sets to aim for; 0 disables the
    /// threshold-relaxation loop and mines once at `min_support`.
    pub fn frequent_item_set_count(&self) -> usize {
        self.frequent_item_set_count
    }

    /// Whether association rules are generated from the frequent item sets.
    pub fn generate_rules(&self) -> bool {
        self.generate_rules
    }

    /// The confidence threshold rule generation never relaxes below.
    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    /// The initial confidence threshold of rule generation.
    pub fn max_confidence(&self) -> f64 {
        self.max_confidence
    }

    /// The step by which the confidence threshold is relaxed per iteration.
    pub fn confidence_delta(&self) -> f64 {
        self.confidence_delta
    }

    /// The number of rules to aim for; 0 disables the confidence-relaxation
    /// loop and generates once at `min_confidence`.
    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    fn validate(&self) -> Result<(), Error> {
        if !(0.0..=self.max_support).contains(&self.min_support) {
            return Err(Error::InvalidArgument(format!(
                "min_support must be at least 0 and at most max_support; got {}",
                self.min_support
            )));
        }

        if !(self.min_support..=1.0).contains(&self.max_support) {
            return Err(Error::InvalidArgument(format!(
                "max_support must be at least min_support and at most 1; got {}",
                self.max_support
            )));
        }

        if !(self.support_delta > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "support_delta must be greater than 0; got {}",
                self.support_delta
            )));
        }

        if !(0.0..=self.max_confidence).contains(&self.min_confidence) {
            return Err(Error::InvalidArgument(format!(
                "min_confidence must be at least 0 and at most max_confidence; got {}",
                self.min_confidence
            )));
        }

        if !(self.min_confidence..=1.0).contains(&self.max_confidence) {
            return Err(Error::InvalidArgument(format!(
                "max_confidence must be at least min_confidence and at most 1; got {}",
                self.max_confidence
            )));
        }

        if !(self.confidence_delta > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "confidence_delta must be greater than 0; got {}",
                self.confidence_delta
            )));
        }

        Ok(())
    }
}

/// Builds a [`Config`], checking every constraint when [`build`] is called.
///
/// [`build`]: ConfigBuilder::build
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a configuration that searches for the given number of frequent
    /// item sets by relaxing the support threshold.
    pub fn for_item_set_count(count: usize) -> Self {
        Self::new().frequent_item_set_count(count)
    }

    pub fn min_support(mut self, min_support: f64) -> Self {
        self.config.min_support = min_support;
        self
    }

    pub fn max_support(mut self, max_support: f64) -> Self {
        self.config.max_support = max_support;
        self
    }

    pub fn support_delta(mut self, support_delta: f64) -> Self {
        self.config.support_delta = support_delta;
        self
    }

    pub fn frequent_item_set_count(mut self, count: usize) -> Self {
        self.config.frequent_item_set_count = count;
        self
    }

    pub fn generate_rules(mut self, generate_rules: bool) -> Self {
        self.config.generate_rules = generate_rules;
        self
    }

    /// Enables rule generation with the given minimum confidence.
    pub fn generate_rules_with(mut self, min_confidence: f64) -> Self {
        self.config.generate_rules = true;
        self.config.min_confidence = min_confidence;
        self
    }

    pub fn min_confidence(mut self, min_confidence: f64) -> Self {
        self.config.min_confidence = min_confidence;
        self
    }

    pub fn max_confidence(mut self, max_confidence: f64) -> Self {
        self.config.max_confidence = max_confidence;
        self
    }

    pub fn confidence_delta(mut self, confidence_delta: f64) -> Self {
        self.config.confidence_delta = confidence_delta;
        self
    }

    /// Sets the number of rules to aim for and enables rule generation.
    pub fn rule_count(mut self, rule_count: usize) -> Self {
        self.config.generate_rules = true;
        self.config.rule_count = rule_count;
        self
    }

    pub fn build(self) -> Result<Config, Error> {
        self.config.validate()?;
        Ok(self.config)
    }
}
