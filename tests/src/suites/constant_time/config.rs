// Thresholds for a timing comparison
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub mean_ratio_max: f64,
    pub t_stat_threshold: f64,
    pub combined_score_threshold: f64,
    pub num_warmup: usize,
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            mean_ratio_max: 1.25,
            t_stat_threshold: 1.7,
            combined_score_threshold: 1.8,
            num_warmup: 1000,
            num_samples: 25,
            num_iterations: 1000,
        }
    }
}

impl TestConfig {
    pub fn with_mean_ratio_max(mut self, max: f64) -> Self {
        self.mean_ratio_max = max;
        self
    }

    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.num_warmup = warmup;
        self
    }

    pub fn with_samples_and_iterations(mut self, samples: usize, iterations: usize) -> Self {
        self.num_samples = samples;
        self.num_iterations = iterations;
        self
    }

    pub fn with_t_stat_threshold(mut self, threshold: f64) -> Self {
        self.t_stat_threshold = threshold;
        self
    }

    pub fn with_combined_score_threshold(mut self, threshold: f64) -> Self {
        self.combined_score_threshold = threshold;
        self
    }
}

impl TestConfig {
    /// A decapsulation runs a decryption, a re-encryption and several
    /// hashes, so far fewer iterations fit in a sample than for a block
    /// cipher and the noise floor is higher.
    pub fn for_kem_decapsulation() -> Self {
        Self::default()
            .with_mean_ratio_max(1.3)
            .with_warmup(50)
            .with_samples_and_iterations(30, 50)
            .with_t_stat_threshold(2.2)
            .with_combined_score_threshold(2.0)
    }

    /// Byte-slice comparison in the constant-time helpers.
    pub fn for_comparison() -> Self {
        Self::default()
            .with_t_stat_threshold(1.9)
            .with_combined_score_threshold(1.9)
    }
}
