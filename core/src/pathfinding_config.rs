/// Configuration for the constrained best-path search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSearchConfig {
    /// Only traverse edges with weight >= threshold. Values <= 0 admit every edge.
    pub threshold: i64,
}

impl PathSearchConfig {
    pub fn new(threshold: i64) -> Self {
        Self { threshold }
    }

    pub fn allows(&self, weight: u32) -> bool {
        i64::from(weight) >= self.threshold
    }
}

impl Default for PathSearchConfig {
    fn default() -> Self {
        Self { threshold: 0 }
    }
}
