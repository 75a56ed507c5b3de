use serde::{Deserialize, Serialize};

/// Raise factor shared by the whole roster unless overridden in config.
pub const DEFAULT_RAISE_MULTIPLIER: f64 = 1.05;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub first: String,
    pub last: String,
    pub pay: u32,
}

impl Employee {
    pub fn new(first: impl Into<String>, last: impl Into<String>, pay: u32) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
            pay,
        }
    }

    /// Derived from the current name fields on every call, never cached.
    pub fn email(&self) -> String {
        format!("{}.{}@email.com", self.first, self.last)
    }

    pub fn fullname(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    /// Sets pay to round(pay * multiplier).
    pub fn apply_raise(&mut self, multiplier: f64) {
        self.pay = (self.pay as f64 * multiplier).round() as u32;
    }
}
