use serde::{Deserialize, Serialize};

/// Axis caption for one numeric value plus a host-supplied unit suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueLabel {
    pub value: f64,
    pub unit: String,
}

impl ValueLabel {
    #[must_use]
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Number of fraction digits the value formats with.
    ///
    /// 0 decimals above 1000, 2 decimals inside `[2, 999]`, and 3 decimals
    /// for everything else. Values in `(999, 1000]` fall through to the
    /// 3-decimal branch; that includes exactly 1000. Exposed separately
    /// because trailing-zero trimming can make adjacent branches produce
    /// identical text for integral values.
    #[must_use]
    pub fn fraction_digits(&self) -> usize {
        if self.value > 1000.0 {
            0
        } else if (2.0..=999.0).contains(&self.value) {
            2
        } else {
            3
        }
    }

    /// Formats the value with magnitude-dependent precision and appends the
    /// unit with no separator. Trailing fractional zeros are trimmed.
    #[must_use]
    pub fn formatted(&self) -> String {
        let decimals = self.fraction_digits();
        let mut number = format!("{:.decimals$}", self.value);
        if number.contains('.') {
            while number.ends_with('0') {
                number.pop();
            }
            if number.ends_with('.') {
                number.pop();
            }
        }

        format!("{number}{}", self.unit)
    }
}
