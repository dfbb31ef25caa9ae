use crate::AocError;
use crate::bitfield::BitField;
use crate::bitfield_array::BitFieldArray;

/// Gamma and epsilon rates of a diagnostic report.
///
/// Gamma holds the most common bit of every column and epsilon is its
/// inverse, so the two always share a width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PowerConsumption {
    pub gamma: BitField,
    pub epsilon: BitField,
}

impl PowerConsumption {
    pub fn from_report(report: &BitFieldArray) -> Result<Self, AocError> {
        let gamma = report.most_common()?;
        let epsilon = gamma.invert();
        Ok(Self { gamma, epsilon })
    }

    pub fn product(&self) -> u128 {
        u128::from(self.gamma.value()) * u128::from(self.epsilon.value())
    }
}

/// Oxygen generator and CO2 scrubber ratings.
///
/// Oxygen keeps the most common bit at each step, CO2 the least common one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifeSupport {
    pub oxygen: BitField,
    pub co2: BitField,
}

impl LifeSupport {
    pub fn from_report(report: &BitFieldArray) -> Result<Self, AocError> {
        Ok(Self {
            oxygen: report.reduce_to_rating(true)?,
            co2: report.reduce_to_rating(false)?,
        })
    }

    /// Pairs ratings that were reduced separately.
    pub fn from_ratings(oxygen: BitField, co2: BitField) -> Self {
        Self { oxygen, co2 }
    }

    pub fn product(&self) -> u128 {
        u128::from(self.oxygen.value()) * u128::from(self.co2.value())
    }
}
