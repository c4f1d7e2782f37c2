//! Shared configuration checks.

use crate::error::{Error, Result};

pub(crate) fn check_dimensions(num_bits: usize, num_objectives: usize) -> Result<()> {
    if num_bits == 0 {
        return Err(Error::InvalidConfig("num_bits must be at least 1".into()));
    }
    if num_objectives == 0 {
        return Err(Error::InvalidConfig(
            "num_objectives must be at least 1".into(),
        ));
    }
    Ok(())
}

pub(crate) fn check_rate(name: &str, rate: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(Error::InvalidConfig(format!(
            "{name} ({rate}) must be within [0, 1]"
        )));
    }
    Ok(())
}

pub(crate) fn check_at_least(name: &str, value: usize, min: usize) -> Result<()> {
    if value < min {
        return Err(Error::InvalidConfig(format!(
            "{name} ({value}) must be at least {min}"
        )));
    }
    Ok(())
}
