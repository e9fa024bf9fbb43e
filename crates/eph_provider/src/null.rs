//! Null provider (§4.6): returns a fixed vector for every call. For tests.

use crate::error::ProviderError;
use crate::provider::PositionProvider;

/// A [`PositionProvider`] that always returns the same position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NullProvider {
    pub fixed_position: [f64; 3],
}

impl NullProvider {
    pub fn new(fixed_position: [f64; 3]) -> Self {
        Self { fixed_position }
    }
}

impl Default for NullProvider {
    fn default() -> Self {
        Self::new([0.0, 0.0, 0.0])
    }
}

impl PositionProvider for NullProvider {
    fn position(&mut self, _body_name: &str, _jd: f64) -> Result<[f64; 3], ProviderError> {
        Ok(self.fixed_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_returns_the_fixed_position() {
        let mut provider = NullProvider::new([1.0, 2.0, 3.0]);
        assert_eq!(provider.position("anything", 0.0).unwrap(), [1.0, 2.0, 3.0]);
        assert_eq!(provider.position("else", 12345.0).unwrap(), [1.0, 2.0, 3.0]);
    }
}
