const INITIAL_VALUE: f64 = 10.0;

/// A number that can be doubled or halved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleHalf {
    value: f64,
}

impl DoubleHalf {
    pub fn new() -> Self {
        Self {
            value: INITIAL_VALUE,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn double(&mut self) {
        self.value *= 2.0;
    }

    pub fn halve(&mut self) {
        self.value *= 0.5;
    }
}

impl Default for DoubleHalf {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_ten() {
        assert_eq!(DoubleHalf::new().value(), 10.0);
    }

    #[test]
    fn test_double_and_halve() {
        let mut widget = DoubleHalf::new();
        widget.double();
        assert_eq!(widget.value(), 20.0);
        widget.halve();
        widget.halve();
        widget.halve();
        assert_eq!(widget.value(), 2.5);
    }
}
