//! Small numeric helpers.

/// Arithmetic mean of a slice of numbers; `None` for empty input.
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_a_set_of_numbers() {
        assert_eq!(average(&[5.0, 8.0, 9.0]), Some(22.0 / 3.0));
        assert_eq!(average(&[4.0]), Some(4.0));
        assert_eq!(average(&[-2.0, 2.0]), Some(0.0));
    }

    #[test]
    fn empty_input_has_no_average() {
        assert_eq!(average(&[]), None);
    }
}
