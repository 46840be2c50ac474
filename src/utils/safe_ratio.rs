use crate::Error;

/// Divides `numerator` by `denominator`, treating `0 / 0` as `0`.
///
/// # Arguments
/// * `numerator` - The quantity being measured.
/// * `denominator` - The quantity it is measured against.
/// * `label` - Name of the rate, used in the error message.
///
/// # Errors
/// Returns `Error::DegenerateDenominator` when the denominator is zero but the numerator
/// is not, instead of producing `inf` or `NaN`.
///
/// # Example
/// ```
/// use word_error_rate::utils::safe_ratio;
///
/// assert_eq!(safe_ratio(1.0, 4.0, "wer").unwrap(), 0.25);
/// assert_eq!(safe_ratio(0.0, 0.0, "wer").unwrap(), 0.0);
/// assert!(safe_ratio(1.0, 0.0, "wer").is_err());
/// ```
pub fn safe_ratio(numerator: f64, denominator: f64, label: &str) -> Result<f64, Error> {
    if denominator == 0.0 {
        if numerator == 0.0 {
            return Ok(0.0);
        }

        return Err(Error::DegenerateDenominator(format!(
            "{} is undefined: numerator {} over a zero denominator",
            label, numerator
        )));
    }

    Ok(numerator / denominator)
}
