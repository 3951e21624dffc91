use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseInputError {
    /// Every comma-separated token failed to parse as an integer (or the
    /// input was empty). The caller keeps its current array unchanged.
    #[error("input contains no valid integers: {input:?}")]
    NoValidIntegers { input: String },
}

/// Parse user-supplied comma-separated integers.
///
/// Tokens are trimmed and parsed individually; unparseable tokens are
/// silently discarded, matching the visualizer's custom-input box. An input
/// with no valid token at all is an error rather than an empty array.
pub fn parse_value_list(input: &str) -> Result<Vec<i64>, ParseInputError> {
    let values: Vec<i64> = input
        .split(',')
        .filter_map(|token| token.trim().parse().ok())
        .collect();
    if values.is_empty() {
        return Err(ParseInputError::NoValidIntegers {
            input: input.to_owned(),
        });
    }
    Ok(values)
}

/// Generate `len` random values in `[10, 310)`, the range the visualizer
/// uses so every bar stays visible at the render scale.
///
/// The RNG is caller-supplied; seeding it makes the generated input (and
/// therefore the whole trace) reproducible.
pub fn random_values<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(10..310)).collect()
}
