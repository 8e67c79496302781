/// Computes the arithmetic mean of a series of values. Returns `None` for empty input.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));

    if n == 0 { None } else { Some(sum / n as f64) }
}
