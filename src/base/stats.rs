/// Returns the arithmetic mean of the values (zero if empty)
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values.into_iter().fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Returns the most frequent value (statistical mode)
///
/// Ties are broken by the smallest `key`. Returns None if empty.
pub fn mode_by_key<T, I, K, F>(values: I, key: F) -> Option<T>
where
    T: PartialEq + Copy,
    I: IntoIterator<Item = T>,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut counts: Vec<(T, usize)> = Vec::new();
    for v in values {
        match counts.iter_mut().find(|(x, _)| *x == v) {
            Some((_, c)) => *c += 1,
            None => counts.push((v, 1)),
        }
    }
    let mut best: Option<(T, usize)> = None;
    for (v, c) in counts {
        match best {
            Some((bv, bc)) if bc > c || (bc == c && key(&bv) <= key(&v)) => (),
            _ => best = Some((v, c)),
        }
    }
    best.map(|(v, _)| v)
}

/// Returns `n` logarithmically spaced values from `start` to `stop` (both included)
pub fn logspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }
    let (a, b) = (f64::log10(start), f64::log10(stop));
    let step = (b - a) / ((n - 1) as f64);
    (0..n)
        .map(|i| {
            if i == n - 1 {
                stop
            } else {
                f64::powf(10.0, a + (i as f64) * step)
            }
        })
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
