use std::ops::Range;

use crate::float::Float;

/// Whether `arr[idx]` is strictly greater than both of its neighbours.
/// The first and last elements are never local maxima.
pub fn is_local_maximum<T: Float>(arr: &[T], idx: usize) -> bool {
    idx > 0 && idx + 1 < arr.len() && arr[idx] > arr[idx - 1] && arr[idx] > arr[idx + 1]
}

/// Iterate, left to right, over the local maxima of `arr` whose index is in `range`.
pub fn detect_local_maxima<'a, T: Float>(
    arr: &'a [T],
    range: Range<usize>,
) -> impl Iterator<Item = (usize, T)> + 'a {
    range
        .filter(move |&i| is_local_maximum(arr, i))
        .map(move |i| (i, arr[i]))
}

/// Keep the first peak that is strictly greater than every peak before it.
pub fn choose_strongest<I: Iterator<Item = (usize, T)>, T: Float>(peaks: I) -> Option<(usize, T)> {
    peaks.fold(None, |best, peak| match best {
        Some((_, value)) if peak.1 <= value => best,
        _ => Some(peak),
    })
}

/// The strongest local maximum of `arr` with an index in `range`. Ties keep the lower index.
pub fn strongest_local_maximum<T: Float>(arr: &[T], range: Range<usize>) -> Option<(usize, T)> {
    choose_strongest(detect_local_maxima(arr, range))
}

/// The largest element of `arr` with an index in `range`. Ties keep the lower index.
pub fn strongest_element<T: Float>(arr: &[T], range: Range<usize>) -> Option<(usize, T)> {
    let end = range.end.min(arr.len());
    let start = range.start.min(end);
    choose_strongest(arr[start..end].iter().enumerate().map(|(i, &v)| (start + i, v)))
}
