use crate::float::Float;

/// Fill `result` with a Blackman window (`alpha = 0.16`), the window browser analysers apply
/// before taking the spectrum of a frame.
///
/// > w(n) = a0 - a1 cos(2 pi n / N) + a2 cos(4 pi n / N)
///
/// with _a0 = (1 - alpha) / 2_, _a1 = 1/2_, _a2 = alpha / 2_.
pub fn blackman_window<T: Float>(result: &mut [T]) {
    let size = result.len();
    if size == 0 {
        return;
    }

    let alpha = 0.16;
    let a0 = (1.0 - alpha) / 2.0;
    let a1 = 0.5;
    let a2 = alpha / 2.0;
    let n = size as f64;

    for (i, w) in result.iter_mut().enumerate() {
        let x = 2.0 * std::f64::consts::PI * i as f64 / n;
        *w = T::from_f64(a0 - a1 * x.cos() + a2 * (2.0 * x).cos()).unwrap();
    }
}
