/// Symmetric axis bound for a frame: `margin * max(|x|, |y|)` over every
/// coordinate. `None` when that is zero or not finite, in which case the
/// caller keeps its previous limits.
pub fn view_bound(positions: &[(f64, f64)], margin: f64) -> Option<f64> {
    let max = positions
        .iter()
        .map(|&(x, y)| x.abs().max(y.abs()))
        .fold(0.0_f64, f64::max);
    let lim = max * margin;
    (lim > 0.0 && lim.is_finite()).then_some(lim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_largest_coordinate_on_either_axis() {
        let b = view_bound(&[(0.5, -2.0), (1.0, 1.0)], 1.2).unwrap();
        assert!((b - 2.4).abs() < 1e-12);
    }

    #[test]
    fn empty_or_collapsed_frame_has_no_bound() {
        assert_eq!(view_bound(&[], 1.2), None);
        assert_eq!(view_bound(&[(0.0, 0.0)], 1.2), None);
    }

    #[test]
    fn non_finite_frame_has_no_bound() {
        assert_eq!(view_bound(&[(f64::INFINITY, 0.0)], 1.2), None);
    }
}
