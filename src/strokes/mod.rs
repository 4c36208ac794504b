use crate::math::{v2, V2};

/// An open sequence of 2-D points in output-device coordinates. Closed shapes
/// repeat their first point explicitly.
pub type Polyline = Vec<V2>;

/// Thickness drawn for rays that never hit the scene.
pub const MISS_THICKNESS: f64 = 8.0;

/// Renders a scalar ink thickness as nested diagonal strokes inside the grid
/// cell `(col, row)`, scaled to device coordinates by `scale`, appending to
/// `out`. The thickness splits into two triangular fill halves (top and
/// bottom); each half emits incrementally longer diagonals as thickness
/// grows, approximating a filled square of matching density. `outline` adds
/// the cell's bounding square.
pub fn pixel_strokes(col: u32, row: u32, thickness: f64, outline: bool, scale: f64, out: &mut Vec<Polyline>) {
    let x = col as f64;
    let y = row as f64;
    let half = (thickness / 2.0).ceil();

    let mut i = 1;
    while (i as f64) < half {
        let increase = scale * i as f64 / half * 2.0;
        let m_increase = increase.min(scale);
        let adjust = (increase - scale).max(0.0);
        out.push(vec![
            v2(scale * x + adjust, scale * y + m_increase),
            v2(scale * x + m_increase, scale * y + adjust),
        ]);
        i += 1;
    }
    let mut i = 1;
    while (i as f64) < thickness - half {
        let increase = scale * i as f64 / (thickness - half) * 2.0;
        let m_increase = increase.min(scale);
        let adjust = (increase - scale).max(0.0);
        out.push(vec![
            v2(scale * x + adjust, scale * y + scale - m_increase),
            v2(scale * x + m_increase, scale * y + scale - adjust),
        ]);
        i += 1;
    }
    if outline {
        out.push(vec![
            v2(x * scale, y * scale),
            v2(x * scale + scale, y * scale),
            v2(x * scale + scale, y * scale + scale),
            v2(x * scale, y * scale + scale),
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strokes(thickness: f64, outline: bool) -> Vec<Polyline> {
        let mut out = Vec::new();
        pixel_strokes(0, 0, thickness, outline, 3.0, &mut out);
        out
    }

    #[test]
    fn thin_cells_stay_empty() {
        assert!(strokes(0.0, false).is_empty());
        assert!(strokes(2.0, false).is_empty());
        assert!(strokes(-5.0, false).is_empty());
    }

    #[test]
    fn miss_thickness_fills_both_halves() {
        // half = 4: three strokes above the diagonal, three below
        let out = strokes(MISS_THICKNESS, false);
        assert_eq!(out.len(), 6);
        assert!(out.iter().all(|line| line.len() == 2));
    }

    #[test]
    fn stroke_count_grows_with_thickness() {
        let mut last = 0;
        for t in [2.0, 4.0, 8.0, 12.0, 16.0] {
            let n = strokes(t, false).len();
            assert!(n >= last, "thickness {} produced {} < {}", t, n, last);
            last = n;
        }
        assert!(last > 0);
    }

    #[test]
    fn points_stay_inside_scaled_cell() {
        for t in [3.0, 8.0, 13.5, 19.0] {
            for line in strokes(t, true) {
                for p in line {
                    assert!(p.x >= 0.0 && p.x <= 3.0, "{:?}", p);
                    assert!(p.y >= 0.0 && p.y <= 3.0, "{:?}", p);
                }
            }
        }
    }

    #[test]
    fn outline_is_an_open_square() {
        let out = strokes(0.0, true);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].len(), 4);
        assert_ne!(out[0][0], out[0][3]);
    }

    #[test]
    fn cell_offset_scales_linearly() {
        let mut at_origin = Vec::new();
        let mut shifted = Vec::new();
        pixel_strokes(0, 0, 8.0, false, 3.0, &mut at_origin);
        pixel_strokes(2, 1, 8.0, false, 3.0, &mut shifted);
        for (a, b) in at_origin.iter().zip(&shifted) {
            for (pa, pb) in a.iter().zip(b) {
                assert_eq!(pb.x, pa.x + 6.0);
                assert_eq!(pb.y, pa.y + 3.0);
            }
        }
    }
}
