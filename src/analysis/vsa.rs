// ---------------------------------------------------------------------------
// VowelTriangle – the acoustic space spanned by /i/, /a/, /u/
// ---------------------------------------------------------------------------

/// Triangle spanned by the three vowels in (F1, F2) space, one axis in its
/// natural Hz scale each.
///
/// Vertices are fixed at construction in the order /i/ → /a/ → /u/, so the
/// participant and normative triangles cannot disagree on orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VowelTriangle {
    i: (f64, f64),
    a: (f64, f64),
    u: (f64, f64),
}

impl VowelTriangle {
    /// Build a triangle from per-vowel `(f1, f2)` pairs.
    pub fn new(i: (f64, f64), a: (f64, f64), u: (f64, f64)) -> Self {
        VowelTriangle { i, a, u }
    }

    /// Vertices in canonical order.
    pub fn vertices(&self) -> [(f64, f64); 3] {
        [self.i, self.a, self.u]
    }

    /// Vertices with the first repeated at the end, for drawing a closed
    /// outline.
    pub fn closed_path(&self) -> [(f64, f64); 4] {
        [self.i, self.a, self.u, self.i]
    }

    /// Euclidean side lengths |i−a|, |a−u|, |u−i|.
    pub fn side_lengths(&self) -> [f64; 3] {
        [
            distance(self.i, self.a),
            distance(self.a, self.u),
            distance(self.u, self.i),
        ]
    }

    /// Area in Hz² via Heron's formula.
    ///
    /// The radicand is clamped at zero: rounding can push it slightly
    /// negative for near-collinear vertices, and a collapsed articulation
    /// space is area 0, not an error.
    pub fn area(&self) -> f64 {
        let [ab, bc, ca] = self.side_lengths();
        let s = (ab + bc + ca) / 2.0;
        let radicand = s * (s - ab) * (s - bc) * (s - ca);
        radicand.max(0.0).sqrt()
    }
}

fn distance(p: (f64, f64), q: (f64, f64)) -> f64 {
    (p.0 - q.0).hypot(p.1 - q.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_triangle_area() {
        let t = VowelTriangle::new((0.0, 0.0), (3.0, 0.0), (0.0, 4.0));
        assert!((t.area() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn canonical_normative_area() {
        let t = VowelTriangle::new((270.0, 2290.0), (730.0, 1090.0), (300.0, 870.0));
        assert!((t.area() - 308_600.0).abs() < 1e-6);
    }

    #[test]
    fn collinear_vertices_have_zero_area() {
        let t = VowelTriangle::new((0.0, 0.0), (0.0, 1.0), (0.0, 2.0));
        assert_eq!(t.area(), 0.0);
    }

    #[test]
    fn coincident_vertices_have_zero_area() {
        let t = VowelTriangle::new((300.0, 870.0), (300.0, 870.0), (300.0, 870.0));
        assert_eq!(t.area(), 0.0);
    }

    #[test]
    fn vertex_order_is_preserved() {
        let t = VowelTriangle::new((1.0, 2.0), (3.0, 4.0), (5.0, 6.0));
        assert_eq!(t.vertices(), [(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
        assert_eq!(
            t.closed_path(),
            [(1.0, 2.0), (3.0, 4.0), (5.0, 6.0), (1.0, 2.0)]
        );
    }

    #[test]
    fn side_lengths_are_pairwise_distances() {
        let t = VowelTriangle::new((0.0, 0.0), (3.0, 0.0), (0.0, 4.0));
        let [ia, au, ui] = t.side_lengths();
        assert!((ia - 3.0).abs() < 1e-12);
        assert!((au - 5.0).abs() < 1e-12);
        assert!((ui - 4.0).abs() < 1e-12);
    }

    #[test]
    fn area_does_not_depend_on_vertex_labels() {
        // The area is a property of the three points; assigning them to
        // different vowel slots must not change it (beyond summation
        // order rounding).
        let p = (270.0, 2290.0);
        let q = (730.0, 1090.0);
        let r = (300.0, 870.0);
        let area = VowelTriangle::new(p, q, r).area();
        assert!((VowelTriangle::new(q, r, p).area() - area).abs() < 1e-6);
        assert!((VowelTriangle::new(r, p, q).area() - area).abs() < 1e-6);
    }
}
