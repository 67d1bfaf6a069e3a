// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Scalar cubic `a + b·t + c·t² + d·t³`, stored as `[a, b, c, d]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cubic {
    coeffs: [f64; 4],
}

impl Cubic {
    /// Wraps raw coefficients in ascending order of degree.
    pub const fn new(coeffs: [f64; 4]) -> Self {
        Self { coeffs }
    }

    /// Hermite cubic on `t ∈ [0, 1]` with endpoint values `x0`, `x1` and
    /// endpoint slopes `v0`, `v1`.
    ///
    /// Slopes are per unit of normalized time: multiply a real velocity by
    /// the segment duration before passing it in.
    pub fn hermite(x0: f64, x1: f64, v0: f64, v1: f64) -> Self {
        Self::new([
            x0,
            v0,
            -3.0 * x0 + 3.0 * x1 - 2.0 * v0 - v1,
            2.0 * x0 - 2.0 * x1 + v0 + v1,
        ])
    }

    /// Coefficients `[a, b, c, d]`.
    pub fn coeffs(&self) -> [f64; 4] {
        self.coeffs
    }

    /// Value at `t`.
    pub fn evaluate(&self, t: f64) -> f64 {
        let [a, b, c, d] = self.coeffs;
        ((d * t + c) * t + b) * t + a
    }

    /// First derivative at `t`.
    pub fn derivative(&self, t: f64) -> f64 {
        let [_, b, c, d] = self.coeffs;
        (3.0 * d * t + 2.0 * c) * t + b
    }

    /// Coefficient-wise difference `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        let (a, b) = (self.coeffs, other.coeffs);
        Self::new([a[0] - b[0], a[1] - b[1], a[2] - b[2], a[3] - b[3]])
    }

    /// The same curve over a new parameter `s`, where `t = offset + scale·s`.
    pub fn reparameterize(&self, offset: f64, scale: f64) -> Self {
        let [_, _, c, d] = self.coeffs;
        Self::new([
            self.evaluate(offset),
            scale * self.derivative(offset),
            scale * scale * (c + 3.0 * d * offset),
            scale * scale * scale * d,
        ])
    }

    /// Largest `|derivative|` over `[lo, hi]`.
    ///
    /// The derivative is a quadratic, so its extreme magnitude sits at an
    /// endpoint or at the vertex.
    pub fn max_abs_derivative(&self, lo: f64, hi: f64) -> f64 {
        let [_, _, c, d] = self.coeffs;
        let mut best = self.derivative(lo).abs().max(self.derivative(hi).abs());
        if d != 0.0 {
            let vertex = -c / (3.0 * d);
            if vertex > lo && vertex < hi {
                best = best.max(self.derivative(vertex).abs());
            }
        }
        best
    }
}
