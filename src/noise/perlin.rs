//! 2D gradient noise and fractal summation over an explicit permutation table

use super::permutation::PermutationTable;

/// Gradient directions selected by `hash & 7`
const GRADIENTS: [[f32; 2]; 8] = [
    [1.0, 0.0], [-1.0, 0.0], [0.0, 1.0], [0.0, -1.0],
    [1.0, 1.0], [-1.0, 1.0], [1.0, -1.0], [-1.0, -1.0],
];

/// Quintic fade `6t^5 - 15t^4 + 10t^3`
///
/// ```
/// use heightpatch::noise::fade;
/// assert_eq!(fade(0.0), 0.0);
/// assert_eq!(fade(1.0), 1.0);
/// assert_eq!(fade(0.5), 0.5);
/// ```
#[inline]
pub fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

#[inline]
fn grad(hash: usize, x: f32, y: f32) -> f32 {
    let g = &GRADIENTS[hash & 7];
    g[0] * x + g[1] * y
}

/// Fractal Brownian motion parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FbmParams {
    pub octaves: u32,
    /// Amplitude multiplier per octave (0.5 typical)
    pub persistence: f32,
    /// Frequency multiplier per octave (2.0 typical)
    pub lacunarity: f32,
}

impl FbmParams {
    /// Halving amplitude, doubling frequency
    pub fn new(octaves: u32) -> Self {
        Self { octaves, persistence: 0.5, lacunarity: 2.0 }
    }
}

impl Default for FbmParams {
    fn default() -> Self {
        Self::new(4)
    }
}

/// Upper bound on `|fbm|` relative to a single octave: `1 + 1/2 + ... `
///
/// ```
/// use heightpatch::noise::max_amplitude;
/// assert_eq!(max_amplitude(1), 1.0);
/// assert_eq!(max_amplitude(3), 1.75);
/// ```
pub fn max_amplitude(octaves: u32) -> f32 {
    let mut amp = 1.0;
    let mut sum = 0.0;
    for _ in 0..octaves {
        sum += amp;
        amp *= 0.5;
    }
    sum
}

/// Noise sampler bound to one permutation table.
///
/// Every sampling call goes through a context value, so terrains with
/// different seeds can coexist.
#[derive(Clone, Debug)]
pub struct NoiseContext {
    table: PermutationTable,
}

impl NoiseContext {
    pub fn new(table: PermutationTable) -> Self {
        Self { table }
    }

    /// Context with a deterministic table for `seed`
    pub fn from_seed(seed: u32) -> Self {
        Self::new(PermutationTable::from_seed(seed))
    }

    /// Context seeded from the process-wide random source
    pub fn random() -> Self {
        Self::new(PermutationTable::random())
    }

    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    /// Gradient noise at (x, y), roughly in [-1, 1] and not clamped.
    ///
    /// Zero at every lattice point. Periodic with period 256 on both axes.
    pub fn sample2d(&self, x: f32, y: f32) -> f32 {
        let fx = x.floor();
        let fy = y.floor();
        let x0 = fx as i32;
        let y0 = fy as i32;
        let x1 = x0.wrapping_add(1);
        let y1 = y0.wrapping_add(1);

        let xf = x - fx;
        let yf = y - fy;

        let u = fade(xf);
        let v = fade(yf);

        let aa = self.table.hash2(x0, y0);
        let ab = self.table.hash2(x0, y1);
        let ba = self.table.hash2(x1, y0);
        let bb = self.table.hash2(x1, y1);

        let g_aa = grad(aa, xf, yf);
        let g_ba = grad(ba, xf - 1.0, yf);
        let g_ab = grad(ab, xf, yf - 1.0);
        let g_bb = grad(bb, xf - 1.0, yf - 1.0);

        let top = lerp(g_aa, g_ba, u);
        let bottom = lerp(g_ab, g_bb, u);
        lerp(top, bottom, v)
    }

    /// Unnormalized fBm: frequency starts at 1 and doubles, amplitude starts
    /// at 1 and halves. Magnitude grows with `octaves` up to
    /// [`max_amplitude`].
    pub fn fbm(&self, x: f32, y: f32, octaves: u32) -> f32 {
        self.fbm_with(x, y, &FbmParams::new(octaves))
    }

    /// fBm with explicit persistence and lacunarity
    pub fn fbm_with(&self, x: f32, y: f32, params: &FbmParams) -> f32 {
        let mut sum = 0.0;
        let mut freq = 1.0;
        let mut amp = 1.0;
        for _ in 0..params.octaves {
            sum += self.sample2d(x * freq, y * freq) * amp;
            freq *= params.lacunarity;
            amp *= params.persistence;
        }
        sum
    }
}
