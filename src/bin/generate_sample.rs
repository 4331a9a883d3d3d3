use std::fmt::Write as _;
use std::io::Write as _;

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Magnitude of a synthetic spectrogram cell: a slowly gliding tone plus a
/// steady overtone on top of a quiet noise floor.
fn cell(freq_bin: usize, frame: usize, n_frames: usize) -> f64 {
    let f = freq_bin as f64;
    let t = frame as f64 / n_frames as f64;

    let glide = gaussian(f, 40.0 + 80.0 * t, 6.0, 1.0);
    let overtone = gaussian(f, 180.0, 10.0, 0.4 * (1.0 - t));
    let floor = 0.01;

    glide + overtone + floor
}

fn write_matrix(path: &str, rows: usize, cols: usize, value: impl Fn(usize, usize) -> f64) {
    let mut text = String::new();
    for r in 0..rows {
        for c in 0..cols {
            if c > 0 {
                text.push(' ');
            }
            write!(text, "{:.6e}", value(r, c)).expect("formatting value");
        }
        text.push('\n');
    }

    let mut file = std::fs::File::create(path).expect("Failed to create output file");
    file.write_all(text.as_bytes()).expect("Failed to write matrix");
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let n_bins = 257; // frequency bins (rows of the MATLAB-orientation file)
    let n_frames = 400; // time frames (columns)

    // Reference orientation: frequency x time, written as-is.
    let base: Vec<Vec<f64>> = (0..n_bins)
        .map(|bin| (0..n_frames).map(|frame| cell(bin, frame, n_frames)).collect())
        .collect();

    write_matrix("MajorTomSpectrogram.txt", n_bins, n_frames, |r, c| base[r][c]);

    // The C++ dump stores the transpose (time x frequency) and carries a
    // touch of numeric noise so the RMS difference is small but non-zero.
    let mut noisy: Vec<Vec<f64>> = vec![vec![0.0; n_bins]; n_frames];
    for (frame, row) in noisy.iter_mut().enumerate() {
        for (bin, v) in row.iter_mut().enumerate() {
            *v = base[bin][frame] + rng.gauss(0.0, 1e-4);
        }
    }

    write_matrix("MajorTom16.wav.txt", n_frames, n_bins, |r, c| noisy[r][c]);

    println!(
        "Wrote {n_bins}x{n_frames} reference and its noisy transpose \
         (MajorTomSpectrogram.txt, MajorTom16.wav.txt)"
    );
}
