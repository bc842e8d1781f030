//! Write a synthetic summed mass spectrum to `sum_spectrum.parquet`, in the
//! flat `mz` / `intensity` schema the main binary loads.

use std::sync::Arc;

use arrow::array::Float64Array;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Sum the peak shapes over the mass axis and add baseline noise.
fn generate_spectrum(mass_axis: &[f64], peaks: &[(f64, f64, f64)], rng: &mut SimpleRng) -> Vec<f64> {
    mass_axis
        .iter()
        .map(|&mz| {
            let signal: f64 = peaks
                .iter()
                .map(|&(mu, sigma, amp)| gaussian(mz, mu, sigma, amp))
                .sum();
            (signal + rng.gauss(200.0, 60.0)).max(0.0)
        })
        .collect()
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

fn main() {
    let mut rng = SimpleRng::new(42);

    // Mass axis: 0.8 → 960.5 amu, step 0.02.
    let mass_axis: Vec<f64> = (0..47_986).map(|i| 0.8 + i as f64 * 0.02).collect();

    // Peaks sit slightly off integer masses, the way a lightly
    // miscalibrated axis would place them: (center, sigma, amplitude).
    let peaks: Vec<(f64, f64, f64)> = vec![
        (18.01, 0.03, 4.5e6),  // H2O
        (27.99, 0.03, 1.2e7),  // N2 / CO
        (31.99, 0.03, 3.0e6),  // O2
        (39.96, 0.02, 8.0e5),  // Ar
        (43.99, 0.03, 6.5e5),  // CO2
        (59.05, 0.03, 2.4e5),
        (73.05, 0.04, 9.0e4),
        (91.05, 0.04, 4.0e4),
        (105.07, 0.04, 2.5e4),
        (147.12, 0.05, 1.8e4),
        (207.03, 0.05, 1.2e4),
        (281.05, 0.05, 6.0e3),
        (355.07, 0.06, 3.5e3),
        (429.09, 0.06, 2.0e3),
        (503.11, 0.06, 1.1e3),
    ];

    let intensity = generate_spectrum(&mass_axis, &peaks, &mut rng);

    let mz_array = Float64Array::from(mass_axis);
    let intensity_array = Float64Array::from(intensity);

    let schema = Arc::new(Schema::new(vec![
        Field::new("mz", DataType::Float64, false),
        Field::new("intensity", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![Arc::new(mz_array), Arc::new(intensity_array)],
    )
    .expect("Failed to create RecordBatch");

    let output_path = "sum_spectrum.parquet";
    let file = std::fs::File::create(output_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!(
        "Wrote {} axis points to {output_path}",
        batch.num_rows()
    );
}
