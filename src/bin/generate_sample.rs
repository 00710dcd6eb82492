use std::path::Path;
use std::sync::Arc;

use arrow::array::Float64Array;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

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

/// One tracked frame.  `None` formants are tracker dropouts: written as
/// `--undefined--` in CSV and NaN in Parquet, like real tracking output.
struct Frame {
    time: f64,
    f1: Option<f64>,
    f2: Option<f64>,
    f3: f64,
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Synthesize one sustained vowel: a short transition out of a neutral
/// tract shape, then a steady phase where most frames snap to the same
/// quantized value and the rest jitter around it.
fn synthesize_vowel(base: (f64, f64), rng: &mut SimpleRng) -> Vec<Frame> {
    let n_frames = 40;
    let onset = (500.0, 1500.0);

    let mut frames = Vec::with_capacity(n_frames);
    for i in 0..n_frames {
        let time = i as f64 * 0.005;
        let f3 = round1(rng.gauss(2800.0, 90.0));

        // Leading transition frames are genuine outliers.
        if i < 3 {
            let t = (i + 1) as f64 / 4.0;
            frames.push(Frame {
                time,
                f1: Some(round1(lerp(onset.0, base.0, t) + rng.gauss(0.0, 20.0))),
                f2: Some(round1(lerp(onset.1, base.1, t) + rng.gauss(0.0, 45.0))),
                f3,
            });
            continue;
        }

        // Occasional tracker dropout.
        if rng.next_f64() < 0.05 {
            frames.push(Frame {
                time,
                f1: None,
                f2: None,
                f3,
            });
            continue;
        }

        let (f1, f2) = if rng.next_f64() < 0.6 {
            (base.0.round(), base.1.round())
        } else {
            (
                round1(base.0 + rng.gauss(0.0, 12.0)),
                round1(base.1 + rng.gauss(0.0, 30.0)),
            )
        };
        frames.push(Frame {
            time,
            f1: Some(f1),
            f2: Some(f2),
            f3,
        });
    }
    frames
}

fn format_formant(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| "--undefined--".to_string())
}

fn write_csv(path: &Path, frames: &[Frame]) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create CSV file");
    writer
        .write_record(["time", "f1", "f2", "f3"])
        .expect("Failed to write CSV header");
    for frame in frames {
        writer
            .write_record([
                format!("{:.3}", frame.time),
                format_formant(frame.f1),
                format_formant(frame.f2),
                format!("{:.1}", frame.f3),
            ])
            .expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV");
}

fn write_parquet(path: &Path, frames: &[Frame]) {
    let time = Float64Array::from(frames.iter().map(|f| f.time).collect::<Vec<_>>());
    let f1 = Float64Array::from(
        frames
            .iter()
            .map(|f| f.f1.unwrap_or(f64::NAN))
            .collect::<Vec<_>>(),
    );
    let f2 = Float64Array::from(
        frames
            .iter()
            .map(|f| f.f2.unwrap_or(f64::NAN))
            .collect::<Vec<_>>(),
    );
    let f3 = Float64Array::from(frames.iter().map(|f| f.f3).collect::<Vec<_>>());

    let schema = Arc::new(Schema::new(vec![
        Field::new("time", DataType::Float64, false),
        Field::new("f1", DataType::Float64, false),
        Field::new("f2", DataType::Float64, false),
        Field::new("f3", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(time),
            Arc::new(f1),
            Arc::new(f2),
            Arc::new(f3),
        ],
    )
    .expect("Failed to create RecordBatch");

    let file = std::fs::File::create(path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // A plausible participant: close to typical on /i/ and /a/, with a
    // clearly fronted /u/.
    let targets: [(&str, (f64, f64)); 3] = [
        ("i", (285.0, 2350.0)),
        ("a", (760.0, 1120.0)),
        ("u", (320.0, 1000.0)),
    ];

    let out_dir = Path::new("sample_data");
    std::fs::create_dir_all(out_dir).expect("Failed to create sample_data directory");

    for (vowel, base) in targets {
        let frames = synthesize_vowel(base, &mut rng);
        let valid = frames.iter().filter(|f| f.f1.is_some()).count();

        let csv_path = out_dir.join(format!("{vowel}.csv"));
        let parquet_path = out_dir.join(format!("{vowel}.parquet"));
        write_csv(&csv_path, &frames);
        write_parquet(&parquet_path, &frames);

        println!(
            "Wrote {} frames ({valid} usable) for /{vowel}/ to {} and {}",
            frames.len(),
            csv_path.display(),
            parquet_path.display()
        );
    }

    println!("Load the sample_data folder from the app (File → Open folder…).");
}
