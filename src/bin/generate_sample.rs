//! Writes a synthetic `vehicles_us.csv` so the dashboard can run without the
//! original dataset. Deterministic: same seed, same file.

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    fn range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_u64() % (hi - lo + 1) as u64) as i64
    }
}

const MODELS: &[(&str, &str)] = &[
    ("ford f-150", "pickup"),
    ("chevrolet silverado", "pickup"),
    ("toyota camry", "sedan"),
    ("honda civic", "sedan"),
    ("bmw x5", "SUV"),
    ("jeep wrangler", "SUV"),
    ("honda odyssey", "mini-van"),
    ("ford mustang", "coupe"),
];

const CONDITIONS: &[&str] = &["new", "like new", "excellent", "good", "fair", "salvage"];
const FUELS: &[&str] = &["gas", "diesel", "hybrid", "electric"];
const TRANSMISSIONS: &[&str] = &["automatic", "manual"];
const COLORS: &[&str] = &["white", "black", "silver", "red", "blue", "grey"];
const CYLINDERS: &[i64] = &[4, 6, 8];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = SimpleRng::new(42);
    let n_rows = 2_000;

    let output_path = "vehicles_us.csv";
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record([
        "price",
        "model_year",
        "model",
        "condition",
        "cylinders",
        "fuel",
        "odometer",
        "transmission",
        "type",
        "paint_color",
        "is_4wd",
        "date_posted",
    ])?;

    for _ in 0..n_rows {
        let (model, vehicle_type) = rng.pick(MODELS);
        let condition = rng.pick(CONDITIONS);
        let model_year = rng.range(1995, 2019);
        let age = 2019 - model_year;
        let odometer = rng.range(0, 20_000) + age * rng.range(5_000, 15_000);
        let base_price = rng.range(3_000, 45_000);
        let price = (base_price - age * 800).max(500);
        let cylinders = *rng.pick(CYLINDERS);
        let is_4wd = vehicle_type == &"pickup" || vehicle_type == &"SUV";

        let month = rng.range(1, 12);
        let day = rng.range(1, 28);
        let date_posted = format!("2019-{month:02}-{day:02}");

        // Sprinkle nulls into the nullable columns at roughly the rates of
        // the real dataset.
        let model_year = opt(&mut rng, 0.07, model_year.to_string());
        let cylinders = opt(&mut rng, 0.10, cylinders.to_string());
        let odometer = opt(&mut rng, 0.15, odometer.to_string());
        let color = rng.pick(COLORS).to_string();
        let paint_color = opt(&mut rng, 0.18, color);
        let is_4wd = if is_4wd {
            "1.0".to_string()
        } else {
            // The upstream export leaves false blank rather than writing 0.
            String::new()
        };

        writer.write_record([
            price.to_string(),
            model_year,
            model.to_string(),
            condition.to_string(),
            cylinders,
            rng.pick(FUELS).to_string(),
            odometer,
            rng.pick(TRANSMISSIONS).to_string(),
            vehicle_type.to_string(),
            paint_color,
            is_4wd,
            date_posted,
        ])?;
    }

    writer.flush()?;
    println!("Wrote {n_rows} listings to {output_path}");
    Ok(())
}

fn opt(rng: &mut SimpleRng, null_rate: f64, value: String) -> String {
    if rng.next_f64() < null_rate {
        String::new()
    } else {
        value
    }
}
