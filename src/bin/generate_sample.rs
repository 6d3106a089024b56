use serde::Serialize;

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

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    site: &'a str,
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: &'a str,
}

/// Booster generations in flight order: (category, max payload kg, success rate).
const ERAS: [(&str, f64, f64); 5] = [
    ("v1.0", 700.0, 0.2),
    ("v1.1", 4500.0, 0.35),
    ("FT", 9600.0, 0.7),
    ("B4", 6000.0, 0.75),
    ("B5", 9600.0, 0.95),
];

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

fn main() {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "spacex_launch_dash.csv".to_string());
    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path).expect("Failed to create output file");

    let mut flight_number = 0u32;
    for (era, &(category, max_payload, success_rate)) in ERAS.iter().enumerate() {
        for _ in 0..12 {
            flight_number += 1;
            let payload = (rng.next_f64() * max_payload).round();
            let class = u8::from(rng.next_f64() < success_rate);
            writer
                .serialize(Row {
                    flight_number,
                    site: rng.pick(&SITES),
                    class,
                    payload_mass_kg: payload,
                    booster_version: format!("F9 {category} B{}", 1000 + era * 20 + flight_number as usize),
                    booster_version_category: category,
                })
                .expect("Failed to write row");
        }
    }
    writer.flush().expect("Failed to flush writer");

    println!("Wrote {flight_number} launches to {output_path}");
}
