//! Writes a synthetic vehicle-population CSV for demoing the dashboard,
//! including a sprinkle of dirty rows (blank makes, missing years,
//! non-numeric ranges) so the cleaning pass has something to do.

use std::error::Error;

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

    /// Uniform integer in `[0, n)`.
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

const MAKES: &[(&str, &[&str])] = &[
    ("TESLA", &["MODEL 3", "MODEL Y", "MODEL S"]),
    ("NISSAN", &["LEAF", "ARIYA"]),
    ("CHEVROLET", &["BOLT EV", "VOLT"]),
    ("KIA", &["NIRO", "EV6"]),
    ("FORD", &["MUSTANG MACH-E", "F-150 LIGHTNING"]),
    ("BMW", &["I3", "I4"]),
    ("TOYOTA", &["PRIUS PRIME", "RAV4 PRIME"]),
    ("VOLKSWAGEN", &["ID.4"]),
    ("HYUNDAI", &["IONIQ 5", "KONA ELECTRIC"]),
    ("RIVIAN", &["R1T", "R1S"]),
    ("POLESTAR", &["PS2"]),
    ("AUDI", &["E-TRON"]),
];

const BEV: &str = "Battery Electric Vehicle (BEV)";
const PHEV: &str = "Plug-in Hybrid Electric Vehicle (PHEV)";

const COUNTIES: &[&str] = &["King", "Snohomish", "Pierce", "Thurston", "Clark"];

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = SimpleRng::new(42);
    let n_rows = 500;

    let output_path = "sample_vehicles.csv";
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record([
        "VIN (1-10)",
        "County",
        "Model Year",
        "Make",
        "Model",
        "Electric Vehicle Type",
        "Electric Range",
        "DOL Vehicle ID",
        "2020 Census Tract",
    ])?;

    for i in 0..n_rows {
        let (make, models) = MAKES[rng.below(MAKES.len() as u64) as usize];
        let model = models[rng.below(models.len() as u64) as usize];
        let county = COUNTIES[rng.below(COUNTIES.len() as u64) as usize];
        let year = 2011 + rng.below(14) as i32;

        // PHEVs report short ranges, BEVs long ones, and a slice of rows
        // carries no type at all (mirrors real registry exports).
        let type_roll = rng.below(10);
        let (vtype, range) = if type_roll < 6 {
            (BEV, 150 + rng.below(250))
        } else if type_roll < 9 {
            (PHEV, 15 + rng.below(40))
        } else {
            ("", 0)
        };

        let vin = format!("5YJ{:07}", rng.below(10_000_000));
        let dol_id = (100_000 + rng.below(900_000)).to_string();
        let tract = format!("530330{:04}", rng.below(10_000));

        // Dirty rows to exercise the cleaning pass.
        let make = if i % 40 == 39 { "" } else { make };
        let year_cell = if i % 37 == 36 {
            String::new()
        } else {
            year.to_string()
        };
        let range_cell = if i % 23 == 22 {
            "N/A".to_string()
        } else {
            range.to_string()
        };

        writer.write_record([
            vin.as_str(),
            county,
            year_cell.as_str(),
            make,
            model,
            vtype,
            range_cell.as_str(),
            dol_id.as_str(),
            tract.as_str(),
        ])?;
    }

    writer.flush()?;
    println!("Wrote {n_rows} vehicles to {output_path}");
    Ok(())
}
