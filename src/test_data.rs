use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use std::fmt;

/// Inclusive bounds of generated identifiers.
pub const MIN_ID: i64 = 1;
pub const MAX_ID: i64 = 100_000_000;

const USERNAME_PREFIX: &str = "testuser_";

/// Pet sale status, as the pet store spells it on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Sold,
}

impl PetStatus {
    pub const ALL: [PetStatus; 3] = [PetStatus::Available, PetStatus::Pending, PetStatus::Sold];

    pub fn as_str(&self) -> &'static str {
        match self {
            PetStatus::Available => "available",
            PetStatus::Pending => "pending",
            PetStatus::Sold => "sold",
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fresh per-scenario inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestData {
    pub unique_id: i64,
    pub username: String,
    pub statuses: [PetStatus; 3],
}

pub struct TestDataGenerator {
    rng: Mutex<StdRng>,
}

impl Default for TestDataGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDataGenerator {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn generate(&self) -> TestData {
        let mut rng = self.rng.lock();
        let unique_id = rng.gen_range(MIN_ID..=MAX_ID);
        let suffix: u32 = rng.gen_range(100_000..=999_999);
        TestData {
            unique_id,
            username: format!("{}{}", USERNAME_PREFIX, suffix),
            statuses: PetStatus::ALL,
        }
    }

    pub fn random_id(&self) -> i64 {
        self.rng.lock().gen_range(MIN_ID..=MAX_ID)
    }

    pub fn random_status(&self) -> PetStatus {
        *PetStatus::ALL
            .choose(&mut *self.rng.lock())
            .unwrap_or(&PetStatus::Available)
    }
}
