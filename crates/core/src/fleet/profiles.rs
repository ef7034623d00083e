//! Industry profiles as data.
//!
//! Each profile maps to a [`ProfileSpec`]: the table-name prefixes it cycles
//! through, how many tables a fleet has, and the distribution utilization
//! factors are drawn from. The generator only ever sees a `ProfileSpec`, so
//! adding a profile means adding a row here.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::random::RandomSource;

const ECOMMERCE_PREFIXES: &[&str] = &[
    "orders",
    "carts",
    "products",
    "inventory",
    "customers",
    "sessions",
    "payments",
    "reviews",
    "wishlists",
    "shipments",
];

const GAMING_PREFIXES: &[&str] = &[
    "player-profiles",
    "leaderboards",
    "matches",
    "player-inventory",
    "achievements",
    "game-sessions",
    "guilds",
    "telemetry",
];

const FINANCIAL_PREFIXES: &[&str] = &[
    "transactions",
    "accounts",
    "ledger",
    "audit-log",
    "fraud-signals",
    "kyc-records",
    "payment-instructions",
    "statements",
    "risk-scores",
];

/// An inclusive-exclusive band `[low, high)` of utilization factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub low: f64,
    pub high: f64,
}

impl Band {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.float_between(self.low, self.high)
    }
}

/// Distribution a profile draws utilization factors from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UtilizationModel {
    /// Single band.
    Uniform(Band),
    /// `first` with probability `p_first`, otherwise `second`.
    Bimodal { p_first: f64, first: Band, second: Band },
}

impl UtilizationModel {
    /// Draws a utilization factor in `[0, 1]`.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f64 {
        let factor = match self {
            UtilizationModel::Uniform(band) => band.sample(rng),
            UtilizationModel::Bimodal {
                p_first,
                first,
                second,
            } => {
                if rng.chance(*p_first) {
                    first.sample(rng)
                } else {
                    second.sample(rng)
                }
            }
        };
        factor.clamp(0.0, 1.0)
    }

    /// Smallest and largest factor this model can produce.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            UtilizationModel::Uniform(band) => (band.low, band.high),
            UtilizationModel::Bimodal { first, second, .. } => {
                (first.low.min(second.low), first.high.max(second.high))
            }
        }
    }
}

/// Everything the generator needs to know about a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSpec {
    pub prefixes: &'static [&'static str],
    pub table_count: usize,
    pub utilization: UtilizationModel,
}

impl ProfileSpec {
    /// Prefix for the table generated at position `index` (0-based).
    pub fn prefix_for(&self, index: usize) -> &'static str {
        self.prefixes[index % self.prefixes.len()]
    }
}

/// Industry profile selecting a [`ProfileSpec`].
///
/// Unrecognized tags are kept verbatim in [`ProfileKind::Other`] and fall
/// back to a generic profile instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ProfileKind {
    #[default]
    Ecommerce,
    Gaming,
    Financial,
    Other(String),
}

impl ProfileKind {
    /// The profiles with dedicated specs.
    pub const KNOWN: [ProfileKind; 3] = [
        ProfileKind::Ecommerce,
        ProfileKind::Gaming,
        ProfileKind::Financial,
    ];

    /// Parses a profile tag case-insensitively. Never fails.
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "ecommerce" => ProfileKind::Ecommerce,
            "gaming" => ProfileKind::Gaming,
            "financial" => ProfileKind::Financial,
            _ => ProfileKind::Other(tag.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ProfileKind::Ecommerce => "ecommerce",
            ProfileKind::Gaming => "gaming",
            ProfileKind::Financial => "financial",
            ProfileKind::Other(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ProfileKind::Other(_))
    }

    /// Looks up the generation parameters for this profile.
    pub fn spec(&self) -> ProfileSpec {
        match self {
            ProfileKind::Ecommerce => ProfileSpec {
                prefixes: ECOMMERCE_PREFIXES,
                table_count: 70,
                utilization: UtilizationModel::Bimodal {
                    p_first: 0.3,
                    first: Band::new(0.05, 0.30),
                    second: Band::new(0.40, 0.90),
                },
            },
            ProfileKind::Gaming => ProfileSpec {
                prefixes: GAMING_PREFIXES,
                table_count: 45,
                utilization: UtilizationModel::Bimodal {
                    p_first: 0.5,
                    first: Band::new(0.70, 0.95),
                    second: Band::new(0.10, 0.40),
                },
            },
            ProfileKind::Financial => ProfileSpec {
                prefixes: FINANCIAL_PREFIXES,
                table_count: 90,
                utilization: UtilizationModel::Uniform(Band::new(0.15, 0.50)),
            },
            ProfileKind::Other(_) => ProfileSpec {
                prefixes: ECOMMERCE_PREFIXES,
                table_count: 50,
                utilization: UtilizationModel::Uniform(Band::new(0.20, 0.80)),
            },
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ProfileKind {
    fn from(tag: &str) -> Self {
        ProfileKind::parse(tag)
    }
}

impl Serialize for ProfileKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProfileKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(ProfileKind::parse(&tag))
    }
}

/// Public description of a profile, as listed by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub key: String,
    pub table_count: usize,
    pub prefixes: Vec<String>,
}

impl From<&ProfileKind> for ProfileSummary {
    fn from(kind: &ProfileKind) -> Self {
        let spec = kind.spec();
        Self {
            key: kind.as_str().to_string(),
            table_count: spec.table_count,
            prefixes: spec.prefixes.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Summaries of every profile with a dedicated spec.
pub fn known_profiles() -> Vec<ProfileSummary> {
    ProfileKind::KNOWN.iter().map(ProfileSummary::from).collect()
}
