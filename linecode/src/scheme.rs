use std::{fmt, str::FromStr};

use crate::error::LinecodeError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scheme {
    NrzL,
    NrzI,
    BipolarAmi,
    Pseudoternary,
    Manchester,
    DifferentialManchester,
}

impl Scheme {
    pub const ALL: [Scheme; 6] = [
        Scheme::NrzL,
        Scheme::NrzI,
        Scheme::BipolarAmi,
        Scheme::Pseudoternary,
        Scheme::Manchester,
        Scheme::DifferentialManchester,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scheme::NrzL => "NRZ-L",
            Scheme::NrzI => "NRZ-I",
            Scheme::BipolarAmi => "Bipolar AMI",
            Scheme::Pseudoternary => "Pseudoternary",
            Scheme::Manchester => "Manchester",
            Scheme::DifferentialManchester => "Differential Manchester",
        }
    }

    /// Number of signal levels emitted for every input bit.
    pub fn levels_per_bit(self) -> usize {
        match self {
            Scheme::Manchester | Scheme::DifferentialManchester => 2,
            Scheme::NrzL | Scheme::NrzI | Scheme::BipolarAmi | Scheme::Pseudoternary => 1,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Scheme::NrzL => &["nrzl", "nrz_l"],
            Scheme::NrzI => &["nrzi", "nrz_i"],
            Scheme::BipolarAmi => &["ami", "bipolar", "bipolar-ami", "bipolar_ami"],
            Scheme::Pseudoternary => &["pseudo"],
            Scheme::Manchester => &[],
            Scheme::DifferentialManchester => &[
                "dm",
                "diff-manchester",
                "differential-manchester",
                "differential_manchester",
            ],
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = LinecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Scheme::ALL
            .into_iter()
            .find(|scheme| {
                scheme.name().to_lowercase() == wanted || scheme.aliases().contains(&&wanted[..])
            })
            .ok_or_else(|| LinecodeError::UnknownScheme(s.to_string()))
    }
}
