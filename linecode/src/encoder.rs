use crate::{
    bits::BitString,
    error::LinecodeResult,
    level::{Level, LevelSequence},
    scheme::Scheme,
};

pub fn encode(scheme: Scheme, bits: &BitString) -> LevelSequence {
    let levels = match scheme {
        Scheme::NrzL => nrz_l(bits),
        Scheme::NrzI => nrz_i(bits),
        Scheme::BipolarAmi => bipolar_ami(bits),
        Scheme::Pseudoternary => pseudoternary(bits),
        Scheme::Manchester => manchester(bits),
        Scheme::DifferentialManchester => differential_manchester(bits),
    };
    tracing::debug!(%scheme, %bits, levels = levels.len(), "encoded bit string");
    levels
}

/// Encodes raw text, rejecting anything that is not a non-empty run of `0`/`1`.
pub fn encode_str(scheme: Scheme, text: &str) -> LinecodeResult<LevelSequence> {
    let bits = BitString::parse(text).inspect_err(|e| {
        tracing::warn!(%scheme, error = %e, "refusing to encode");
    })?;
    Ok(encode(scheme, &bits))
}

pub fn nrz_l(bits: &BitString) -> LevelSequence {
    bits.iter()
        .map(|bit| if bit { Level::Positive } else { Level::Negative })
        .collect()
}

/// Static per-bit mapping with NRZ-L's polarity flipped. Does not look at
/// the previous level.
pub fn nrz_i(bits: &BitString) -> LevelSequence {
    bits.iter()
        .map(|bit| if bit { Level::Negative } else { Level::Positive })
        .collect()
}

pub fn bipolar_ami(bits: &BitString) -> LevelSequence {
    alternate_marks(bits, true)
}

pub fn pseudoternary(bits: &BitString) -> LevelSequence {
    alternate_marks(bits, false)
}

pub fn manchester(bits: &BitString) -> LevelSequence {
    bits.iter()
        .flat_map(|bit| {
            if bit {
                [Level::Positive, Level::Negative]
            } else {
                [Level::Negative, Level::Positive]
            }
        })
        .collect()
}

pub fn differential_manchester(bits: &BitString) -> LevelSequence {
    let (levels, _) = bits.iter().fold(
        (Vec::with_capacity(2 * bits.len()), Level::Positive),
        |(mut levels, level), bit| {
            if bit {
                let level = level.toggle();
                levels.extend([level, -level]);
                (levels, level)
            } else {
                levels.extend([level, level]);
                (levels, level.toggle())
            }
        },
    );
    levels
}

// `mark` bits take the running polarity, which flips after each use; the
// other bits sit at zero.
fn alternate_marks(bits: &BitString, mark: bool) -> LevelSequence {
    let (levels, _) = bits.iter().fold(
        (Vec::with_capacity(bits.len()), Level::Positive),
        |(mut levels, level), bit| {
            if bit == mark {
                levels.push(level);
                (levels, level.toggle())
            } else {
                levels.push(Level::Zero);
                (levels, level)
            }
        },
    );
    levels
}
