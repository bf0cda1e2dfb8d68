use crate::{
    bits::BitString,
    encoder,
    error::LinecodeResult,
    level::LevelSequence,
    scheme::Scheme,
    time_axis::{self, TimeAxis},
    validate,
};

/// Everything the renderer needs for one plot.
#[derive(Clone, Debug, PartialEq)]
pub struct Signal {
    pub scheme: Scheme,
    pub bits: BitString,
    pub levels: LevelSequence,
    pub axis: TimeAxis,
}

impl Signal {
    pub fn new(scheme: Scheme, bits: BitString) -> Self {
        let levels = encoder::encode(scheme, &bits);
        let axis = time_axis::build_axis(scheme, levels.len());
        Self {
            scheme,
            bits,
            levels,
            axis,
        }
    }

    pub fn plot(scheme: Option<Scheme>, text: &str) -> LinecodeResult<Self> {
        let (scheme, bits) = validate::validate(scheme, text)?;
        Ok(Self::new(scheme, bits))
    }

    pub fn bit_count(&self) -> usize {
        self.bits.len()
    }
}
