use super::LookupTable;

/// Exponent used by the gamma preset.
pub const GAMMA: f64 = 2.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurvePreset {
    Gamma,
    Linear,
    Log,
    InverseLog,
}

impl CurvePreset {
    pub const ALL: &[CurvePreset] = &[
        CurvePreset::Gamma,
        CurvePreset::Linear,
        CurvePreset::Log,
        CurvePreset::InverseLog,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CurvePreset::Gamma => "Gamma (2.2)",
            CurvePreset::Linear => "Linear",
            CurvePreset::Log => "Logarithmic",
            CurvePreset::InverseLog => "Inverse Log",
        }
    }

    /// Generate the full table for this preset.
    ///
    /// Fractional results truncate toward zero (integer cast), not
    /// round; the two differ by one code value on many entries.
    pub fn table(self) -> LookupTable {
        // log2(256) = 8, kept symbolic for legibility.
        let log_max = 256f64.log2();
        match self {
            CurvePreset::Gamma => {
                LookupTable::from_fn(|i| (255.0 * (i as f64 / 255.0).powf(GAMMA)) as u8)
            }
            CurvePreset::Linear => LookupTable::identity(),
            CurvePreset::Log => {
                LookupTable::from_fn(|i| (255.0 * (1.0 + i as f64).log2() / log_max) as u8)
            }
            CurvePreset::InverseLog => LookupTable::from_fn(|i| {
                (255.0 * (1.0 - (1.0 + (255 - i) as f64).log2() / log_max)) as u8
            }),
        }
    }
}
