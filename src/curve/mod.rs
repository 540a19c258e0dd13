pub mod editor;
pub mod grid;
pub mod presets;
pub mod raster;

/// Number of entries in a lookup table, one per input intensity level.
pub const TABLE_SIZE: usize = 256;

/// Maps each 8-bit input intensity to an 8-bit output intensity.
///
/// The table is always exactly [`TABLE_SIZE`] entries; entry `i` is the
/// output for input intensity `i`. Free-hand editing sets columns
/// independently, so a table is allowed to be non-monotonic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    values: [u8; TABLE_SIZE],
}

impl LookupTable {
    /// The identity mapping: every intensity maps to itself.
    pub fn identity() -> Self {
        Self::from_fn(|i| i)
    }

    /// Build a table by evaluating `f` at every input level.
    pub fn from_fn(f: impl Fn(u8) -> u8) -> Self {
        let mut values = [0u8; TABLE_SIZE];
        for (i, v) in values.iter_mut().enumerate() {
            *v = f(i as u8);
        }
        Self { values }
    }

    /// Output intensity for the given input intensity.
    pub fn get(&self, input: u8) -> u8 {
        self.values[input as usize]
    }

    pub fn set(&mut self, input: u8, output: u8) {
        self.values[input as usize] = output;
    }

    pub fn values(&self) -> &[u8; TABLE_SIZE] {
        &self.values
    }
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::identity()
    }
}
