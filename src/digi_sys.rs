use crate::constants::MAX_LEN;
use crate::error::{DigiSysError, Result};
use crate::filter::Filter;

/// Discrete-time linear filter defined by a rational transfer function
///
/// Holds numerator and denominator coefficients plus a bounded sliding
/// history of past inputs and outputs, and advances one sample per
/// `update` call following the standard LTI difference equation:
///
/// ```text
/// y[n] = gain * sum(b[i] * x[n-i])  -  sum(a[i] * y[n-i]),  i >= 1 in the feedback term
/// ```
///
/// The denominator is normalized at construction so that `a[0] == 1`;
/// the normalization factor is folded into the stored gain. With a
/// one-element denominator the feedback term vanishes and the filter
/// degenerates to a plain FIR convolution.
///
/// All state fits in two fixed-length buffers allocated once at
/// construction; `update` performs a bounded number of multiply-adds
/// and never allocates.
pub struct DigiSys {
    num_coeffs: Vec<f64>,
    den_coeffs: Vec<f64>,
    input_history: Vec<f64>,
    output_history: Vec<f64>,
    gain: f64,
}

impl DigiSys {
    /// Create a new filter from numerator and denominator coefficients
    ///
    /// Coefficients are given in order of increasing delay: `num[0]`
    /// weights the current input, `num[1]` the previous one, and so on.
    /// The denominator is divided through by `den[0]` so the stored
    /// leading coefficient is 1; the stored gain becomes `1 / den[0]`.
    ///
    /// # Arguments
    /// * `num` - Numerator (feed-forward) coefficients, 1 to `MAX_LEN` entries
    /// * `den` - Denominator (feedback) coefficients, 1 to `MAX_LEN` entries
    ///
    /// # Errors
    /// Returns `DigiSysError::Config` if either slice is empty or
    /// `den[0]` is zero, and `DigiSysError::Capacity` if either slice
    /// is longer than `MAX_LEN`.
    pub fn new(num: &[f64], den: &[f64]) -> Result<Self> {
        Self::normalized(1.0, num, den)
    }

    /// Create a new filter with an extra scalar gain
    ///
    /// Identical to `new`, then multiplies the stored gain by `gain`,
    /// so the net stored gain is `gain / den[0]`.
    ///
    /// # Errors
    /// Same conditions as `new`.
    pub fn with_gain(gain: f64, num: &[f64], den: &[f64]) -> Result<Self> {
        Self::normalized(gain, num, den)
    }

    /// Shared normalization routine behind both constructors
    fn normalized(extra_gain: f64, num: &[f64], den: &[f64]) -> Result<Self> {
        Self::check_len(num.len())?;
        Self::check_len(den.len())?;

        if den[0] == 0.0 {
            return Err(DigiSysError::Config(
                "leading denominator coefficient must be nonzero".to_string(),
            ));
        }

        let num_coeffs = num.to_vec();
        let den_coeffs: Vec<f64> = den.iter().map(|c| c / den[0]).collect();
        let gain = extra_gain / den[0];

        log::debug!(
            "DigiSys: {} numerator / {} denominator coefficients, gain {}",
            num_coeffs.len(),
            den_coeffs.len(),
            gain
        );

        Ok(Self {
            input_history: vec![0.0; num_coeffs.len()],
            output_history: vec![0.0; den_coeffs.len()],
            num_coeffs,
            den_coeffs,
            gain,
        })
    }

    fn check_len(len: usize) -> Result<()> {
        if len == 0 {
            return Err(DigiSysError::Config(
                "coefficient array must not be empty".to_string(),
            ));
        }
        if len > MAX_LEN {
            return Err(DigiSysError::Capacity { len, max: MAX_LEN });
        }
        Ok(())
    }

    /// Advance the filter by one time step and return the new output sample
    ///
    /// Shifts both histories by one position (discarding the oldest
    /// entry), records `input` as the newest input, and evaluates the
    /// difference equation against the shifted histories.
    pub fn update(&mut self, input: f64) -> f64 {
        // Most-recent-first: rotate pushes the oldest entry to index 0,
        // where it is immediately overwritten.
        self.input_history.rotate_right(1);
        self.input_history[0] = input;
        self.output_history.rotate_right(1);

        let mut acc = 0.0;
        for (coeff, past_input) in self.num_coeffs.iter().zip(self.input_history.iter()) {
            acc += coeff * past_input;
        }
        acc *= self.gain;
        for (coeff, past_output) in self
            .den_coeffs
            .iter()
            .zip(self.output_history.iter())
            .skip(1)
        {
            acc += -coeff * past_output;
        }

        self.output_history[0] = acc;
        acc
    }

    /// Clear both histories, returning the filter to its initial zero state
    ///
    /// Coefficients and gain are left untouched.
    pub fn reset(&mut self) {
        self.input_history.fill(0.0);
        self.output_history.fill(0.0);
    }

    /// Get the numerator coefficients
    pub fn num_coeffs(&self) -> &[f64] {
        &self.num_coeffs
    }

    /// Get the normalized denominator coefficients (leading entry is 1)
    pub fn den_coeffs(&self) -> &[f64] {
        &self.den_coeffs
    }

    /// Get the stored gain, including the normalization factor
    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Get the filter order (longest coefficient array minus one)
    pub fn order(&self) -> usize {
        self.num_coeffs.len().max(self.den_coeffs.len()) - 1
    }
}

impl Filter for DigiSys {
    fn process(&mut self, sample: f64) -> f64 {
        self.update(sample)
    }
}
