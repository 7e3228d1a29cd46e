use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::TransformError;

const HAAR_DEC_LO: [f64; 2] = [
    std::f64::consts::FRAC_1_SQRT_2,
    std::f64::consts::FRAC_1_SQRT_2,
];

const DB2_DEC_LO: [f64; 4] = [
    -0.12940952255126034,
    0.2241438680420134,
    0.8365163037378077,
    0.4829629131445341,
];

const DB3_DEC_LO: [f64; 6] = [
    0.03522629188570953,
    -0.08544127388202666,
    -0.13501102001025458,
    0.45987750211849154,
    0.8068915093110925,
    0.33267055295008263,
];

const DB4_DEC_LO: [f64; 8] = [
    -0.010597401785069032,
    0.0328830116668852,
    0.030841381835560764,
    -0.18703481171909309,
    -0.027983769416859854,
    0.6308807679298589,
    0.7148465705529157,
    0.2303778133088965,
];

/// The closed set of wavelet families the decomposer understands.
///
/// `db1` carries the same filters as `haar`, both names are accepted because both are common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wavelet {
    #[default]
    Haar,
    Db1,
    Db2,
    Db3,
    Db4,
}

impl Wavelet {
    pub const ALL: [Wavelet; 5] = [
        Wavelet::Haar,
        Wavelet::Db1,
        Wavelet::Db2,
        Wavelet::Db3,
        Wavelet::Db4,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Wavelet::Haar => "haar",
            Wavelet::Db1 => "db1",
            Wavelet::Db2 => "db2",
            Wavelet::Db3 => "db3",
            Wavelet::Db4 => "db4",
        }
    }

    fn decomposition_low_pass(&self) -> &'static [f64] {
        match self {
            Wavelet::Haar | Wavelet::Db1 => &HAAR_DEC_LO,
            Wavelet::Db2 => &DB2_DEC_LO,
            Wavelet::Db3 => &DB3_DEC_LO,
            Wavelet::Db4 => &DB4_DEC_LO,
        }
    }

    pub fn filter_len(&self) -> usize {
        self.decomposition_low_pass().len()
    }

    pub fn filter_bank(&self) -> FilterBank {
        FilterBank::orthogonal(self.decomposition_low_pass())
    }

    /// Highest level for which every subband of a `rows x cols` input keeps at least one
    /// sample that is not purely made up of boundary extension.
    pub fn max_level(&self, rows: usize, cols: usize) -> usize {
        let ratio = rows.min(cols) / (self.filter_len() - 1);
        ratio.checked_ilog2().unwrap_or(0) as usize
    }
}

impl Display for Wavelet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Wavelet {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Wavelet::ALL
            .into_iter()
            .find(|w| w.name() == name)
            .ok_or_else(|| TransformError::UnsupportedWavelet(s.to_string()))
    }
}

/// Analysis and synthesis filters of an orthogonal wavelet.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBank {
    pub dec_lo: Vec<f64>,
    pub dec_hi: Vec<f64>,
    pub rec_lo: Vec<f64>,
    pub rec_hi: Vec<f64>,
}

impl FilterBank {
    /// Derives the quadrature mirror filters from the decomposition low pass.
    pub fn orthogonal(dec_lo: &[f64]) -> Self {
        let len = dec_lo.len();
        let dec_hi: Vec<f64> = (0..len)
            .map(|j| {
                let sign = if j % 2 == 0 { -1.0 } else { 1.0 };
                sign * dec_lo[len - 1 - j]
            })
            .collect();

        Self {
            dec_lo: dec_lo.to_vec(),
            rec_lo: dec_lo.iter().rev().copied().collect(),
            rec_hi: dec_hi.iter().rev().copied().collect(),
            dec_hi,
        }
    }

    pub fn len(&self) -> usize {
        self.dec_lo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dec_lo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_all_supported_names() {
        assert_eq!("haar".parse::<Wavelet>(), Ok(Wavelet::Haar));
        assert_eq!("db1".parse::<Wavelet>(), Ok(Wavelet::Db1));
        assert_eq!(" DB2 ".parse::<Wavelet>(), Ok(Wavelet::Db2));
        for w in Wavelet::ALL {
            assert_eq!(w.to_string().parse::<Wavelet>(), Ok(w));
        }
    }

    #[test]
    fn should_reject_unknown_names_instead_of_defaulting() {
        assert_eq!(
            "iyus-svd".parse::<Wavelet>(),
            Err(TransformError::UnsupportedWavelet("iyus-svd".to_string()))
        );
        assert!("".parse::<Wavelet>().is_err());
        assert!("sym5".parse::<Wavelet>().is_err());
    }

    #[test]
    fn should_build_haar_filters() {
        let bank = Wavelet::Haar.filter_bank();
        let s = std::f64::consts::FRAC_1_SQRT_2;

        assert_eq!(bank.dec_hi, vec![-s, s]);
        assert_eq!(bank.rec_lo, vec![s, s]);
        assert_eq!(bank.rec_hi, vec![s, -s]);
        assert_eq!(Wavelet::Db1.filter_bank(), bank);
    }

    #[test]
    fn should_have_orthonormal_low_pass_filters() {
        for w in Wavelet::ALL {
            let bank = w.filter_bank();
            let sum: f64 = bank.dec_lo.iter().sum();
            let energy: f64 = bank.dec_lo.iter().map(|v| v * v).sum();

            assert!((sum - std::f64::consts::SQRT_2).abs() < 1e-9, "{w}");
            assert!((energy - 1.0).abs() < 1e-9, "{w}");
            assert_eq!(bank.len(), w.filter_len());
        }
    }

    #[test]
    fn should_compute_max_level() {
        assert_eq!(Wavelet::Haar.max_level(512, 512), 9);
        assert_eq!(Wavelet::Db2.max_level(512, 512), 7);
        assert_eq!(Wavelet::Db4.max_level(512, 512), 6);
        assert_eq!(Wavelet::Haar.max_level(512, 3), 1);
        assert_eq!(Wavelet::Haar.max_level(1, 1), 0);
        assert_eq!(Wavelet::Db2.max_level(2, 2), 0);
    }
}
