//! Catalog of the 48 Reeds-Shepp path words
//!
//! Shared vocabulary with the pattern solver. Each name spells its segments:
//! `L`/`S`/`R` for steering, `f`/`b` for gear, and `pi2` after a segment
//! that is a fixed quarter turn.

use std::fmt;

/// Structural family a path word belongs to (`|` marks a gear change)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathFamily {
    /// CSC, both turns the same way
    CscSame,
    /// CSC, turns in opposite directions
    CscDifferent,
    /// C|C|C
    CuspCuspTriple,
    /// C|CC
    CuspThenCc,
    /// CC|C
    CcThenCusp,
    /// CCu|CuC
    CcuCuc,
    /// C|CuCu|C
    CuspCucuCusp,
    /// C|C(pi/2)SC
    CuspQuarterSc,
    /// CSC(pi/2)|C
    ScQuarterCusp,
    /// C|C(pi/2)SC(pi/2)|C
    CuspQuarterSQuarterCusp,
}

macro_rules! path_words {
    ($($family:ident => [$($word:ident),+ $(,)?]),+ $(,)?) => {
        /// Canonical Reeds-Shepp path word
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum PathWord {
            $($($word,)+)+
        }

        impl PathWord {
            /// Every path word, grouped by family
            pub const ALL: [PathWord; 48] = [$($(PathWord::$word,)+)+];

            pub fn name(self) -> &'static str {
                match self {
                    $($(PathWord::$word => stringify!($word),)+)+
                }
            }

            pub fn family(self) -> PathFamily {
                match self {
                    $($(PathWord::$word => PathFamily::$family,)+)+
                }
            }
        }
    };
}

path_words! {
    CscSame => [LfSfLf, LbSbLb, RfSfRf, RbSbRb],
    CscDifferent => [LfSfRf, LbSbRb, RfSfLf, RbSbLb],
    CuspCuspTriple => [LfRbLf, LbRfLb, RfLbRf, RbLfRb],
    CuspThenCc => [LfRbLb, LbRfLf, RfLbRb, RbLfRf],
    CcThenCusp => [LfRfLb, LbRbLf, RfLfRb, RbLbRf],
    CcuCuc => [LfRfLbRb, LbRbLfRf, RfLfRbLb, RbLbRfLf],
    CuspCucuCusp => [LfRbLbRf, LbRfLfRb, RfLbRbLf, RbLfRfLb],
    CuspQuarterSc => [
        LfRbpi2SbLb, LbRfpi2SfLf, RfLbpi2SbRb, RbLfpi2SfRf,
        LfRbpi2SbRb, LbRfpi2SfRf, RfLbpi2SbLb, RbLfpi2SfLf,
    ],
    ScQuarterCusp => [
        LfSfRfpi2Lb, LbSbRbpi2Lf, RfSfLfpi2Rb, RbSbLbpi2Rf,
        LfSfLfpi2Rb, LbSbLbpi2Rf, RfSfRfpi2Lb, RbSbRbpi2Lf,
    ],
    CuspQuarterSQuarterCusp => [LfRbpi2SbLbpi2Rf, LbRfpi2SfLfpi2Rb, RfLbpi2SbRbpi2Lf, RbLfpi2SfRfpi2Lb],
}

impl fmt::Display for PathWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
