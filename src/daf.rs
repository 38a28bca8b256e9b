use crate::constants::{BavliTractate, YerushalmiTractate};

/// A page of the Babylonian Talmud daily cycle.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub struct BavliDaf {
    pub tractate: BavliTractate,
    pub page: i64,
}

/// A page of the Jerusalem Talmud daily cycle. On Yom Kippur and Tisha
/// B'Av the tractate is [`YerushalmiTractate::NoDaf`] and the page is 0.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub struct YerushalmiDaf {
    pub tractate: YerushalmiTractate,
    pub page: i64,
}

/// Blatt per Bavli tractate in cycle order. Shekalim is listed with its
/// 22-daf (Vilna edition) count used from cycle 8; cycles 1 through 7
/// studied only 13.
pub(crate) static BLATT_PER_BAVLI_TRACTATE: [i64; 40] = [
    64, 157, 105, 121, 22, 88, 56, 40, 35, 31, 32, 29, 27, 122, 112, 91, 66, 49, 90, 82, 119, 119,
    176, 113, 24, 49, 76, 14, 120, 110, 142, 61, 34, 34, 28, 22, 4, 10, 4, 73,
];

pub(crate) static SHEKALIM_BLATT_BEFORE_CYCLE_8: i64 = 13;

/// The short tractates at the end of the cycle are printed in a shared
/// volume, so their daf numbering continues where the previous one left
/// off rather than restarting at 2.
pub(crate) fn bavli_page_offset(tractate_index: usize) -> i64 {
    match tractate_index {
        36 => 21,
        37 => 24,
        38 => 32,
        _ => 0,
    }
}

pub(crate) static BLATT_PER_YERUSHALMI_TRACTATE: [i64; 39] = [
    68, 37, 34, 44, 31, 59, 26, 33, 28, 20, 13, 92, 65, 71, 22, 22, 42, 26, 26, 33, 34, 22, 19, 85,
    72, 47, 40, 47, 54, 48, 44, 37, 34, 44, 9, 57, 37, 19, 13,
];
