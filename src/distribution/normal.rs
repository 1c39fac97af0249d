// Standard normal distribution
//
// CDF via the complementary error function; quantile via Wichura's
// algorithm AS 241 (PPND16), accurate to about 1e-16 relative.
//
// Reference: Wichura, M. J. (1988). Algorithm AS 241: The percentage points
//     of the normal distribution. Applied Statistics 37(3), 477-484.

use crate::error::{Result, StatError};

/// Standard normal cumulative distribution function Φ(x)
///
/// Total on the reals: `NaN` maps to `NaN`, `±∞` to `1` / `0`.
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / std::f64::consts::SQRT_2)
}

/// Standard normal quantile function Φ⁻¹(p)
///
/// # Errors
/// `InvalidParameter` if `p` is outside `[0, 1]`. `p = 0` and `p = 1` map to
/// `-∞` and `+∞`; `NaN` maps to `NaN`.
///
/// # Example
/// ```
/// use tinystat::distribution::normal_quantile;
///
/// let z = normal_quantile(0.975).unwrap();
/// assert!((z - 1.959_963_984_540_054).abs() < 1e-12);
/// ```
#[allow(clippy::excessive_precision)]
pub fn normal_quantile(p: f64) -> Result<f64> {
    if p.is_nan() {
        return Ok(f64::NAN);
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(StatError::invalid("p", p, "probability must be in [0, 1]"));
    }
    if p == 0.0 {
        return Ok(f64::NEG_INFINITY);
    }
    if p == 1.0 {
        return Ok(f64::INFINITY);
    }

    let q = p - 0.5;

    // Central region, |q| <= 0.425
    if q.abs() <= 0.425 {
        let r = 0.180_625 - q * q;
        let num = (((((((r * 2_509.080_928_730_122_672_7 + 33_430.575_583_588_128_105) * r
            + 67_265.770_927_008_700_853)
            * r
            + 45_921.953_931_549_871_457)
            * r
            + 13_731.693_765_509_461_125)
            * r
            + 1_971.590_950_306_551_442_7)
            * r
            + 133.141_667_891_784_377_45)
            * r
            + 3.387_132_872_796_366_608);
        let den = (((((((r * 5_226.495_278_852_545_925 + 28_729.085_735_721_942_674) * r
            + 39_307.895_800_092_710_61)
            * r
            + 21_213.794_301_586_595_867)
            * r
            + 5_394.196_021_424_751_107_7)
            * r
            + 687.187_007_492_057_908_3)
            * r
            + 42.313_330_701_600_911_252)
            * r
            + 1.0);
        return Ok(q * num / den);
    }

    // Tails: r = sqrt(-ln(min(p, 1-p)))
    let tail = if q < 0.0 { p } else { 1.0 - p };
    let mut r = (-tail.ln()).sqrt();

    let value = if r <= 5.0 {
        r -= 1.6;
        let num = (((((((r * 7.745_450_142_783_414_076_4e-4 + 0.022_723_844_989_269_184_583_3)
            * r
            + 0.241_780_725_177_450_611_77)
            * r
            + 1.270_458_252_452_368_382_58)
            * r
            + 3.647_848_324_763_204_605_04)
            * r
            + 5.769_497_221_460_691_405_5)
            * r
            + 4.630_337_846_156_545_295_9)
            * r
            + 1.423_437_110_749_683_577_34);
        let den = (((((((r * 1.050_750_071_644_416_843_24e-9 + 5.475_938_084_995_344_946e-4)
            * r
            + 0.015_198_666_563_616_457_196_6)
            * r
            + 0.148_103_976_427_480_074_59)
            * r
            + 0.689_767_334_985_100_004_55)
            * r
            + 1.676_384_830_183_803_849_4)
            * r
            + 2.053_191_626_637_758_821_87)
            * r
            + 1.0);
        num / den
    } else {
        r -= 5.0;
        let num = (((((((r * 2.010_334_399_292_288_132_65e-7 + 2.711_555_568_743_487_578_15e-5)
            * r
            + 0.001_242_660_947_388_078_438_6)
            * r
            + 0.026_532_189_526_576_123_093)
            * r
            + 0.296_560_571_828_504_891_23)
            * r
            + 1.784_826_539_917_291_335_8)
            * r
            + 5.463_784_911_164_114_369_9)
            * r
            + 6.657_904_643_501_103_777_2);
        let den = (((((((r * 2.044_263_103_389_939_785_64e-15 + 1.421_511_758_316_445_888_7e-7)
            * r
            + 1.846_318_317_510_054_681_8e-5)
            * r
            + 7.868_691_311_456_132_591e-4)
            * r
            + 0.014_875_361_290_850_614_852_5)
            * r
            + 0.136_929_880_922_735_805_31)
            * r
            + 0.599_832_206_555_887_937_69)
            * r
            + 1.0);
        num / den
    };

    Ok(if q < 0.0 { -value } else { value })
}
