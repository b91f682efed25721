use super::{clamp_byte, normalize_angle};
use crate::Float;

/// Evaluate the piecewise linear hue function for one RGB channel.
///
/// The hue is a fraction of a full turn. It may be off by at most one turn in
/// either direction, which this function corrects with a single increment or
/// decrement.
#[inline]
fn hue_to_channel(m1: Float, m2: Float, hue: Float) -> Float {
    let mut h = hue;
    if h < 0.0 {
        h += 1.0;
    } else if h > 1.0 {
        h -= 1.0;
    }

    if h * 6.0 < 1.0 {
        (m2 - m1).mul_add(h * 6.0, m1)
    } else if h * 2.0 < 1.0 {
        m2
    } else if h * 3.0 < 2.0 {
        (m2 - m1).mul_add((2.0 / 3.0 - h) * 6.0, m1)
    } else {
        m1
    }
}

/// Convert HSL to 24-bit RGB.
///
/// The hue is in degrees and may have any magnitude including a negative one.
/// Saturation and lightness are percentages, clamped to `0..=100`.
///
/// A saturation of zero always produces black, independent of the lightness.
/// That isn't true gray, but it is the behavior of the algorithm this function
/// reproduces.
pub(crate) fn hsl_to_rgb(hue: Float, saturation: Float, lightness: Float) -> [u8; 3] {
    let h = normalize_angle(hue);
    let s = saturation.clamp(0.0, 100.0) / 100.0;
    let l = lightness.clamp(0.0, 100.0) / 100.0;

    if s == 0.0 || s.is_nan() {
        return [0, 0, 0];
    }

    let m2 = if l <= 0.5 {
        l.mul_add(s, l)
    } else {
        (-l).mul_add(s, l + s)
    };
    let m1 = l.mul_add(2.0, -m2);

    [
        clamp_byte(hue_to_channel(m1, m2, h + 1.0 / 3.0) * 255.0),
        clamp_byte(hue_to_channel(m1, m2, h) * 255.0),
        clamp_byte(hue_to_channel(m1, m2, h - 1.0 / 3.0) * 255.0),
    ]
}

/// Convert HSV to HSL.
///
/// All coordinates but the hue are percentages. If the intermediate lightness
/// term `(2 - s) * v` is exactly 0 or 2, the saturation becomes 0.
fn hsv_to_hsl(hue: Float, saturation: Float, value: Float) -> [Float; 3] {
    let s = saturation.clamp(0.0, 100.0) / 100.0;
    let v = value.clamp(0.0, 100.0) / 100.0;

    let term = (2.0 - s) * v;
    let saturation = if term == 0.0 || term == 2.0 {
        0.0
    } else {
        s * v / if term <= 1.0 { term } else { 2.0 - term }
    };

    [hue, saturation * 100.0, term / 2.0 * 100.0]
}

/// Convert HSV to 24-bit RGB by way of HSL.
///
/// As a consequence, a saturation of zero always produces black.
pub(crate) fn hsv_to_rgb(hue: Float, saturation: Float, value: Float) -> [u8; 3] {
    let [h, s, l] = hsv_to_hsl(hue, saturation, value);
    hsl_to_rgb(h, s, l)
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine the hue in degrees from the unit-range RGB coordinates, their
/// maximum, and the difference between maximum and minimum.
#[inline]
fn rgb_to_hue(r: Float, g: Float, b: Float, max: Float, delta: Float) -> Float {
    if delta == 0.0 {
        return 0.0;
    }

    let sextant = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    sextant * 60.0
}

#[inline]
fn to_unit(coordinates: &[u8; 3]) -> [Float; 3] {
    let [r, g, b] = *coordinates;
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert 24-bit RGB to HSL.
///
/// The hue is in degrees `0..360`, saturation and lightness are percentages.
/// Achromatic colors have zero hue and saturation.
pub(crate) fn rgb_to_hsl(coordinates: &[u8; 3]) -> [Float; 3] {
    let [r, g, b] = to_unit(coordinates);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let s = if delta == 0.0 {
        0.0
    } else if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    [rgb_to_hue(r, g, b, max, delta), s * 100.0, l * 100.0]
}

/// Convert 24-bit RGB to HSV.
///
/// The hue is in degrees `0..360`, saturation and value are percentages.
pub(crate) fn rgb_to_hsv(coordinates: &[u8; 3]) -> [Float; 3] {
    let [r, g, b] = to_unit(coordinates);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };
    [rgb_to_hue(r, g, b, max, delta), s * 100.0, max * 100.0]
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{hsl_to_rgb, hsv_to_hsl, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};
    use crate::assert_close_enough;

    #[test]
    fn test_hsl_to_rgb() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), [0, 255, 0]);
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), [0, 0, 255]);
        assert_eq!(hsl_to_rgb(60.0, 100.0, 50.0), [255, 255, 0]);
        assert_eq!(hsl_to_rgb(0.0, 100.0, 100.0), [255, 255, 255]);
        assert_eq!(hsl_to_rgb(0.0, 100.0, 0.0), [0, 0, 0]);
        assert_eq!(hsl_to_rgb(0.0, 100.0, 25.0), [128, 0, 0]);
        assert_eq!(hsl_to_rgb(120.0, 100.0, 25.0), [0, 128, 0]);
        assert_eq!(hsl_to_rgb(0.0, 100.0, 75.0), [255, 128, 128]);
        assert_eq!(hsl_to_rgb(360.0, 100.0, 50.0), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(720.0 + 240.0, 100.0, 50.0), [0, 0, 255]);
        assert_eq!(hsl_to_rgb(0.0, 250.0, -10.0), [0, 0, 0]);
    }

    #[test]
    fn test_hsl_achromatic_is_black() {
        for lightness in [0.0, 25.0, 50.0, 75.0, 100.0] {
            for hue in [-90.0, 0.0, 200.0] {
                assert_eq!(hsl_to_rgb(hue, 0.0, lightness), [0, 0, 0]);
            }
        }
    }

    #[test]
    fn test_hue_wraps_around() {
        for (saturation, lightness) in [(100.0, 50.0), (40.0, 30.0), (80.0, 90.0)] {
            assert_eq!(
                hsl_to_rgb(-30.0, saturation, lightness),
                hsl_to_rgb(330.0, saturation, lightness)
            );
            assert_eq!(
                hsl_to_rgb(-400.0, saturation, lightness),
                hsl_to_rgb(320.0, saturation, lightness)
            );
        }
    }

    #[test]
    fn test_hsv_to_rgb() {
        assert_eq!(hsv_to_rgb(0.0, 100.0, 100.0), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(120.0, 100.0, 100.0), [0, 255, 0]);
        assert_eq!(hsv_to_rgb(240.0, 100.0, 50.0), [0, 0, 128]);
        assert_eq!(hsv_to_rgb(0.0, 100.0, 0.0), [0, 0, 0]);

        // The intermediate lightness term is 2, so saturation is forced to 0.
        let [_, s, l] = hsv_to_hsl(0.0, 0.0, 100.0);
        assert_eq!(s, 0.0);
        assert_eq!(l, 100.0);
        assert_eq!(hsv_to_rgb(0.0, 0.0, 100.0), [0, 0, 0]);
    }

    #[test]
    fn test_rgb_to_hsl_hsv() {
        let [h, s, l] = rgb_to_hsl(&[255, 0, 0]);
        assert_close_enough!(h, 0.0);
        assert_close_enough!(s, 100.0);
        assert_close_enough!(l, 50.0);

        let [h, s, l] = rgb_to_hsl(&[0, 0, 255]);
        assert_close_enough!(h, 240.0);
        assert_close_enough!(s, 100.0);
        assert_close_enough!(l, 50.0);

        let [h, s, l] = rgb_to_hsl(&[128, 128, 128]);
        assert_close_enough!(h, 0.0);
        assert_close_enough!(s, 0.0);
        assert_close_enough!(l, 128.0 / 255.0 * 100.0);

        let [h, s, v] = rgb_to_hsv(&[255, 0, 255]);
        assert_close_enough!(h, 300.0);
        assert_close_enough!(s, 100.0);
        assert_close_enough!(v, 100.0);

        let [h, s, v] = rgb_to_hsv(&[0, 0, 0]);
        assert_close_enough!(h, 0.0);
        assert_close_enough!(s, 0.0);
        assert_close_enough!(v, 0.0);
    }

    #[test]
    fn test_rgb_hsl_round_trip() {
        for rgb in [[255_u8, 128, 0], [12, 200, 97], [70, 30, 220], [250, 250, 10]] {
            let [h, s, l] = rgb_to_hsl(&rgb);
            assert_eq!(hsl_to_rgb(h, s, l), rgb);
            let [h, s, v] = rgb_to_hsv(&rgb);
            assert_eq!(hsv_to_rgb(h, s, v), rgb);
        }
    }
}
