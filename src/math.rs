//! HSB color math. All values are normalized f64 in 0.0–1.0.

/// HSB/HSV → RGB.
pub(crate) fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0).rem_euclid(6.0);
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSB/HSV.
pub(crate) fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };
    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    (h, s, max)
}

/// Pure hue at full saturation and brightness, as 0–255 channels.
pub(crate) fn hue_rgb8(h: f64) -> (u8, u8, u8) {
    let (r, g, b) = hsb_to_rgb(h, 1.0, 1.0);
    (to_u8(r), to_u8(g), to_u8(b))
}

pub(crate) fn to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64, f64), b: (f64, f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9 && (a.2 - b.2).abs() < 1e-9
    }

    #[test]
    fn primaries() {
        assert!(close(hsb_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)));
        assert!(close(hsb_to_rgb(1.0 / 3.0, 1.0, 1.0), (0.0, 1.0, 0.0)));
        assert!(close(hsb_to_rgb(2.0 / 3.0, 1.0, 1.0), (0.0, 0.0, 1.0)));
    }

    #[test]
    fn hue_wraps() {
        assert!(close(hsb_to_rgb(1.0, 1.0, 1.0), hsb_to_rgb(0.0, 1.0, 1.0)));
        assert_eq!(hue_rgb8(1.0), (255, 0, 0));
    }

    #[test]
    fn gray_has_no_saturation() {
        let (h, s, v) = rgb_to_hsb(0.5, 0.5, 0.5);
        assert_eq!((h, s), (0.0, 0.0));
        assert!((v - 0.5).abs() < 1e-9);
    }

    #[test]
    fn round_trips_mid_color() {
        let rgb = (0x58 as f64 / 255.0, 0xE1 as f64 / 255.0, 0xBE as f64 / 255.0);
        let (h, s, v) = rgb_to_hsb(rgb.0, rgb.1, rgb.2);
        assert!(close(hsb_to_rgb(h, s, v), rgb));
    }
}
