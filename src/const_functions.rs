pub const fn clog2(n: usize) -> usize {
    if n == 0 {
        return 1;
    }

    let mut c = 0;
    let mut v = 1;
    while v <= n {
        c += 1;
        v <<= 1;
    }
    c
}

/// Number of bits needed to hold any index in `0..len`.
pub const fn clog2_len(len: usize) -> usize {
    if len == 0 {
        0
    } else {
        clog2(len - 1)
    }
}

pub const fn mask(n: u32) -> u64 {
    assert!(n <= 64);
    if n == 64 {
        u64::MAX
    } else {
        (1 << n) - 1
    }
}

/// `n / d` rounded half up.
pub const fn div_round(n: u64, d: u64) -> u64 {
    assert!(d > 0);
    (n + d / 2) / d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clog2() {
        assert_eq!(clog2(0), 1);
        assert_eq!(clog2(1), 1);
        assert_eq!(clog2(2), 2);
        assert_eq!(clog2(3), 2);
        assert_eq!(clog2(4), 3);
        assert_eq!(clog2(7), 3);
        assert_eq!(clog2(8), 4);
    }

    #[test]
    fn test_clog2_len() {
        assert_eq!(clog2_len(0), 0);
        assert_eq!(clog2_len(2), 1);
        assert_eq!(clog2_len(34), 6);
        assert_eq!(clog2_len(240), 8);
        assert_eq!(clog2_len(256), 8);
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask(0), 0);
        assert_eq!(mask(3), 0b111);
        assert_eq!(mask(64), u64::MAX);
    }

    #[test]
    fn test_div_round() {
        assert_eq!(div_round(1_000, 400), 3);
        assert_eq!(div_round(999, 400), 2);
        assert_eq!(div_round(400, 400), 1);
        assert_eq!(div_round(50_000_000, 400), 125_000);
    }
}
