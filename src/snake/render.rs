use super::segments::{Segment, Segments};

pub const ROWS: usize = 3;

/// Draws a digit as three rows of three characters.
pub fn digit_rows(segs: Segments) -> [String; ROWS] {
    let lit = |seg: Segment, c: char| if segs.contains(seg) { c } else { ' ' };

    [
        [' ', lit(Segment::A, '_'), ' '].iter().collect(),
        [lit(Segment::F, '|'), lit(Segment::G, '_'), lit(Segment::B, '|')]
            .iter()
            .collect(),
        [lit(Segment::E, '|'), lit(Segment::D, '_'), lit(Segment::C, '|')]
            .iter()
            .collect(),
    ]
}

/// Draws both digits side by side, digit 0 on the left.
pub fn display_rows(digits: [Segments; 2]) -> [String; ROWS] {
    let [left, right] = digits.map(digit_rows);
    std::array::from_fn(|row| format!("{}  {}", left[row], right[row]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::segments::Frame;

    #[test]
    fn frame_zero() {
        assert_eq!(digit_rows(Frame::new(0).segments()), [" _ ", "| |", "   "]);
    }

    #[test]
    fn middle_bar() {
        assert_eq!(digit_rows(Frame::new(30).segments()), ["   ", " _ ", " _|"]);
    }

    #[test]
    fn side_by_side() {
        let rows = display_rows([Frame::new(4).segments(), Frame::new(1).segments()]);
        assert_eq!(rows, ["      _ ", "|      |", "|_     |"]);
    }
}
