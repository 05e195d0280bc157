/// Vertex colour. Real colours start at 1.
pub type Color = u32;

/// Colour of a node that has not been coloured yet.
pub const UNCOLORED: Color = 0;

/// Smallest positive colour not marked as taken.
///
/// `taken[c]` tells whether colour `c` is in use; index 0 is ignored.
pub fn first_free(taken: &[bool]) -> Color {
    let mut color = 1;
    while taken.get(color as usize).copied().unwrap_or(false) {
        color += 1;
    }
    color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_free_skips_taken() {
        assert_eq!(first_free(&[]), 1);
        assert_eq!(first_free(&[true, false]), 1);
        assert_eq!(first_free(&[false, true, true, false]), 3);
        assert_eq!(first_free(&[false, true, true]), 3);
    }
}
