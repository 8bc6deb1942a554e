/// Weekly points by 1-based finishing position: 10, 8, 6, 4, 2, then 0.
pub fn points_for_position(position: usize) -> u32 {
    let lost = position.saturating_sub(1).saturating_mul(2);
    10usize.saturating_sub(lost) as u32
}
