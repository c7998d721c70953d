//! Even integer split of a total among siblings.

use evenpane_common::LayoutError;

/// Split `total` into `count` sizes that differ by at most one.
///
/// The first `total % count` entries get the extra cell. Fails for a
/// `count` of zero.
pub fn distribute(count: usize, total: u32) -> Result<Vec<u32>, LayoutError> {
    let n = u32::try_from(count)
        .ok()
        .filter(|&n| n > 0)
        .ok_or(LayoutError::ImbalancedResize { count })?;
    let base = total / n;
    let remainder = (total % n) as usize;
    Ok((0..count)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect())
}
