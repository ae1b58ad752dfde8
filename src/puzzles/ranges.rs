//! Range extraction over sorted integer lists.

/// Shortest run length written with range syntax.
const MIN_RANGE_LEN: usize = 3;

/// Compact an ascending list of integers.
///
/// Runs of at least three consecutive values become `start-end`; shorter runs
/// are listed individually. Items are joined with commas.
pub fn extract_ranges(nums: &[i64]) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut i = 0;
    while i < nums.len() {
        let start = i;
        while i + 1 < nums.len() && nums[i].checked_add(1) == Some(nums[i + 1]) {
            i += 1;
        }
        if i + 1 - start >= MIN_RANGE_LEN {
            parts.push(format!("{}-{}", nums[start], nums[i]));
        } else {
            parts.extend(nums[start..=i].iter().map(|n| n.to_string()));
        }
        i += 1;
    }
    parts.join(",")
}
