use std::fmt::Debug;

const MAX_DEBUG_LEN: usize = 120; // 单行摘要的最大长度

/// 以单行 debug 格式输出一个值，过长时截断。
pub fn format_summary<T: Debug + ?Sized>(value: &T) -> String {
    let debug_str = format!("{:?}", value);

    if debug_str.chars().count() > MAX_DEBUG_LEN {
        // 按字符截断，避免切断多字节字符
        let mut truncated: String = debug_str.chars().take(MAX_DEBUG_LEN).collect();
        truncated.push_str("...");
        truncated
    } else {
        debug_str
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_value_untouched() {
        assert_eq!(format_summary(&[1, 2, 3]), "[1, 2, 3]");
    }

    #[test]
    fn test_long_value_truncated() {
        let items: Vec<u32> = (0..200).collect();
        let summary = format_summary(&items);
        assert!(summary.ends_with("..."));
        assert_eq!(summary.chars().count(), MAX_DEBUG_LEN + 3);
    }
}
