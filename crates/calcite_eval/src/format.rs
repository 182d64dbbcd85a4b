//! ResultFormatter
//!
//! 整数值不带 `.0`，其它值用标准十进制表示，NaN / 无穷大用文字表示

/// 把数值渲染成文本
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == value.trunc() {
        // -0 显示为 0
        if value == 0.0 {
            return "0".to_string();
        }
        return format!("{:.0}", value);
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_value(4.0), "4");
        assert_eq!(format_value(-4.0), "-4");
        assert_eq!(format_value(1024.0), "1024");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_value(0.25), "0.25");
        assert_eq!(format_value(-7.5), "-7.5");
        assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(format_value(f64::INFINITY), "Infinity");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
    }
}
