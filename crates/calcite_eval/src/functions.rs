//! 内置函数的数值语义

use calcite_syntax::Function;

/// 调用内置函数，参数个数已经检查过
pub fn apply(function: Function, args: &[f64]) -> f64 {
    match (function, args) {
        (Function::Sqrt, [x]) => x.sqrt(),
        (Function::Abs, [x]) => x.abs(),
        (Function::Round, [x]) => round_half_up(*x),
        (Function::Power, [base, exponent]) => base.powf(*exponent),
        _ => f64::NAN,
    }
}

/// 四舍五入，恰好一半时朝正无穷方向取整：2.5 -> 3，-2.5 -> -2
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.4), 2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(7.0), 7.0);
        assert!(round_half_up(f64::NAN).is_nan());
        assert_eq!(round_half_up(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_apply() {
        assert_eq!(apply(Function::Sqrt, &[16.0]), 4.0);
        assert!(apply(Function::Sqrt, &[-4.0]).is_nan());
        assert_eq!(apply(Function::Abs, &[-7.5]), 7.5);
        assert_eq!(apply(Function::Power, &[2.0, 10.0]), 1024.0);
        assert!(apply(Function::Power, &[-8.0, 0.5]).is_nan());
    }
}
