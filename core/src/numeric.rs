use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use num_bigint::BigInt as BigInteger;
use num_rational::Ratio as NumRatio;
use num_traits::{Signed, ToPrimitive, Zero};

type BigRational = NumRatio<BigInteger>;

// ============================================================================
// Numeric Type System
// ============================================================================

#[derive(Debug, Clone)]
pub enum NumericType {
    /// Primary integer type - promotes to BigInt on overflow
    Int(i64),

    /// Arbitrary precision integer, only used outside the i64 range
    BigInt(Arc<BigInteger>),

    /// Exact rational number (numerator, denominator in reduced form)
    Ratio(i64, i64),

    /// Arbitrary precision rational
    BigRatio(Arc<BigRational>),

    /// IEEE 754 double precision floating point
    Float(f64),

    /// Complex number (real, imaginary)
    Complex(f64, f64),
}

/// Binary arithmetic understood by the tower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl ArithOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Rem => "%",
            ArithOp::Pow => "**",
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

/// Integral floats print like integers inside a complex number: `(0+2i)`.
fn fmt_component(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{}", x as i64)
    } else {
        format!("{x}")
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NumericType::Int(n) => write!(f, "{n}"),
            NumericType::BigInt(n) => write!(f, "{n}"),
            NumericType::Ratio(num, denom) => write!(f, "{num}/{denom}"),
            NumericType::BigRatio(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            NumericType::Float(x) => {
                if x.is_nan() {
                    write!(f, "NaN")
                } else if x.is_infinite() {
                    write!(f, "{}", if *x > 0.0 { "Infinity" } else { "-Infinity" })
                } else {
                    // Debug keeps the trailing ".0" on integral floats
                    write!(f, "{x:?}")
                }
            }
            NumericType::Complex(re, im) => {
                let sign = if *im < 0.0 || (*im == 0.0 && im.is_sign_negative()) {
                    '-'
                } else {
                    '+'
                };
                write!(
                    f,
                    "({}{}{}i)",
                    fmt_component(*re),
                    sign,
                    fmt_component(im.abs())
                )
            }
        }
    }
}

// ============================================================================
// Equality and Hashing
// ============================================================================

impl PartialEq for NumericType {
    fn eq(&self, other: &Self) -> bool {
        use NumericType::*;

        match (self, other) {
            (Int(a), Int(b)) => a == b,
            (Ratio(an, ad), Ratio(bn, bd)) => an == bn && ad == bd,
            (Float(a), Float(b)) => a == b,
            (Complex(..), _) | (_, Complex(..)) => self.components() == other.components(),
            (Float(_), _) | (_, Float(_)) => self.to_float() == other.to_float(),
            // Both exact: compare as rationals
            _ => self.to_big_rational() == other.to_big_rational(),
        }
    }
}

impl Eq for NumericType {}

impl Hash for NumericType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Numbers that compare equal across representations (2, 2.0, 4/2,
        // (2+0i)) must hash alike, so everything hashes through f64.
        let (re, im) = self.components();
        hash_float(re, state);
        if im != 0.0 {
            hash_float(im, state);
        }
    }
}

fn hash_float<H: Hasher>(x: f64, state: &mut H) {
    if x.is_nan() {
        u64::MAX.hash(state);
    } else if x == 0.0 {
        // -0.0 == 0.0
        0u64.hash(state);
    } else {
        x.to_bits().hash(state);
    }
}

// ============================================================================
// Utility Functions
// ============================================================================

fn gcd(mut a: i64, mut b: i64) -> i64 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

/// Demote a big integer to `Int` when it fits.
fn normalize_int(n: BigInteger) -> NumericType {
    match n.to_i64() {
        Some(small) => NumericType::Int(small),
        None => NumericType::BigInt(Arc::new(n)),
    }
}

/// Demote a big rational to `Int`, `BigInt` or `Ratio` when possible.
fn normalize_ratio(r: BigRational) -> NumericType {
    if r.is_integer() {
        return normalize_int(r.to_integer());
    }
    match (r.numer().to_i64(), r.denom().to_i64()) {
        (Some(num), Some(denom)) => NumericType::Ratio(num, denom),
        _ => NumericType::BigRatio(Arc::new(r)),
    }
}

/// Largest exact power result, in bits.
const MAX_POW_BITS: u64 = 1 << 24;

/// Bases of magnitude 0 or 1 never grow.
fn fits_pow_limit(base_bits: u64, exp: u64) -> bool {
    base_bits <= 1 || base_bits.saturating_mul(exp) <= MAX_POW_BITS
}

fn floored_rem_f64(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

impl NumericType {
    /// Create a ratio in reduced form
    pub fn make_ratio(num: i64, denom: i64) -> Result<NumericType, String> {
        if denom == 0 {
            return Err("Division by zero".to_string());
        }
        if num == i64::MIN || denom == i64::MIN {
            let r = BigRational::new(BigInteger::from(num), BigInteger::from(denom));
            return Ok(normalize_ratio(r));
        }

        let g = gcd(num, denom);
        let (mut num, mut denom) = (num / g, denom / g);

        // Normalize: denominator always positive
        if denom < 0 {
            num = -num;
            denom = -denom;
        }

        if denom == 1 {
            Ok(NumericType::Int(num))
        } else {
            Ok(NumericType::Ratio(num, denom))
        }
    }

    /// Convert to float (may lose precision). Complex numbers yield their real part.
    pub fn to_float(&self) -> f64 {
        match self {
            NumericType::Int(n) => *n as f64,
            NumericType::BigInt(n) => n.to_f64().unwrap_or(f64::INFINITY),
            NumericType::Ratio(num, denom) => (*num as f64) / (*denom as f64),
            NumericType::BigRatio(r) => r.to_f64().unwrap_or(f64::NAN),
            NumericType::Float(x) => *x,
            NumericType::Complex(re, _) => *re,
        }
    }

    /// Real and imaginary parts as floats.
    pub fn components(&self) -> (f64, f64) {
        match self {
            NumericType::Complex(re, im) => (*re, *im),
            other => (other.to_float(), 0.0),
        }
    }

    /// Exact value as a big rational; `None` for floats and complex numbers.
    fn to_big_rational(&self) -> Option<BigRational> {
        match self {
            NumericType::Int(n) => Some(BigRational::from_integer(BigInteger::from(*n))),
            NumericType::BigInt(n) => Some(BigRational::from_integer(n.as_ref().clone())),
            NumericType::Ratio(num, denom) => Some(BigRational::new(
                BigInteger::from(*num),
                BigInteger::from(*denom),
            )),
            NumericType::BigRatio(r) => Some(r.as_ref().clone()),
            NumericType::Float(_) | NumericType::Complex(..) => None,
        }
    }

    fn to_big_int(&self) -> Option<BigInteger> {
        match self {
            NumericType::Int(n) => Some(BigInteger::from(*n)),
            NumericType::BigInt(n) => Some(n.as_ref().clone()),
            _ => None,
        }
    }

    /// Check if number is zero
    pub fn is_zero(&self) -> bool {
        match self {
            NumericType::Int(n) => *n == 0,
            NumericType::BigInt(n) => n.is_zero(),
            NumericType::Ratio(num, _) => *num == 0,
            NumericType::BigRatio(r) => r.is_zero(),
            NumericType::Float(x) => *x == 0.0,
            NumericType::Complex(re, im) => *re == 0.0 && *im == 0.0,
        }
    }

    /// True for `Int` and `BigInt`.
    pub fn is_integer(&self) -> bool {
        matches!(self, NumericType::Int(_) | NumericType::BigInt(_))
    }

    /// Parity of an integer; `None` for every other representation.
    pub fn is_even(&self) -> Option<bool> {
        match self {
            NumericType::Int(n) => Some(n % 2 == 0),
            NumericType::BigInt(n) => Some((n.as_ref() % 2u8).is_zero()),
            _ => None,
        }
    }
}

// ============================================================================
// Arithmetic Operations
// ============================================================================

impl NumericType {
    pub fn add(&self, other: &NumericType) -> Result<NumericType, String> {
        self.combine(ArithOp::Add, other)
    }

    pub fn sub(&self, other: &NumericType) -> Result<NumericType, String> {
        self.combine(ArithOp::Sub, other)
    }

    pub fn mul(&self, other: &NumericType) -> Result<NumericType, String> {
        self.combine(ArithOp::Mul, other)
    }

    /// Division. Two integers give the floored quotient; a rational operand
    /// keeps the result exact.
    pub fn div(&self, other: &NumericType) -> Result<NumericType, String> {
        self.combine(ArithOp::Div, other)
    }

    /// Floored remainder; the result takes the sign of the divisor
    pub fn rem(&self, other: &NumericType) -> Result<NumericType, String> {
        self.combine(ArithOp::Rem, other)
    }

    pub fn pow(&self, other: &NumericType) -> Result<NumericType, String> {
        self.combine(ArithOp::Pow, other)
    }

    /// Negation
    pub fn neg(&self) -> NumericType {
        use NumericType::*;

        match self {
            Int(n) => match n.checked_neg() {
                Some(result) => Int(result),
                None => BigInt(Arc::new(-BigInteger::from(*n))),
            },
            BigInt(n) => normalize_int(-n.as_ref()),
            Ratio(num, denom) => match num.checked_neg() {
                Some(n) => Ratio(n, *denom),
                None => normalize_ratio(-BigRational::new(
                    BigInteger::from(*num),
                    BigInteger::from(*denom),
                )),
            },
            BigRatio(r) => normalize_ratio(-r.as_ref()),
            Float(x) => Float(-x),
            Complex(re, im) => Complex(-re, -im),
        }
    }

    /// Apply `op`, promoting both operands to the wider of
    /// integer < rational < float < complex first.
    pub fn combine(&self, op: ArithOp, other: &NumericType) -> Result<NumericType, String> {
        use NumericType::*;

        let divides = matches!(op, ArithOp::Div | ArithOp::Rem);
        if divides && other.is_zero() && !matches!(self, Float(_)) && !matches!(other, Float(_)) {
            return Err("Division by zero".to_string());
        }

        match (self, other) {
            (Complex(..), _) | (_, Complex(..)) => self.complex_op(op, other),
            (Float(_), _) | (_, Float(_)) => Ok(Float(float_op(
                op,
                self.to_float(),
                other.to_float(),
            ))),
            (Int(a), Int(b)) => int_op(op, *a, *b),
            _ if op == ArithOp::Pow => self.exact_pow(other),
            _ => {
                if let (Some(a), Some(b)) = (self.to_big_int(), other.to_big_int()) {
                    return big_int_op(op, &a, &b);
                }
                match (self.to_big_rational(), other.to_big_rational()) {
                    (Some(a), Some(b)) => Ok(rational_op(op, &a, &b)),
                    _ => Err(format!(
                        "Unsupported operation: {self} {} {other}",
                        op.symbol()
                    )),
                }
            }
        }
    }

    fn complex_op(&self, op: ArithOp, other: &NumericType) -> Result<NumericType, String> {
        let (a, b) = self.components();
        let (c, d) = other.components();
        let (re, im) = match op {
            ArithOp::Add => (a + c, b + d),
            ArithOp::Sub => (a - c, b - d),
            ArithOp::Mul => (a * c - b * d, a * d + b * c),
            ArithOp::Div => {
                let denom = c * c + d * d;
                ((a * c + b * d) / denom, (b * c - a * d) / denom)
            }
            ArithOp::Rem | ArithOp::Pow => {
                return Err(format!(
                    "Unsupported operation: {self} {} {other}",
                    op.symbol()
                ));
            }
        };
        Ok(NumericType::Complex(re, im))
    }

    /// Power with an exact base (BigInt, Ratio or BigRatio) or exponent.
    fn exact_pow(&self, exponent: &NumericType) -> Result<NumericType, String> {
        let exp = match exponent {
            NumericType::Int(e) => i32::try_from(*e).map_err(|_| {
                format!("Exponent too large: {self} ** {exponent}")
            })?,
            // Rational exponents leave the exact domain
            _ => {
                return Ok(NumericType::Float(
                    self.to_float().powf(exponent.to_float()),
                ));
            }
        };
        let base = self
            .to_big_rational()
            .ok_or_else(|| format!("Unsupported operation: {self} ** {exponent}"))?;
        if base.is_zero() && exp < 0 {
            return Err("Division by zero".to_string());
        }
        let base_bits = base.numer().bits().max(base.denom().bits());
        if !fits_pow_limit(base_bits, u64::from(exp.unsigned_abs())) {
            return Err(format!("Exponent too large: {self} ** {exponent}"));
        }
        Ok(normalize_ratio(base.pow(exp)))
    }
}

fn float_op(op: ArithOp, a: f64, b: f64) -> f64 {
    match op {
        ArithOp::Add => a + b,
        ArithOp::Sub => a - b,
        ArithOp::Mul => a * b,
        ArithOp::Div => a / b,
        ArithOp::Rem => floored_rem_f64(a, b),
        ArithOp::Pow => a.powf(b),
    }
}

fn int_op(op: ArithOp, a: i64, b: i64) -> Result<NumericType, String> {
    let checked = match op {
        ArithOp::Add => a.checked_add(b),
        ArithOp::Sub => a.checked_sub(b),
        ArithOp::Mul => a.checked_mul(b),
        ArithOp::Div => a.checked_div(b).map(|q| {
            if a % b != 0 && (a < 0) != (b < 0) { q - 1 } else { q }
        }),
        ArithOp::Rem => a.checked_rem(b).map(|r| {
            if r != 0 && (r < 0) != (b < 0) { r + b } else { r }
        }),
        ArithOp::Pow => {
            if b < 0 {
                return NumericType::Int(a).exact_pow(&NumericType::Int(b));
            }
            u32::try_from(b).ok().and_then(|e| a.checked_pow(e))
        }
    };
    match checked {
        Some(result) => Ok(NumericType::Int(result)),
        // Overflow: redo the operation on big integers
        None => big_int_op(op, &BigInteger::from(a), &BigInteger::from(b)),
    }
}

fn big_int_op(op: ArithOp, a: &BigInteger, b: &BigInteger) -> Result<NumericType, String> {
    Ok(match op {
        ArithOp::Add => normalize_int(a + b),
        ArithOp::Sub => normalize_int(a - b),
        ArithOp::Mul => normalize_int(a * b),
        ArithOp::Div => normalize_int(BigRational::new(a.clone(), b.clone()).floor().to_integer()),
        ArithOp::Rem => {
            let r = a % b;
            if !r.is_zero() && r.is_negative() != b.is_negative() {
                normalize_int(r + b)
            } else {
                normalize_int(r)
            }
        }
        ArithOp::Pow => {
            if b.is_negative() {
                let exp = b
                    .to_i32()
                    .filter(|e| fits_pow_limit(a.bits(), u64::from(e.unsigned_abs())))
                    .ok_or_else(|| format!("Exponent too large: {a} ** {b}"))?;
                if a.is_zero() {
                    return Err("Division by zero".to_string());
                }
                normalize_ratio(BigRational::from_integer(a.clone()).pow(exp))
            } else {
                let exp = b
                    .to_u32()
                    .filter(|&e| fits_pow_limit(a.bits(), u64::from(e)))
                    .ok_or_else(|| format!("Exponent too large: {a} ** {b}"))?;
                normalize_int(a.pow(exp))
            }
        }
    })
}

fn rational_op(op: ArithOp, a: &BigRational, b: &BigRational) -> NumericType {
    match op {
        ArithOp::Add => normalize_ratio(a + b),
        ArithOp::Sub => normalize_ratio(a - b),
        ArithOp::Mul => normalize_ratio(a * b),
        ArithOp::Div => normalize_ratio(a / b),
        ArithOp::Rem => normalize_ratio(a - b * (a / b).floor()),
        // Pow on two exact operands is routed through exact_pow
        ArithOp::Pow => NumericType::Float(
            a.to_f64().unwrap_or(f64::NAN).powf(b.to_f64().unwrap_or(f64::NAN)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_arithmetic() {
        let a = NumericType::Int(5);
        let b = NumericType::Int(3);

        assert_eq!(a.add(&b).unwrap(), NumericType::Int(8));
        assert_eq!(a.sub(&b).unwrap(), NumericType::Int(2));
        assert_eq!(a.mul(&b).unwrap(), NumericType::Int(15));
        assert_eq!(a.pow(&b).unwrap(), NumericType::Int(125));
    }

    #[test]
    fn test_int_overflow_promotes() {
        let a = NumericType::Int(i64::MAX);
        let b = NumericType::Int(1);

        match a.add(&b).unwrap() {
            NumericType::BigInt(_) => {}
            other => panic!("Expected BigInt promotion on overflow, got {other:?}"),
        }
    }

    #[test]
    fn test_big_int_demotes_when_it_fits() {
        let big = NumericType::Int(i64::MAX).add(&NumericType::Int(1)).unwrap();
        let back = big.sub(&NumericType::Int(1)).unwrap();
        assert!(matches!(back, NumericType::Int(i64::MAX)));
    }

    #[test]
    fn test_integer_division_floors() {
        let a = NumericType::Int(5);
        let b = NumericType::Int(2);

        assert_eq!(a.div(&b).unwrap(), NumericType::Int(2));
        assert_eq!(NumericType::Int(6).div(&b).unwrap(), NumericType::Int(3));
        assert_eq!(
            NumericType::Int(7).div(&NumericType::Int(-2)).unwrap(),
            NumericType::Int(-4)
        );
        assert_eq!(
            NumericType::Int(-7).div(&NumericType::Int(2)).unwrap(),
            NumericType::Int(-4)
        );
    }

    #[test]
    fn test_division_and_remainder_agree() {
        for (a, b) in [(7, 2), (7, -2), (-7, 2), (-7, -2), (6, 3), (0, -5)] {
            let (x, y) = (NumericType::Int(a), NumericType::Int(b));
            let q = x.div(&y).unwrap();
            let r = x.rem(&y).unwrap();
            let back = y.mul(&q).unwrap().add(&r).unwrap();
            assert_eq!(back, x, "{a} / {b}");
        }
    }

    #[test]
    fn test_division_overflow_promotes() {
        let q = NumericType::Int(i64::MIN)
            .div(&NumericType::Int(-1))
            .unwrap();
        assert!(matches!(q, NumericType::BigInt(_)));
        assert_eq!(q.to_string(), "9223372036854775808");
    }

    #[test]
    fn test_big_integer_division_floors() {
        let big = NumericType::Int(i64::MAX).add(&NumericType::Int(1)).unwrap();
        let q = big.div(&NumericType::Int(-3)).unwrap();
        assert_eq!(q.to_string(), "-3074457345618258603");
    }

    #[test]
    fn test_rational_division_stays_exact() {
        let half = NumericType::make_ratio(1, 2).unwrap();
        assert_eq!(
            half.div(&NumericType::Int(2)).unwrap(),
            NumericType::Ratio(1, 4)
        );
        assert_eq!(
            NumericType::Int(1).div(&half).unwrap(),
            NumericType::Int(2)
        );
    }

    #[test]
    fn test_oversized_powers_fail() {
        let err = NumericType::Int(2)
            .pow(&NumericType::Int(4_000_000_000))
            .unwrap_err();
        assert!(err.contains("Exponent too large"));
        assert!(NumericType::Int(2).pow(&NumericType::Int(i64::MAX)).is_err());
        assert!(NumericType::Int(3).pow(&NumericType::Int(-100_000_000)).is_err());
        // Bases that cannot grow are fine
        assert_eq!(
            NumericType::Int(1).pow(&NumericType::Int(4_000_000_000)).unwrap(),
            NumericType::Int(1)
        );
        assert_eq!(
            NumericType::Int(-1).pow(&NumericType::Int(3_000_000_001)).unwrap(),
            NumericType::Int(-1)
        );
    }

    #[test]
    fn test_ratio_reduction() {
        assert_eq!(
            NumericType::make_ratio(6, 9).unwrap(),
            NumericType::Ratio(2, 3)
        );
        assert_eq!(NumericType::make_ratio(10, 5).unwrap(), NumericType::Int(2));
        assert_eq!(
            NumericType::make_ratio(1, -2).unwrap(),
            NumericType::Ratio(-1, 2)
        );
    }

    #[test]
    fn test_ratio_arithmetic() {
        let a = NumericType::Ratio(1, 2);
        let b = NumericType::Ratio(1, 3);

        assert_eq!(a.add(&b).unwrap(), NumericType::Ratio(5, 6));
        assert_eq!(a.mul(&b).unwrap(), NumericType::Ratio(1, 6));
        assert_eq!(a.add(&a).unwrap(), NumericType::Int(1));
    }

    #[test]
    fn test_division_by_zero() {
        let a = NumericType::Int(5);
        let zero = NumericType::Int(0);

        assert!(a.div(&zero).is_err());
        assert!(a.rem(&zero).is_err());
    }

    #[test]
    fn test_float_division_by_zero_is_infinite() {
        let result = NumericType::Float(1.0).div(&NumericType::Int(0)).unwrap();
        assert_eq!(result.to_float(), f64::INFINITY);
    }

    #[test]
    fn test_floored_remainder() {
        let r = NumericType::Int(-7).rem(&NumericType::Int(3)).unwrap();
        assert_eq!(r, NumericType::Int(2));
        let r = NumericType::Int(7).rem(&NumericType::Int(-3)).unwrap();
        assert_eq!(r, NumericType::Int(-2));
    }

    #[test]
    fn test_negative_exponent_is_exact() {
        let r = NumericType::Int(2).pow(&NumericType::Int(-2)).unwrap();
        assert_eq!(r, NumericType::Ratio(1, 4));
    }

    #[test]
    fn test_float_operations() {
        let a = NumericType::Float(3.15);
        let b = NumericType::Float(2.0);

        if let NumericType::Float(result) = a.add(&b).unwrap() {
            assert!((result - 5.15).abs() < 1e-10);
        } else {
            panic!("Expected Float result");
        }
    }

    #[test]
    fn test_complex_multiplication() {
        let i = NumericType::Complex(0.0, 1.0);
        assert_eq!(i.mul(&i).unwrap(), NumericType::Int(-1));
        assert_eq!(
            NumericType::Int(2).add(&i).unwrap(),
            NumericType::Complex(2.0, 1.0)
        );
    }

    #[test]
    fn test_cross_type_equality() {
        let int_five = NumericType::Int(5);
        let ratio_five = NumericType::make_ratio(10, 2).unwrap();
        let float_five = NumericType::Float(5.0);
        let complex_five = NumericType::Complex(5.0, 0.0);

        assert_eq!(int_five, ratio_five);
        assert_eq!(int_five, float_five);
        assert_eq!(int_five, complex_five);
        assert_ne!(int_five, NumericType::Ratio(11, 2));
    }

    #[test]
    fn test_equal_numbers_hash_alike() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of(n: &NumericType) -> u64 {
            let mut h = DefaultHasher::new();
            n.hash(&mut h);
            h.finish()
        }

        assert_eq!(
            hash_of(&NumericType::Int(2)),
            hash_of(&NumericType::Float(2.0))
        );
        assert_eq!(
            hash_of(&NumericType::Ratio(1, 2)),
            hash_of(&NumericType::Float(0.5))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(NumericType::Float(3.0).to_string(), "3.0");
        assert_eq!(NumericType::Float(3.14).to_string(), "3.14");
        assert_eq!(NumericType::Ratio(3, 4).to_string(), "3/4");
        assert_eq!(NumericType::Complex(0.0, 2.0).to_string(), "(0+2i)");
        assert_eq!(NumericType::Complex(1.5, -2.0).to_string(), "(1.5-2i)");
    }

    #[test]
    fn test_parity() {
        assert_eq!(NumericType::Int(4).is_even(), Some(true));
        assert_eq!(NumericType::Int(-3).is_even(), Some(false));
        assert_eq!(NumericType::Float(4.0).is_even(), None);
    }
}
