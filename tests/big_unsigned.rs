use bigunsigned::{BigUnsigned, Block, Error};

use core::cmp::Ordering;
use core::convert::TryFrom;

#[test]
fn default_is_zero() {
    let zero = BigUnsigned::new();

    assert!(zero.is_zero());
    assert_eq!(zero.len(), 0);
    assert_eq!(zero.capacity(), 0);
    assert_eq!(zero, BigUnsigned::default());
}

#[test]
fn construct_from_primitives() {
    let one = BigUnsigned::from(1u32);
    let copy = one.clone();

    assert!(!copy.is_zero());
    assert_eq!(i32::try_from(&copy).unwrap(), 1);

    assert!(BigUnsigned::from(0u64).is_zero());
    assert_eq!(BigUnsigned::from(0u8).capacity(), 0);
    assert_eq!(BigUnsigned::from(42u16).blocks(), &[42]);
    assert_eq!(BigUnsigned::try_from(7i64).unwrap(), BigUnsigned::from(7u8));
}

#[test]
fn construct_from_negative_is_rejected() {
    assert_eq!(BigUnsigned::try_from(-1i8).unwrap_err(), Error::NegativeConstruction);
    assert_eq!(BigUnsigned::try_from(-5i32).unwrap_err(), Error::NegativeConstruction);
    assert_eq!(BigUnsigned::try_from(i64::MIN).unwrap_err(), Error::NegativeConstruction);
    assert_eq!(BigUnsigned::try_from(-1i128).unwrap_err(), Error::NegativeConstruction);
    assert!(BigUnsigned::try_from(0isize).unwrap().is_zero());
}

#[test]
fn construct_from_block_array() {
    let value = BigUnsigned::from_blocks(&[1234567890]);

    assert!(!value.is_zero());
    assert_eq!(i64::try_from(&value).unwrap(), 1234567890);
}

#[test]
fn from_blocks_strips_leading_zeros() {
    let value = BigUnsigned::from_blocks(&[5, 0, 0]);
    assert_eq!(value.len(), 1);
    assert_eq!(value, BigUnsigned::from(5u8));

    let zero = BigUnsigned::from_blocks(&[0, 0]);
    assert!(zero.is_zero());

    let inner = BigUnsigned::from_blocks(&[0, 3]);
    assert_eq!(inner.blocks(), &[0, 3]);
}

#[test]
fn convert_to_primitives() {
    let two = BigUnsigned::from(2u8);

    assert_eq!(u8::try_from(&two).unwrap(), 2);
    assert_eq!(i16::try_from(&two).unwrap(), 2);
    assert_eq!(usize::try_from(&two).unwrap(), 2);
    assert_eq!(two.to_primitive::<u64>().unwrap(), 2);
    assert_eq!(BigUnsigned::new().to_primitive::<i8>().unwrap(), 0);
}

#[test]
fn convert_to_narrower_type_overflows() {
    let big = BigUnsigned::from(300u16);
    assert_eq!(u8::try_from(&big).unwrap_err(), Error::RangeOverflow);
    assert_eq!(i8::try_from(&big).unwrap_err(), Error::RangeOverflow);
    assert_eq!(u16::try_from(&big).unwrap(), 300);

    let two_blocks = BigUnsigned::from_blocks(&[1, 1]);
    assert_eq!(u64::try_from(&two_blocks).unwrap_err(), Error::RangeOverflow);
}

#[test]
fn convert_to_signed_rejects_sign_bit() {
    let top = BigUnsigned::from(1u64 << 63);
    assert_eq!(i64::try_from(&top).unwrap_err(), Error::RangeOverflow);
    assert_eq!(u64::try_from(&top).unwrap(), 1 << 63);

    let max = BigUnsigned::from(i32::MAX as u32);
    assert_eq!(i32::try_from(&max).unwrap(), i32::MAX);

    let over = BigUnsigned::from(i32::MAX as u32 + 1);
    assert_eq!(i32::try_from(&over).unwrap_err(), Error::RangeOverflow);
}

#[test]
fn primitive_round_trips() {
    for &p in &[0u64, 1, 255, 65_535, u32::MAX as u64, u64::MAX] {
        assert_eq!(u64::try_from(BigUnsigned::from(p)).unwrap(), p);
    }
    for &p in &[0i32, 1, 1_000_000, i32::MAX] {
        assert_eq!(i32::try_from(BigUnsigned::try_from(p).unwrap()).unwrap(), p);
    }
    for &p in &[0u8, 17, u8::MAX] {
        assert_eq!(u8::try_from(BigUnsigned::from(p)).unwrap(), p);
    }
}

#[test]
fn wide_conversions_span_two_blocks() {
    let value = 0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210u128;
    let big = BigUnsigned::from(value);

    assert_eq!(big.blocks(), &[0xFEDC_BA98_7654_3210, 0x0123_4567_89AB_CDEF]);
    assert_eq!(u128::try_from(&big).unwrap(), value);
    assert_eq!(i128::try_from(&big).unwrap(), value as i128);

    assert_eq!(BigUnsigned::from(5u128).len(), 1);
    assert!(BigUnsigned::from(0u128).is_zero());

    let top = BigUnsigned::from(u128::MAX);
    assert_eq!(i128::try_from(&top).unwrap_err(), Error::RangeOverflow);

    let three = BigUnsigned::from_blocks(&[0, 0, 1]);
    assert_eq!(u128::try_from(&three).unwrap_err(), Error::RangeOverflow);
}

#[test]
fn compare_to() {
    let t = BigUnsigned::from(2u8);
    let x = t.clone();
    let v1 = BigUnsigned::from(1u8);
    let v3 = BigUnsigned::from(3u8);

    assert_eq!(x.compare_to(&t), Ordering::Equal);
    assert_eq!(v3.compare_to(&v1), Ordering::Greater);
    assert_eq!(v3.compare_to(&x), Ordering::Greater);
    assert_eq!(v1.compare_to(&v3), Ordering::Less);
    assert_eq!(v1.compare_to(&x), Ordering::Less);
    assert_eq!(v1.compare_to(&v1), Ordering::Equal);
    assert_eq!(v3.compare_to(&v3), Ordering::Equal);
}

#[test]
fn longer_value_is_greater() {
    let long = BigUnsigned::from_blocks(&[0, 1]);
    let short = BigUnsigned::from(u64::MAX);

    assert!(long > short);
    assert_eq!(short.compare_to(&long), Ordering::Less);
}

#[test]
fn equal_length_compares_from_the_top() {
    let a = BigUnsigned::from_blocks(&[u64::MAX, 1]);
    let b = BigUnsigned::from_blocks(&[0, 2]);

    assert!(a < b);
    assert!(BigUnsigned::from_blocks(&[1, 2]) > BigUnsigned::from_blocks(&[0, 2]));
}

#[test]
fn comparison_operators() {
    let v1 = BigUnsigned::from(1u8);
    let v2 = BigUnsigned::from(2u8);
    let v3 = v1.clone();

    assert!(v1 == v3);
    assert!(v1 <= v3);
    assert!(v1 >= v3);
    assert!(v1 < v2);
    assert!(v1 <= v2);
    assert!(v2 > v3);
    assert!(v2 >= v3);
    assert!(v2 != v1);
}

#[test]
fn assign_replaces_value() {
    let tt = BigUnsigned::from(123u8);
    let mut t = BigUnsigned::from(2u8);

    t.assign(&tt);

    assert_eq!(t.compare_to(&tt), Ordering::Equal);
    assert!(!t.is_zero());
    assert_eq!(i32::try_from(&t).unwrap(), 123);
}

#[test]
fn debug_shows_blocks() {
    let value = BigUnsigned::from_blocks(&[3, 4]);
    assert_eq!(format!("{value:?}"), "BigUnsigned([3, 4])");
}

#[test]
fn hash_matches_equality() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(BigUnsigned::from(9u8));

    let mut roomy = BigUnsigned::from_blocks(&[1, 2, 3]);
    roomy.assign(&BigUnsigned::from(9 as Block));

    assert!(set.contains(&roomy));
}
