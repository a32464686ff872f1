// Tests for the variant core

use tagged_either::{member, Case, Const, Either, Left, Right};

#[test]
fn is_left_and_is_right() {
    let l: Either<i32, bool> = Left(1);
    let r: Either<&str, bool> = Right(false);
    assert!(l.is_left());
    assert!(!l.is_right());
    assert!(r.is_right());
    assert!(!r.is_left());
    assert!(Either::<&str, i32>::Left("Error").is_left());
}

#[test]
fn case_dispatches_on_variant() {
    let l: Either<i32, String> = Left(2);
    let r: Either<i32, String> = Right("ok".to_string());
    let handlers = |e: Either<i32, String>| {
        e.case(Case::new(
            |x: i32| format!("Left: {}", x),
            |s: String| format!("Right: {}", s),
        ))
    };
    assert_eq!(handlers(l), "Left: 2");
    assert_eq!(handlers(r), "Right: ok");
}

#[test]
fn case_accepts_constant_handlers() {
    let l: Either<i32, i32> = Left(7);
    let r: Either<i32, i32> = Right(7);
    assert_eq!(l.case(Case::new(Const(0), |x: i32| x * 2)), 0);
    assert_eq!(r.case(Case::new(Const(0), |x: i32| x * 2)), 14);
    assert_eq!(r.case(Case::new(Const("left"), Const("right"))), "right");
}

#[test]
fn member_matches_only_the_same_instantiation() {
    let l: Either<&str, i32> = Left("error");
    let r: Either<&str, i32> = Right(1);
    assert!(member::<&str, i32>(&l));
    assert!(member::<&str, i32>(&r));
    assert!(Either::<&str, i32>::member(&r));

    assert!(!member::<&str, i32>(&1));
    assert!(!member::<&str, i32>(&true));
    assert!(!member::<&str, i32>(&Vec::<i32>::new()));
    assert!(!member::<&str, i32>(&"Right"));
    assert!(!member::<i32, &str>(&r));
}

#[test]
fn option_extraction() {
    let l: Either<i32, &str> = Left(3);
    let r: Either<i32, &str> = Right("x");
    assert_eq!(l.into_left(), Some(3));
    assert_eq!(l.into_right(), None);
    assert_eq!(r.into_right(), Some("x"));
    assert_eq!(r.into_left(), None);
}

#[test]
fn result_conversions() {
    let ok: Result<i32, String> = Ok(1);
    let err: Result<i32, String> = Err("bad".to_string());
    assert_eq!(Either::from(ok.clone()), Right(1));
    assert_eq!(Either::from(err.clone()), Left("bad".to_string()));
    assert_eq!(Either::from(ok.clone()).into_result(), ok);
    assert_eq!(Either::from(err.clone()).into_result(), err);
}

#[test]
fn display() {
    let l: Either<i32, String> = Left(1);
    let r: Either<i32, String> = Right("ok".to_string());
    assert_eq!(l.to_string(), "Either.Left(1)");
    assert_eq!(r.to_string(), "Either.Right(ok)");
    let nested: Either<Either<i32, i32>, i32> = Left(Right(4));
    assert_eq!(nested.to_string(), "Either.Left(Either.Right(4))");
}
