// Tests for caught

use std::fmt;

use tagged_either::{caught, Catch, Either, Left, Right};

#[derive(Debug, PartialEq)]
struct TypeError {
    message: String,
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeError: {}", self.message)
    }
}

fn add(a: i32, b: i32) -> Result<i32, TypeError> {
    Ok(a + b)
}

fn fail(_a: i32, _b: i32) -> Result<i32, TypeError> {
    Err(TypeError {
        message: "Oh No".to_string(),
    })
}

fn arity_of<Args, F: Catch<Args>>(_f: &F) -> usize {
    F::ARITY
}

#[test]
fn keeps_the_arity_of_the_inner_function() {
    let c = caught(add);
    assert_eq!(c.arity::<(i32, i32)>(), 2);
    assert_eq!(arity_of::<(i32, i32), _>(&add), 2);
    assert_eq!(arity_of::<(), _>(&|| Ok::<_, ()>(1)), 0);
    assert_eq!(
        arity_of::<(u8, u8, u8, u8), _>(&|a: u8, b: u8, c: u8, d: u8| Ok::<_, ()>(a + b + c + d)),
        4
    );
}

#[test]
fn returns_a_left_when_the_inner_function_fails() {
    let _ = pretty_env_logger::try_init();
    let c = caught(fail);
    let result = c.call((1, 2));

    assert!(result.is_left());
    assert_eq!(
        result,
        Left(TypeError {
            message: "Oh No".to_string()
        })
    );
}

#[test]
fn returns_a_right_when_the_inner_function_succeeds() {
    let c = caught(add);
    let result = c.call((1, 2));

    assert!(result.is_right());
    assert_eq!(result, Right(3));
}

#[test]
fn can_be_called_repeatedly() {
    let parse = caught(|src: &str| src.parse::<i32>());
    assert_eq!(parse.call(("12",)), Right(12));
    assert!(parse.call(("twelve",)).is_left());
    assert_eq!(parse.call(("-4",)).into_right(), Some(-4));
}

#[test]
fn zero_argument_functions() {
    let c = caught(|| -> Result<&str, ()> { Ok("done") });
    let result: Either<(), &str> = c.call(());
    assert_eq!(result, Right("done"));
}
