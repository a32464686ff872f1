#[cfg(test)]
use crate::reader::*;

#[test]
fn test_side_p() {
    assert_eq!(
        side_p::<EitherParserKind>("Either.Left(1)"),
        Ok(("(1)", Side::Left))
    );
    assert_eq!(
        side_p::<EitherParserKind>("Either.Right(1)"),
        Ok(("(1)", Side::Right))
    );
    assert!(side_p::<EitherParserKind>("Maybe.Just(1)").is_err());
}

#[test]
fn test_balanced_p() {
    assert_eq!(balanced_p::<EitherParserKind>("1)"), Ok((")", "1")));
    assert_eq!(
        balanced_p::<EitherParserKind>("Either.Left(2))"),
        Ok((")", "Either.Left(2)"))
    );
    assert_eq!(balanced_p::<EitherParserKind>(")"), Ok((")", "")));
    assert!(balanced_p::<EitherParserKind>("(1").is_err());
}

#[test]
fn test_either_p() {
    assert_eq!(
        either_p::<EitherParserKind>("  Either.Right(a b)  "),
        Ok(("", (Side::Right, "a b")))
    );
    assert_eq!(
        either_p::<EitherParserKind>("Either.Left(Either.Right(3)) tail"),
        Ok(("tail", (Side::Left, "Either.Right(3)")))
    );
    assert!(either_p::<EitherParserKind>("Either.Left 3").is_err());
}

#[test]
fn test_is_balanced() {
    assert!(is_balanced("Either.Left(a (b) c)"));
    assert!(is_balanced("no parens"));
    assert!(!is_balanced("Either.Right(:))"));
    assert!(!is_balanced("Either.Left(1"));
    assert!(!is_balanced(")("));
}
