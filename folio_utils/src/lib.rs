/// Returns the version string of this build.
pub const fn folio_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables)]
            $pat => ::core::panic!(
                "Assertion failed: Value {val:?} does not match predicate {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn matches_pattern() {
        assert_matches!(Some(3), Some(_));
        assert_matches!(Ok::<_, ()>(7), Ok(x) if *x > 5);
    }

    #[test]
    #[should_panic = "did not match pattern"]
    fn mismatch_panics() {
        assert_matches!(None::<u8>, Some(_));
    }
}
