use quickcheck::QuickCheck;


/// Shared quickcheck runner: more cases on CI, very few under miri.
pub(crate) fn quickcheck() -> QuickCheck {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new().tests(tests)
}
