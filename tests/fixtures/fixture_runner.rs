use super::fixture_loader::{FixtureFailure, FixtureTestResult, TestCase, get_inline_tests};
/// Fixture runner
///
/// Runs resolution cases, and checks the parser round trip on every input
/// and base along the way.
use resolve_uri::{UriRef, resolve};

fn check(
    result: &mut Vec<FixtureFailure>,
    test_num: usize,
    (input, base): (&str, Option<&str>),
    check: &'static str,
    expected: &str,
    actual: String,
) -> bool {
    if actual == expected {
        return true;
    }
    result.push(FixtureFailure {
        test_num,
        input: input.to_string(),
        base: base.map(str::to_string),
        check,
        expected: expected.to_string(),
        actual,
    });
    false
}

/// Run fixture tests and return results
pub fn run_fixture_tests(tests: Vec<TestCase>) -> FixtureTestResult {
    let mut result = FixtureTestResult::new();
    let mut test_num = 0;

    for test in tests {
        let TestCase::ResolveTest {
            input,
            base,
            expected,
        } = test
        else {
            continue;
        };
        test_num += 1;

        let pair = (input.as_str(), base.as_deref());
        let mut test_passed = check(
            &mut result.failures,
            test_num,
            pair,
            "resolve",
            &expected,
            resolve(&input, base.as_deref()),
        );

        test_passed &= check(
            &mut result.failures,
            test_num,
            pair,
            "input round trip",
            &input,
            UriRef::parse(&input).to_string(),
        );

        if let Some(base) = base.as_deref() {
            test_passed &= check(
                &mut result.failures,
                test_num,
                pair,
                "base round trip",
                base,
                UriRef::parse(base).to_string(),
            );
        }

        if test_passed {
            result.passed += 1;
        } else {
            result.failed += 1;
        }
    }

    result
}

#[test]
fn test_inline_fixtures() {
    let result = run_fixture_tests(get_inline_tests());
    assert_eq!(result.failed, 0, "{:#?}", result.failures);
    assert_eq!(result.passed, 8);
}
