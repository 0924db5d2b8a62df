#![allow(clippy::expect_used, clippy::print_stdout)]

/// Full fixture suite runner
use super::fixture_loader::TestCase;
use super::fixture_runner::run_fixture_tests;

#[test]
fn test_full_fixture_suite() {
    let test_data = include_str!("./resolvetestdata.json");
    let tests: Vec<TestCase> =
        serde_json::from_str(test_data).expect("Failed to parse fixture test data");

    println!("\nRunning {} fixture entries...", tests.len());

    let result = run_fixture_tests(tests);

    println!("\n{}", result.summary());

    if !result.failures.is_empty() {
        println!("\nShowing first 20 failures:");
        for (i, failure) in result.failures.iter().take(20).enumerate() {
            println!("\n{}. Test #{}: {}", i + 1, failure.test_num, failure.check);
            println!("   Input: {:?}", failure.input);
            if let Some(ref base) = failure.base {
                println!("   Base: {base:?}");
            }
            println!("   Expected: {:?}", failure.expected);
            println!("   Actual: {:?}", failure.actual);
        }

        if result.failures.len() > 20 {
            println!("\n... and {} more failures", result.failures.len() - 20);
        }
    }

    assert_eq!(
        result.failed,
        0,
        "\n\nFixture suite failed!\n\
         Passed: {}, Failed: {}, Pass Rate: {:.2}%\n\
         Run with `cargo test test_full_fixture_suite -- --nocapture` to see failure details.\n",
        result.passed,
        result.failed,
        result.pass_rate()
    );

    // Also verify the case count hasn't shrunk unexpectedly
    assert!(
        result.passed >= 2400,
        "Expected at least 2400 fixture cases, but found {}",
        result.passed,
    );
}
