//! Fixture loader
//!
//! Test data is a JSON array mixing case objects and comment strings.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A resolution case
    ResolveTest {
        input: String,
        #[serde(default)]
        base: Option<String>,
        expected: String,
    },
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct FixtureTestResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub test_num: usize,
    pub input: String,
    pub base: Option<String>,
    pub check: &'static str,
    pub expected: String,
    pub actual: String,
}

impl Default for FixtureTestResult {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureTestResult {
    pub fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
            failures: Vec::new(),
        }
    }

    pub fn pass_rate(&self) -> f64 {
        let total = self.passed + self.failed;
        if total == 0 {
            0.0
        } else {
            (self.passed as f64 / total as f64) * 100.0
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Passed: {}, Failed: {}, Pass Rate: {:.2}%",
            self.passed,
            self.failed,
            self.pass_rate()
        )
    }
}

fn case(input: &str, base: Option<&str>, expected: &str) -> TestCase {
    TestCase::ResolveTest {
        input: input.to_string(),
        base: base.map(str::to_string),
        expected: expected.to_string(),
    }
}

/// Source map scenarios checked before the full suite
pub fn get_inline_tests() -> Vec<TestCase> {
    vec![
        TestCase::Comment("Absolute input ignores the base".to_string()),
        case(
            "https://absolute.com/foo/./bar/../main.js.map",
            None,
            "https://absolute.com/foo/main.js.map",
        ),
        TestCase::Comment("Protocol-relative input takes the base scheme".to_string()),
        case(
            "//protocol-relative.com/main.js.map",
            Some("https://foo.com"),
            "https://protocol-relative.com/main.js.map",
        ),
        case(
            "../bar/main.js.map",
            Some("https://foo.com/dir/file"),
            "https://foo.com/bar/main.js.map",
        ),
        TestCase::Comment("Excess parents survive in relative results".to_string()),
        case(
            "foo/../../../bar/main.js.map",
            Some("dir/"),
            "../bar/main.js.map",
        ),
        case(
            "/foo/./bar/../main.js.map",
            Some("/root/"),
            "/foo/main.js.map",
        ),
        case("", Some("https://foo.com/dir/file"), "https://foo.com/dir/file"),
        case("#input", Some("?baseQuery"), "?baseQuery#input"),
        case("bar/main.js.map", Some("deep/dir/"), "deep/dir/bar/main.js.map"),
    ]
}
