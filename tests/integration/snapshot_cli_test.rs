//! CLI output snapshot tests
//!
//! Pins the exact bytes cstrip produces for the sample fixture and for a
//! failing run.

use std::fs;

use tempfile::TempDir;

use crate::helpers::{cstrip, fixture, write_source};

#[test]
fn snapshot_sample_cleaned_file() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("sample.min.cpp");

    cstrip(temp.path())
        .arg(fixture("sample.cpp"))
        .arg("-o")
        .arg(&output)
        .assert()
        .code(0);

    let cleaned = fs::read_to_string(&output).unwrap();
    insta::assert_snapshot!(cleaned, @r#"
    #include <iostream>
    #include <vector>
    #include <string>
    #include <cmath>
    int add(int x, int y) { return x + y; }
    bool isPrime(int n) {
    if (n <= 1) return false;
    if (n == 2) return true;
    if (n % 2 == 0) return false;
    for (int i = 3; i * i <= n; i += 2) {
    if (n % i == 0) return false;
    }
    return true;
    }
    double average(const std::vector<int>& v) {
    if (v.empty()) return 0.0;
    long long sum = 0;
    for (int x : v) sum += x;
    return static_cast<double>(sum) / v.size();
    }
    int factorial(int n) {
    int result = 1;
    int i = 2;
    while (i <= n) {
    result *= i;
    ++i;
    }
    return result;
    }
    int main() {
    int a = 5; int b = 3;
    int c = 0;
    c = a + b * 2 - (a / 2);
    bool ok = (c > 0) && (a != b) || !(b < 0);
    if (ok) {
    std::cout << "ok: c=" << c << "\n";
    } else {
    std::cout << "not ok\n";
    }
    std::vector<int> nums;
    for (int i = 1; i <= 20; i++) {
    if (isPrime(i)) nums.push_back(i);
    }
    int s = add(a, b);
    std::cout << "add(a,b)=" << s << "\n";
    std::cout << "avg(primes)=" << average(nums) << "\n";
    std::cout << "factorial(6)=" << factorial(6) << "\n";
    std::string tricky = "this is not a comment: // and neither is /* ... */";
    char quote = '\'';
    std::cout << tricky << " " << quote << "\n";
    return 0;
    }
    "#);
}

#[test]
fn snapshot_sample_info_lines() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("sample.min.cpp");

    let assert = cstrip(temp.path())
        .arg(fixture("sample.cpp"))
        .arg("-o")
        .arg(&output)
        .assert()
        .code(0);

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout)
        .replace(&output.display().to_string(), "[OUTPUT]");
    insta::assert_snapshot!(stdout, @r"
    [INFO] Removed characters (block comments): ~93
    [INFO] Removed characters (line comments): ~166
    [INFO] Removed empty lines: 24
    [INFO] Cleaned code saved to: [OUTPUT]
    No errors found
    ");
}

#[test]
fn snapshot_unbalanced_stderr() {
    let temp = TempDir::new().unwrap();
    let input = write_source(&temp, "bad.c", "int a;\n/* ok */\n*/\n/* open\n");

    let assert = cstrip(temp.path()).arg(&input).assert().code(1);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    insta::assert_snapshot!(stderr, @r"
    [ERROR] Extra closing '*/' on line 3
    [ERROR] Unterminated block comment '/*' (line 4)
    Errors found - cleaned output withheld.
    ");
}
