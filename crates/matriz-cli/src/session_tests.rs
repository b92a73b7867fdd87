pub(crate) use super::*;
use std::io::Cursor;

/// Drives a full session over an in-memory script and returns the output.
fn run_script(input: &str, precision: usize) -> String {
    let mut out = Vec::new();
    run(Cursor::new(input.to_string()), &mut out, precision)
        .expect("in-memory session cannot fail on I/O");
    String::from_utf8(out).expect("session output is UTF-8")
}

#[test]
fn test_sum_difference_product_session() {
    // [[1,2],[3,4]] and [[5,6],[7,8]]
    let output = run_script("2 2\n1 2 3 4\n2 2\n5 6 7 8\n1\n2\n3\n8\n", 2);

    assert!(output.contains("=== Sum ==="));
    assert!(output.contains("6.00 8.00\n10.00 12.00"));
    assert!(output.contains("=== Difference ==="));
    assert!(output.contains("-4.00 -4.00\n-4.00 -4.00"));
    assert!(output.contains("=== Product ==="));
    assert!(output.contains("19.00 22.00\n43.00 50.00"));
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn test_dimensions_reprompted_until_valid() {
    let output = run_script("0 2\n101 2\nx y\n2 2\n1 2 3 4\n2 2\n5 6 7 8\n8\n", 2);

    assert!(output.contains("Invalid size, min is 1"));
    assert!(output.contains("Invalid size, max is 100"));
    assert!(output.contains("Dimensions must be whole numbers."));
    assert!(output.contains("--- Matrix 1 (2x2) ---"));
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn test_width_height_entry_order() {
    // width 3, height 2 builds a 2-row, 3-column matrix
    let output = run_script("3 2\n1 2 3 4 5 6\n3 2\n1 1 1 1 1 1\n8\n", 0);

    assert!(output.contains("--- Matrix 1 (2x3) ---"));
    assert!(output.contains("1 2 3\n4 5 6"));
}

#[test]
fn test_non_numeric_values_reprompted() {
    let output = run_script("2 2\nx 1 2 3 4\n2 2\n5 6 7 8\n4\n8\n", 2);

    assert!(output.contains("Not a number: x"));
    assert!(output.contains("1.00 2.00\n3.00 4.00"));
}

#[test]
fn test_product_mismatch_keeps_session_alive() {
    // 2x3 times 2x2 has disagreeing inner dimensions
    let output = run_script("3 2\n1 2 3 4 5 6\n2 2\n5 6 7 8\n3\n1\n8\n", 2);

    assert!(output.contains("dimension mismatch"));
    // The mismatch for the sum is also reported, and the loop survived both
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn test_unknown_choice_redisplays_menu() {
    let output = run_script("1 1\n7\n1 1\n8\n9\n8\n", 2);

    assert!(output.contains("Unknown choice: 9"));
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn test_reenter_matrix_changes_operand() {
    // Re-enter matrix 2 as [[0]] and the sum becomes matrix 1 unchanged
    let output = run_script("1 1\n5\n1 1\n3\n7\n1 1\n0\n1\n8\n", 0);

    assert!(output.contains("=== Sum ===\n5"));
}

#[test]
fn test_eof_mid_entry_ends_cleanly() {
    let output = run_script("2 2\n1 2\n", 2);

    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn test_eof_at_menu_ends_cleanly() {
    let output = run_script("1 1\n1\n1 1\n2\n", 2);

    assert!(output.contains("Input: "));
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn test_precision_zero_prints_integers() {
    let output = run_script("2 2\n1 2 3 4\n2 2\n5 6 7 8\n1\n8\n", 0);

    assert!(output.contains("6 8\n10 12"));
}

#[test]
fn test_values_accepted_across_lines() {
    let output = run_script("2 2\n1\n2\n3 4\n2 2\n5 6 7 8\n4\n8\n", 2);

    assert!(output.contains("1.00 2.00\n3.00 4.00"));
}
