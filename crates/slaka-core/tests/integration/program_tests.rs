//! Whole programs with input and output

use super::run;
use slaka_core::Interpreter;
use std::io::Cursor;

#[test]
fn test_echo_line() {
    let (store, output) = run("ʔi ʔʰi", "hello\n");
    assert_eq!(store.get(0), Some("hello\n"));
    assert_eq!(output, "hello\n");
}

#[test]
fn test_echo_at_end_of_input() {
    let (store, output) = run("ʔi ʔʰi", "");
    assert_eq!(store.get(0), Some(""));
    assert_eq!(output, "");
}

#[test]
fn test_sum_two_lines() {
    // slot 0 := a, slot 1 := b, slot 0 := a + b
    let (store, output) = run("ʔi ʔɪ\u{308} si ʔʰi", "3\n4\n");
    assert_eq!(store.get(0), Some("7"));
    assert_eq!(store.get(1), Some("4\n"));
    assert_eq!(output, "7");
}

#[test]
fn test_voiced_subtract_swaps_operands() {
    let (unvoiced, _) = run("ʔi ʔɪ\u{308} ti", "10\n4\n");
    let (voiced, _) = run("ʔi ʔɪ\u{308} di", "10\n4\n");

    assert_eq!(unvoiced.get(0), Some("6"));
    assert_eq!(voiced.get(0), Some("-6"));
}

#[test]
fn test_concat_lines() {
    let (_, output) = run("ʔi ʔɪ\u{308} ci ʔʰi", "Hello, \nworld\n");
    assert_eq!(output, "Hello, \nworld\n");
}

#[test]
fn test_division_by_zero_stores_empty() {
    let (store, output) = run("ʔi qi ʔʰi", "5\n");
    assert_eq!(store.get(0), Some(""));
    assert_eq!(output, "");
}

#[test]
fn test_repeated_doubling() {
    // slot 1 := slot 0 + slot 1, then slot 0 := slot 1 + slot 0, alternating
    let (store, _) = run("ʔi sʰi zi sʰi zi", "1\n");
    assert_eq!(store.get(1), Some("3"));
    assert_eq!(store.get(0), Some("5"));
}

#[test]
fn test_state_persists_between_runs() {
    let mut interp = Interpreter::with_io(Cursor::new(b"2\n".to_vec()), Vec::new());
    interp.run("ʔi").unwrap();
    interp.run("sʰi").unwrap();
    interp.run("sʰi ʔʰɪ\u{308}").unwrap();

    assert_eq!(interp.store().get(1), Some("4"));
    assert_eq!(interp.output().as_slice(), b"4");
}

#[test]
fn test_every_slot_reachable() {
    // concat the line into each slot's pair partner until all nine hold it
    let (store, _) = run("ʔi cʰi cʰy cʰɨ cʰʉ cʰɯ cʰu cʰɪ cʰʏ", "z");
    for slot in 0..9 {
        assert_eq!(store.get(slot), Some("z"), "slot {}", slot);
    }
}

#[test]
fn test_many_slashes() {
    let mut code = String::from("/");
    for _ in 0..10_000 {
        code.push_str("sʰi//");
    }
    let (store, _) = run(&code, "");
    assert_eq!(store.get(1), Some("0"));
}
