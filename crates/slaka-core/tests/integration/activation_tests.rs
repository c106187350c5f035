//! Slash-delimited active and inert fragments

use super::run;

const PROGRAMS: &[&str] = &[
    "",
    "si",
    "ʔi ʔɪ\u{308} si ʔʰi",
    "ʔi cʰi cʰy ɟʰɘ ʔʰy ʔʰɘ",
    "ʔi pʰɒ bʰɒ qʰɒ ɢʰɒ",
    "not a program at all",
];

#[test]
fn test_wrapping_in_slashes_is_transparent() {
    for program in PROGRAMS {
        let wrapped = format!("/{}/", program);
        assert_eq!(run(program, "6\n"), run(&wrapped, "6\n"), "program {:?}", program);
    }
}

#[test]
fn test_middle_fragment_is_comment() {
    let (store, output) = run("/ʔi/ʔʰi this never prints/ʔʰi/", "x\n");
    assert_eq!(store.get(0), Some("x\n"));
    assert_eq!(output, "x\n");
}

#[test]
fn test_comment_fragment_same_as_absent() {
    let with_comment = run("/ʔi/ʔɪ\u{308} ci/sʰi/", "1\n");
    let without_comment = run("/ʔi//sʰi/", "1\n");
    assert_eq!(with_comment, without_comment);
}

#[test]
fn test_text_outside_slashes_never_runs() {
    let (store, output) = run("ʔi ʔʰi/sʰi/ʔʰi", "q\n");
    assert_eq!(store.get(0), Some(""));
    assert_eq!(store.get(1), Some("0"));
    assert_eq!(output, "");
}

#[test]
fn test_x_y_z_scenario() {
    // x and z run, y is skipped
    let (store, _) = run("/sʰi/sʰy/sʰɨ/", "");
    assert_eq!(store.get(1), Some("0"));
    assert_eq!(store.get(2), Some(""));
    assert_eq!(store.get(3), Some("0"));
}

#[test]
fn test_single_slash_runs_nothing() {
    let (store, output) = run("ʔi ʔʰi / ʔi ʔʰi", "data\n");
    assert!(store.iter().all(str::is_empty));
    assert_eq!(output, "");
}

#[test]
fn test_alternation_with_many_fragments() {
    // fragments 0..6 write slot pairs (0,1)..(0,7); only even ones run
    let (store, _) = run("/sʰi/sʰy/sʰɨ/sʰʉ/sʰɯ/sʰu/sʰɪ/", "");
    let ran: Vec<bool> = (1..8).map(|slot| store.get(slot) == Some("0")).collect();
    assert_eq!(ran, vec![true, false, true, false, true, false, true]);
}
