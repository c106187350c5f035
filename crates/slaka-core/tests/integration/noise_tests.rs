//! Unrecognized characters are ignored wherever they appear between
//! instructions

use super::run;

/// A program as a list of instructions
const INSTRUCTIONS: &[&str] = &[
    "ʔi", "ʔɪ\u{308}", "si", "cʰy", "pɪ\u{308}", "zʰɘ", "ɟɒ", "qʰæ", "ʔʰi", "ʔʰy",
];

/// Characters that are neither operators, vowels, nor slashes
const NOISE: &[&str] = &[
    " ", "\n", "\t", "x", "X", "h", "#", "0", "9", ".", "-", "€", "日本", "🙂", "ʰ", "ʰʰ",
];

fn program_with(separator: impl Fn(usize) -> String) -> String {
    let mut code = String::new();
    for (idx, instruction) in INSTRUCTIONS.iter().enumerate() {
        code.push_str(&separator(idx));
        code.push_str(instruction);
    }
    code.push_str(&separator(INSTRUCTIONS.len()));
    code
}

#[test]
fn test_noise_between_instructions() {
    let input = "12\n5\n";
    let baseline = run(&program_with(|_| String::new()), input);

    for noise in NOISE {
        let noisy = program_with(|_| noise.to_string());
        assert_eq!(run(&noisy, input), baseline, "noise {:?}", noise);
    }
}

#[test]
fn test_mixed_noise() {
    let input = "12\n5\n";
    let baseline = run(&program_with(|_| String::new()), input);

    let noisy = program_with(|idx| NOISE[(idx * 7) % NOISE.len()].repeat(idx % 3 + 1));
    assert_eq!(run(&noisy, input), baseline);
}

#[test]
fn test_lone_keys_and_vowels_are_noise() {
    // keys without a vowel after them and vowels without a key before them
    let (store, output) = run("s c ʔ ʔʰ i y ɒ sʰ ʰi", "unused\n");
    assert!(store.iter().all(str::is_empty));
    assert_eq!(output, "");
}

#[test]
fn test_truncated_instruction_at_end() {
    let (store, _) = run("sʰi sʰ", "");
    assert_eq!(store.get(1), Some("0"));
    assert_eq!(store.get(0), Some(""));
}
