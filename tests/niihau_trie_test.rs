//! Integration tests for Niihau.
//! Drives the public library API and the `niihau` binary end to end.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use niihau_lib::dictionary::{build_trie, Vocabulary};
use niihau_lib::NiihauTrie;

fn niihau(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_niihau"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn niihau");

    // The child may exit before reading its input
    let _ = child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes());

    child.wait_with_output().expect("failed to wait for niihau")
}

#[test]
fn test_default_vocabulary_through_library() {
    let trie = build_trie(&Vocabulary::default_words("integration test"));

    assert_eq!(trie.all_words().len(), 6);
    assert_eq!(trie.lookup("End"), Some("End"));
    assert_eq!(trie.lookup("Endo"), None);
    assert!(trie.is_prefix("Endo"));
    assert_eq!(
        trie.auto_complete("End"),
        Some(vec!["End".to_string(), "Endorphine".to_string()])
    );
    assert_eq!(trie.auto_complete("Zz"), None);
    assert!(trie.is_prefix("Dop"));
    assert_eq!(
        trie.auto_complete("Dop"),
        Some(vec!["Dopamine".to_string(), "Dope".to_string()])
    );
}

#[test]
fn test_trie_is_shareable_across_threads() {
    let trie: NiihauTrie = ["alpha", "alphabet", "beta"].into_iter().collect();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(trie.auto_complete("alp").map(|w| w.len()), Some(2));
                assert!(!trie.is_prefix("gamma"));
            });
        }
    });
}

#[test]
fn test_repl_without_console_exits_99() {
    let output = niihau(&["repl"], "End\n");
    assert_eq!(output.status.code(), Some(99));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_repl_with_terminal_check_disabled() {
    let output = niihau(&["--no-terminal-check", "repl"], "End\nZz\n");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Prefix End matched the following words: [End, Endorphine]"));
    assert!(stdout.contains("Prefix Zz matched no words"));
}

#[test]
fn test_complete_command() {
    let output = niihau(&["--format", "json", "complete", "Dop"], "");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "{\"prefix\":\"Dop\",\"matches\":[\"Dopamine\",\"Dope\"]}\n"
    );

    let output = niihau(&["complete", "Zz"], "");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_lookup_and_dump_with_word_list() {
    let dir = tempfile::tempdir().unwrap();
    let words = dir.path().join("words.txt");
    std::fs::write(&words, "pear\npeach\nplum\n").unwrap();
    let words = words.to_str().unwrap();

    let output = niihau(&["--dictionary", words, "lookup", "peach"], "");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "peach\n");

    let output = niihau(&["--dictionary", words, "lookup", "pea"], "");
    assert_eq!(output.status.code(), Some(1));

    let output = niihau(&["--dictionary", words, "dump"], "");
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "peach\npear\nplum\n");
}

#[test]
fn test_gen_config_then_validate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf").join("niihau.toml");
    let path = path.to_str().unwrap();

    let output = niihau(&["gen-config", "--output", path], "");
    assert!(output.status.success());

    let output = niihau(&["--config", path, "validate"], "");
    assert!(output.status.success());
}
