use super::*;

#[test]
fn no_subcommand_defaults_to_local_server() {
    let cli = Cli::try_parse_from(["mb-viewer"]).unwrap();
    assert_eq!(cli.base_url, DEFAULT_BASE_URL);
    assert!(!cli.verbose);
    assert!(cli.command.is_none());
}

#[test]
fn play_takes_input() {
    let cli = Cli::try_parse_from(["mb-viewer", "--base-url", "http://mb:8080", "play", "3"]).unwrap();
    assert_eq!(cli.base_url, "http://mb:8080");
    assert!(matches!(cli.command, Some(Command::Play { input }) if input == "3"));
}

#[test]
fn decode_defaults_to_stdin() {
    let cli = Cli::try_parse_from(["mb-viewer", "-v", "decode"]).unwrap();
    assert!(cli.verbose);
    assert!(matches!(cli.command, Some(Command::Decode { path }) if path == "-"));
}

#[test]
fn run_decode_reads_snapshot_file() {
    let path = std::env::temp_dir().join(format!("mb-viewer-snapshot-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"Card": null, "Lands": [], "Chiefdoms": []}"#).unwrap();
    let result = run_decode(path.to_str().unwrap());
    std::fs::remove_file(&path).unwrap();
    assert!(result.is_ok());
}

#[test]
fn run_decode_missing_file_names_path() {
    let err = run_decode("/nonexistent/mb-snapshot.json").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/mb-snapshot.json"));
}
