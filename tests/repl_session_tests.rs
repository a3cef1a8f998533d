//! Integration Tests for the command loop
//!
//! Drives whole sessions from scripted input against a local mock API.

mod common;

use common::spawn_mock_api;
use pokedex::repl::{run, CatchRoll, Repl, PROMPT};
use pokedex::PokeApiClient;

struct FixedRoll(u32);

impl CatchRoll for FixedRoll {
    fn roll(&mut self, _upper: u32) -> u32 {
        self.0
    }
}

async fn run_script(repl: &mut Repl, script: &str) -> String {
    let mut out = Vec::new();
    run(repl, script.as_bytes(), &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_full_session() {
    let api = spawn_mock_api().await;
    let config = api.config();
    let client = PokeApiClient::new(&config).unwrap();
    let mut repl = Repl::with_roller(client, config.catch_threshold, Box::new(FixedRoll(10)));

    let script = "\
help
map
map
mapb
explore canalave-city
catch Pikachu
inspect pikachu
pokedex
exit
map
";
    let output = run_script(&mut repl, script).await;

    assert!(output.starts_with(PROMPT));
    assert!(output.contains(" - canalave-city\n - eterna-city"));
    assert!(output.contains(" - pastoria-city\n - sunyshore-city"));
    assert!(output.contains(" - canalave-city-area"));
    assert!(output.contains("pikachu was caught!"));
    assert!(output.contains("Name: pikachu"));
    assert!(output.contains("  -speed: 90"));
    assert!(output.contains("Your Pokedex:\n - pikachu"));
    assert!(output.ends_with("Goodbye!\n"), "loop stops at exit: {}", output);

    // mapb was served from the cache
    assert_eq!(
        api.requests(),
        vec![
            "/location/?offset=0".to_string(),
            "/location/?offset=2".to_string(),
            "/location/canalave-city".to_string(),
            "/pokemon/pikachu".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_errors_do_not_end_session() {
    let api = spawn_mock_api().await;
    let config = api.config();
    let client = PokeApiClient::new(&config).unwrap();
    let mut repl = Repl::with_roller(client, config.catch_threshold, Box::new(FixedRoll(0)));

    let script = "\
mapb
fly pidgey
explore
explore nowhere
catch missingno
inspect mew

map
";
    let output = run_script(&mut repl, script).await;

    assert!(output.contains("You are on the first page"));
    assert!(output.contains("invalid command: fly"));
    assert!(output.contains("Missing argument: location"));
    assert!(output.contains("Bad status code 404"));
    assert!(output.contains("Failed to decode response"));
    assert!(output.contains("you have not caught mew"));
    // The session survived every error above
    assert!(output.contains(" - canalave-city"));
    assert_eq!(
        repl.session().next_page.as_deref(),
        Some(api.second_page_url().as_str())
    );
}

#[tokio::test]
async fn test_failed_catch_keeps_pokedex_empty() {
    let api = spawn_mock_api().await;
    let config = api.config();
    let client = PokeApiClient::new(&config).unwrap();
    let mut repl = Repl::with_roller(client, config.catch_threshold, Box::new(FixedRoll(99)));

    let output = run_script(&mut repl, "catch pikachu\npokedex\n").await;

    assert!(output.contains("pikachu escaped!"));
    assert!(output.contains("Your Pokedex is empty"));
    assert_eq!(repl.session().caught_count(), 0);
}

#[tokio::test]
async fn test_end_of_input_ends_loop() {
    let api = spawn_mock_api().await;
    let client = PokeApiClient::new(&api.config()).unwrap();
    let mut repl = Repl::new(client, 50);

    let output = run_script(&mut repl, "").await;
    assert_eq!(output, format!("{}\n", PROMPT));
    assert_eq!(api.request_count(), 0);
}
