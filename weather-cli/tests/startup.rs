use assert_cmd::Command;
use predicates::prelude::*;

fn weather(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("weather").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("WEATHER_API_KEY")
        .env_remove("WEATHER_BASE_URL")
        .env_remove("WEATHER_UNITS")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn missing_api_key_exits_with_guidance() {
    let dir = tempfile::tempdir().unwrap();

    weather(&dir)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No API key found"))
        .stdout(predicate::str::contains("https://openweathermap.org/api"))
        .stdout(predicate::str::contains("Fetching").not());
}

#[test]
fn api_key_from_dotenv_file_is_used() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".env"), "WEATHER_API_KEY=from-dotenv\n").unwrap();

    weather(&dir)
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye! Thanks for using Weather App!"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();

    weather(&dir)
        .env("WEATHER_API_KEY", "KEY")
        .write_stdin("\nhelp\nunits kelvin\nunits nope\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter city name (or command): "))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Temperature units set to Kelvin"))
        .stdout(predicate::str::contains("Invalid units 'nope'"))
        .stdout(predicate::str::contains("Goodbye!"));
}
