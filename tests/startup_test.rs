//! Startup contract checks against the compiled binary.
//!
//! A broken environment must terminate the process with exit code 1 and one
//! error line naming the problem. The required variables are pinned to empty
//! strings instead of cleared: an empty value counts as missing, and a
//! variable that is already set cannot be overridden by a stray `.env` file.

use std::process::Command;

#[test]
fn test_missing_env_vars_exit_with_code_1() {
    let output = Command::new(env!("CARGO_BIN_EXE_homework-bot"))
        .env("PRACTICUM_TOKEN", "")
        .env("TELEGRAM_TOKEN", "")
        .env("TELEGRAM_CHAT_ID", "")
        .output()
        .expect("failed to spawn the bot binary");

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Отсутствуют обязательные переменные окружения"),
        "stdout: {stdout}"
    );
    assert!(stdout.contains("PRACTICUM_TOKEN"), "stdout: {stdout}");
    assert!(stdout.contains("TELEGRAM_TOKEN"), "stdout: {stdout}");
    assert!(stdout.contains("TELEGRAM_CHAT_ID"), "stdout: {stdout}");
}

#[test]
fn test_malformed_chat_id_exits_with_code_1() {
    let output = Command::new(env!("CARGO_BIN_EXE_homework-bot"))
        .env("PRACTICUM_TOKEN", "practicum-token")
        .env("TELEGRAM_TOKEN", "telegram-token")
        .env("TELEGRAM_CHAT_ID", "not-a-chat")
        .output()
        .expect("failed to spawn the bot binary");

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("TELEGRAM_CHAT_ID"), "stdout: {stdout}");
    assert!(stdout.contains("not-a-chat"), "stdout: {stdout}");
}
