//! Console command parser

use crate::console::Command;

/// Parses one input line. Keywords are case-insensitive.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Command::Unknown(String::new());
    };
    let args: Vec<&str> = tokens.collect();

    match keyword.to_ascii_uppercase().as_str() {
        "LOGIN" => parse_login(&args),
        "ADMIN" => Command::Admin,
        "BACK" => Command::Back,
        "AUTH" => parse_auth(line, &args),
        "QUERY" => Command::Query(args.join(" ")),
        "LOGOUT" => Command::Logout,
        "HELP" | "?" => Command::Help,
        "QUIT" | "EXIT" => Command::Quit,
        _ => Command::Unknown(line.trim().to_string()),
    }
}

fn parse_login(args: &[&str]) -> Command {
    let (remember, id_tokens) = match args.split_last() {
        Some((last, rest)) if last.eq_ignore_ascii_case("REMEMBER") => (Some(true), rest),
        Some((last, rest)) if last.eq_ignore_ascii_case("FORGET") => (Some(false), rest),
        _ => (None, args),
    };

    let civil_id = if id_tokens.is_empty() {
        None
    } else {
        Some(id_tokens.join(" "))
    };

    Command::Login { civil_id, remember }
}

// The password is everything after the username, so it may contain spaces
fn parse_auth(line: &str, args: &[&str]) -> Command {
    let Some(username) = args.first() else {
        return Command::Auth {
            username: String::new(),
            password: String::new(),
        };
    };

    let after_keyword = line.trim_start()[4..].trim_start();
    let password = after_keyword[username.len()..].trim_start().to_string();

    Command::Auth {
        username: username.to_string(),
        password,
    }
}
