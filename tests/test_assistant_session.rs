//! End-to-end assistant sessions.
//!
//! Each test feeds a scripted stdin to the REPL and checks the transcript.
//! The session date is pinned so birthday reports are deterministic.

use chrono::NaiveDate;
use contact_assistant::assistant::run;
use contact_assistant::Assistant;
use std::io::Cursor;

const PROMPT: &str = "Enter a command: ";

/// Run a script and return the reply lines, without greeting or prompts.
fn replies(script: &str) -> Vec<String> {
    let mut assistant =
        Assistant::default().with_today(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());
    let mut output = Vec::new();
    run(&mut assistant, Cursor::new(script), &mut output, PROMPT).unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .skip(1)
        .map(|line| line.trim_start_matches(PROMPT).to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

#[test]
fn test_show_birthday_after_adding_it() {
    let out = replies(
        "add John 1234567890\n\
         add-birthday John 01.01.2030\n\
         show-birthday John\n\
         exit\n",
    );
    assert_eq!(
        out,
        vec![
            "Contact added.",
            "Birthday added for John.",
            "01.01.2030",
            "Goodbye!",
        ]
    );
}

#[test]
fn test_duplicate_add_keeps_first_phone() {
    let out = replies("add John 1234567890\nadd John 0987654321\nphone John\nclose\n");
    assert_eq!(out[0], "Contact added.");
    assert_eq!(out[1], "Contact John already exists.");
    assert_eq!(out[2], "1234567890");
}

#[test]
fn test_errors_do_not_end_the_session() {
    let out = replies(
        "add John 12\n\
         add-birthday John 01.01.2030\n\
         \n\
         fly\n\
         add John 1234567890 31.02.2020\n\
         add John 1234567890 29.02.2020\n\
         show-birthday John\n\
         exit\n",
    );

    assert!(out[0].starts_with("Invalid phone number format"));
    assert_eq!(out[1], "Contact John not found.");
    assert!(out[2].contains("No parameters"));
    assert_eq!(out[3], "Invalid command.");
    assert!(out[4].contains("DD.MM.YYYY"));
    assert_eq!(out[5], "Contact added.");
    assert_eq!(out[6], "29.02.2020");
    assert_eq!(out.last().unwrap(), "Goodbye!");
}

#[test]
fn test_birthdays_command_groups_by_weekday() {
    let out = replies(
        "add Ann 1111111111 15.10.1990\n\
         add Bob 2222222222 17.10.1991\n\
         add Cid 3333333333 18.10.1992\n\
         add Dan 4444444444 25.12.1993\n\
         birthdays\n\
         exit\n",
    );

    assert_eq!(&out[4..6], &["Thursday: Ann", "Monday: Bob, Cid"]);
}

#[test]
fn test_all_lists_every_contact() {
    let out = replies(
        "add John 1234567890 01.01.1990\n\
         add Jane 0987654321\n\
         add-phone Jane 1111111111\n\
         all\n\
         exit\n",
    );

    assert!(out.contains(
        &"Contact name: John, phones: 1234567890, birthday: 01.01.1990".to_string()
    ));
    assert!(out.contains(&"Contact name: Jane, phones: 0987654321; 1111111111".to_string()));
}

#[test]
fn test_change_replaces_contact() {
    let out = replies(
        "add John 1234567890 01.01.1990\n\
         change John 0987654321\n\
         phone John\n\
         show-birthday John\n",
    );

    assert_eq!(out[1], "Contact updated.");
    assert_eq!(out[2], "0987654321");
    assert_eq!(out[3], "No birthday set for John.");
    // End of input closes the session politely
    assert_eq!(out.last().unwrap(), "Goodbye!");
}
