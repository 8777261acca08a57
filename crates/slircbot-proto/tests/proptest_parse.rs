//! Property-based tests for message parsing.
//!
//! Uses proptest to generate IRC-shaped lines and checks that:
//! 1. Parsing never panics, whatever the input
//! 2. Fields are only present when the fields they derive from are
//! 3. Well-formed PRIVMSG lines come apart into the expected pieces

use proptest::prelude::*;
use slircbot_proto::{Command, Message};

// =============================================================================
// STRATEGIES
// =============================================================================

fn nickname_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z\\[\\]\\\\^_`{|}][a-zA-Z0-9\\-\\[\\]\\\\^_`{|}]{0,8}")
        .expect("valid regex")
}

fn username_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9]{0,9}").expect("valid regex")
}

fn hostname_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]+(\\.[a-z0-9]+)*").expect("valid regex")
}

fn channel_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("#[a-zA-Z0-9_\\-]{1,49}").expect("valid regex")
}

/// Free text, spaces and colons included, no line endings.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 :!#.,?]{0,80}").expect("valid regex")
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn parse_never_panics(line in "\\PC{0,200}") {
        let _ = Message::parse(&line);
    }

    #[test]
    fn fields_depend_on_their_predecessors(line in "[a-zA-Z0-9 :!@#]{0,60}") {
        let msg = Message::parse(&line);
        if msg.nickname().is_some() {
            prop_assert!(msg.prefix().is_some());
        }
        if msg.middle().is_some() {
            prop_assert!(msg.command().is_some());
        }
        if msg.trailing().is_some() {
            prop_assert!(msg.middle().is_some());
        }
        prop_assert_eq!(msg.body().is_some(), msg.trailing().is_some());
        if line.split(' ').count() < 2 {
            prop_assert!(msg.is_empty());
        }
    }

    #[test]
    fn privmsg_fields(
        nick in nickname_strategy(),
        user in username_strategy(),
        host in hostname_strategy(),
        channel in channel_strategy(),
        text in text_strategy(),
    ) {
        let line = format!(":{nick}!{user}@{host} PRIVMSG {channel} :{text}");
        let msg = Message::parse(&line);

        let prefix = format!(":{nick}!{user}@{host}");
        prop_assert_eq!(msg.prefix(), Some(prefix.as_str()));
        prop_assert_eq!(msg.nickname(), Some(nick.as_str()));
        prop_assert_eq!(msg.command(), Some("PRIVMSG"));
        prop_assert_eq!(msg.middle(), Some(channel.as_str()));
        prop_assert_eq!(msg.body(), Some(text.as_str()));
        prop_assert_eq!(msg.to_string(), line);
    }

    /// What the bot sends as a reply parses back to the same target and text.
    #[test]
    fn privmsg_command_reparses(channel in channel_strategy(), text in text_strategy()) {
        let line = Command::Privmsg(channel.clone(), text.clone()).to_line();
        let msg = Message::parse(line.trim_end_matches("\r\n"));
        prop_assert_eq!(msg.middle(), Some(channel.as_str()));
        prop_assert_eq!(msg.body(), Some(text.as_str()));
    }
}
