//! Parsed commands applied to a simulated device.

use plug417_command::{parse, ParsedCommand};
use plug417_protocol::*;
use plug417_session::mock::MockDevice;
use plug417_session::{Session, SessionConfig, SessionError};

fn settings(text: &str) -> Vec<(Attribute, u32)> {
    match parse(text).expect("command should parse") {
        ParsedCommand::Settings(settings) => settings,
        ParsedCommand::Help(_) => panic!("unexpected help for {}", text),
    }
}

fn session() -> Session<MockDevice> {
    let config = SessionConfig {
        timeout_ms: 50,
        ..SessionConfig::default()
    };
    Session::new(MockDevice::new(), config)
}

#[test]
fn test_icon_command_reaches_indexed_options() {
    let mut session = session();
    session.set_all(&settings("icon:n=1:on:x=100:y=20:t=2")).unwrap();

    let sent: Vec<(u8, u8, u8, u32)> = session
        .transport()
        .commands()
        .iter()
        .map(|c| (c.functional, c.page, c.option, c.value))
        .collect();
    assert_eq!(
        sent,
        vec![
            (FUNCTIONAL_APPLICATION, PAGE_SMALL_ICON, 5, 1),
            (FUNCTIONAL_APPLICATION, PAGE_SMALL_ICON, 7, 100),
            (FUNCTIONAL_APPLICATION, PAGE_SMALL_ICON, 8, 20),
            (FUNCTIONAL_APPLICATION, PAGE_SMALL_ICON, OPTION_SMALL_ICON_TRANSPARENCY, 2),
        ]
    );
}

#[test]
fn test_out_of_range_value_sends_nothing() {
    let mut session = session();
    let result = session.set_all(&settings("digit:port=1:c=9"));

    assert!(matches!(
        result,
        Err(SessionError::Protocol(ProtocolError::OutOfRange { value: 9, .. }))
    ));
    assert!(session.transport().commands().is_empty());
}

#[test]
fn test_temperature_command() {
    let mut session = session();
    session.set_all(&settings("temp:s=2:c=-15:g=1")).unwrap();

    let commands = session.transport().commands();
    assert_eq!(commands.len(), 3);
    assert_eq!(commands[0].option, OPTION_TEMPERATURE_SHOW);
    assert_eq!(commands[1].value as i32, -15);
    assert_eq!(commands[2].option, OPTION_TEMPERATURE_RANGE);
}
