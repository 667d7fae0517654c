//! Interactive token REPL
//!
//! Line-oriented dispatch over the same `Command` mapping the subcommands
//! use. Bad input reprompts instead of exiting; only `exit` (or EOF) leaves
//! the loop.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use ble_kamigami_protocol::{Command, LightColor, encode_raw_hex, encode_raw_numeric};
use kamigami_link::PacketSink;

use crate::error::CliError;
use crate::output;

const HELP_TEXT: &str = "\
Commands:
    rawnum <n>...        Send raw decimal byte values.
                         Ex: `rawnum 3 63 63` turns the motors to full forward.
    rawhex <0x..>...     Send raw hex byte values.
                         Ex: `rawhex 0x3 0x3f 0x3f` turns the motors to full forward.
    motors <left> <right>
                         Set motor speeds (-63..=63).
    lights <r> <g> <b>   Set the light color (0..=255 per channel).
    ir                   Emit an infrared code.
    shutdown             Shut the robot down.
    testmode <speed>     Enter hardware test mode at the given speed.
    help                 Show this help.
    exit                 Leave the REPL.";

/// What one input line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplAction {
    Frame { label: &'static str, frame: Vec<u8> },
    Help,
    Exit,
    Empty,
}

fn parse_int(token: &str) -> Result<i32, CliError> {
    token
        .parse::<i32>()
        .map_err(|_| CliError::Usage(format!("Not a number: {token}")))
}

fn parse_ints(tokens: &[&str]) -> Result<Vec<i32>, CliError> {
    tokens.iter().map(|t| parse_int(t)).collect()
}

/// Evaluates one input line to an action. Pure; the caller owns the sink.
///
/// # Errors
///
/// Returns [`CliError::Usage`] for wrong arity or unparsable numbers,
/// [`CliError::UnknownCommand`] for an unrecognized verb, and protocol
/// validation errors unchanged.
pub fn eval_line(line: &str) -> Result<ReplAction, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&verb, args)) = tokens.split_first() else {
        return Ok(ReplAction::Empty);
    };

    match verb {
        "help" => Ok(ReplAction::Help),
        "exit" => Ok(ReplAction::Exit),
        "rawnum" => {
            let frame = encode_raw_numeric(&parse_ints(args)?)?;
            Ok(ReplAction::Frame {
                label: "raw",
                frame,
            })
        }
        "rawhex" => {
            let frame = encode_raw_hex(args)?;
            Ok(ReplAction::Frame {
                label: "raw",
                frame,
            })
        }
        "motors" => {
            let &[left, right] = args else {
                return Err(CliError::Usage(
                    "Please specify a left and right motor speed.".to_string(),
                ));
            };
            let command = Command::Motor {
                left: parse_int(left)?,
                right: parse_int(right)?,
            };
            Ok(ReplAction::Frame {
                label: "motor",
                frame: command.encode()?,
            })
        }
        "lights" => {
            let &[r, g, b] = args else {
                return Err(CliError::Usage(
                    "Please specify r, g, and b values.".to_string(),
                ));
            };
            let command = Command::Light(LightColor::Channels {
                r: parse_int(r)?,
                g: parse_int(g)?,
                b: parse_int(b)?,
            });
            Ok(ReplAction::Frame {
                label: "light",
                frame: command.encode()?,
            })
        }
        "ir" => Ok(ReplAction::Frame {
            label: "infrared",
            frame: Command::Infrared.encode()?,
        }),
        "shutdown" => Ok(ReplAction::Frame {
            label: "shutdown",
            frame: Command::Shutdown.encode()?,
        }),
        "testmode" => {
            let &[speed] = args else {
                return Err(CliError::Usage(
                    "Please specify a testmode speed.".to_string(),
                ));
            };
            let command = Command::TestMode {
                speed: parse_int(speed)?,
            };
            Ok(ReplAction::Frame {
                label: "test mode",
                frame: command.encode()?,
            })
        }
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}

/// Runs the REPL until `exit` or EOF, sending each frame to the sink.
///
/// # Errors
///
/// Only sink failures abort the loop; input errors reprompt.
pub async fn run(sink: &mut dyn PacketSink) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, ">>> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match eval_line(&line) {
            Ok(ReplAction::Frame { label, frame }) => {
                sink.send(&frame).await?;
                output::print_frame_sent(label, &frame);
            }
            Ok(ReplAction::Help) => println!("{HELP_TEXT}"),
            Ok(ReplAction::Exit) => break,
            Ok(ReplAction::Empty) => {}
            Err(err) => output::print_error(&err.into()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kamigami_link::mock::MockSink;

    #[test]
    fn test_eval_matches_typed_api() {
        let action = eval_line("motors 10 10").expect("eval");
        assert_eq!(
            action,
            ReplAction::Frame {
                label: "motor",
                frame: vec![0x03, 0x0A, 0x0A]
            }
        );

        let action = eval_line("lights 255 0 0").expect("eval");
        assert_eq!(
            action,
            ReplAction::Frame {
                label: "light",
                frame: vec![0x02, 0xFF, 0x00, 0x00]
            }
        );

        let action = eval_line("rawhex 0x3 0x3f 0x3f").expect("eval");
        assert_eq!(
            action,
            ReplAction::Frame {
                label: "raw",
                frame: vec![0x03, 0x3F, 0x3F]
            }
        );
    }

    #[test]
    fn test_eval_arity_errors_reprompt() {
        assert!(matches!(eval_line("motors 10"), Err(CliError::Usage(_))));
        assert!(matches!(eval_line("lights 1 2"), Err(CliError::Usage(_))));
        assert!(matches!(eval_line("testmode"), Err(CliError::Usage(_))));
    }

    #[test]
    fn test_eval_unknown_and_control() {
        assert!(matches!(
            eval_line("dance"),
            Err(CliError::UnknownCommand(verb)) if verb == "dance"
        ));
        assert_eq!(eval_line("help").expect("eval"), ReplAction::Help);
        assert_eq!(eval_line("exit").expect("eval"), ReplAction::Exit);
        assert_eq!(eval_line("   ").expect("eval"), ReplAction::Empty);
    }

    #[test]
    fn test_eval_propagates_validation() {
        assert!(matches!(
            eval_line("motors 64 0"),
            Err(CliError::Protocol(_))
        ));
        assert!(matches!(eval_line("rawhex 3f"), Err(CliError::Protocol(_))));
    }

    #[tokio::test]
    async fn test_frames_reach_the_sink() {
        let mut sink = MockSink::new();

        for line in ["shutdown", "motors 5 7"] {
            if let ReplAction::Frame { frame, .. } = eval_line(line).expect("eval") {
                sink.send(&frame).await.expect("send");
            }
        }

        assert_eq!(
            sink.get_write_history(),
            vec![vec![0x01], vec![0x03, 0x05, 0x07]]
        );
    }
}
