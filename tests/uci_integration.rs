use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

use chess_rules::uci::try_parse_position_command;

#[test]
fn uci_smoke_test_returns_legal_move() {
    let exe = env!("CARGO_BIN_EXE_chess_rules");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn engine binary");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let mut reader = BufReader::new(stdout);

    stdin
        .write_all(b"uci\nisready\nposition startpos moves e2e4\ngo depth 2\n")
        .unwrap();

    let mut output = String::new();
    let mut bestmove_line = None;
    loop {
        let mut line = String::new();
        let bytes = reader.read_line(&mut line).expect("read failed");
        if bytes == 0 {
            break;
        }
        output.push_str(&line);
        if line.starts_with("bestmove") {
            bestmove_line = Some(line);
            break;
        }
    }

    stdin.write_all(b"quit\n").unwrap();
    let _ = child.wait();

    assert!(output.contains("uciok"));
    assert!(output.contains("readyok"));
    assert!(output.contains("info depth 2 score"));

    let bestmove = bestmove_line.expect("no bestmove found");
    let parts: Vec<&str> = bestmove.split_whitespace().collect();
    assert!(parts.len() >= 2, "bestmove missing move: {}", bestmove);
    let mv = parts[1];
    assert_ne!(mv, "0000", "engine returned null move");

    let board = try_parse_position_command(&["position", "startpos", "moves", "e2e4"]).unwrap();
    assert!(
        board.parse_uci_move(mv).is_ok(),
        "bestmove not legal in position: {}",
        mv
    );
}

#[test]
fn uci_handles_setoption_perft_and_display() {
    let exe = env!("CARGO_BIN_EXE_chess_rules");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn engine binary");

    let input = b"uci\nsetoption name Depth value 1\nposition fen 8/8/8/8/8/8/8/K1k5 w - -\nposition startpos moves e2e5\nperft 2\nd\ngo\nquit\n";
    child.stdin.as_mut().unwrap().write_all(input).unwrap();

    let output = child.wait_with_output().expect("failed to read output");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("option name Depth"));
    assert!(stdout.contains("info string perft depth 2 nodes 3 "));
    // The illegal move list is rejected and the previous position kept
    assert!(stdout.contains("8/8/8/8/8/8/8/K1k5 w - - 0 1"));
    assert!(stdout.contains("info depth 1 score"));
    assert!(stdout.contains("bestmove a1a2"));
}

#[test]
fn uci_exits_on_end_of_input() {
    let exe = env!("CARGO_BIN_EXE_chess_rules");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn engine binary");

    child.stdin.as_mut().unwrap().write_all(b"isready\n").unwrap();
    let output = child.wait_with_output().expect("failed to read output");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "readyok\n");
}
