#[path = "../common/mod.rs"]
mod common;

use std::net::TcpListener;

use serial_tester::catalog::Catalog;
use serial_tester::test_support::{padded, spawn_scripted_peer};
use serial_tester::{Error, RunSummary, run};

#[test]
fn padded_echo_passes() -> anyhow::Result<()> {
    let (addr, peer) = spawn_scripted_peer(vec![padded(&[0x00, 0xff, 0x00], 256)])?;
    let expected = Catalog::from_pairs([("A", "ff")]);
    let mut out = Vec::new();

    let summary = run(&common::target_for(addr), &common::single_command(), &expected, &mut out)?;

    assert_eq!(summary, RunSummary { passed: 1, failed: 0 });
    assert_eq!(peer.join().unwrap(), vec![vec![0x00, 0xff]]);
    assert_eq!(
        common::output_text(out),
        "RUN\nTest 1: A [PASS]\nCommand: 00FF\nResponse: ff\nPassed: 1, Failed: 0, Total: 1\n"
    );
    Ok(())
}

#[test]
fn mismatch_reports_expected_separately() -> anyhow::Result<()> {
    let (addr, peer) = spawn_scripted_peer(vec![vec![0x00, 0x11]])?;
    let expected = Catalog::from_pairs([("A", "00ff")]);
    let mut out = Vec::new();

    let summary = run(&common::target_for(addr), &common::single_command(), &expected, &mut out)?;
    peer.join().unwrap();

    assert_eq!(summary, RunSummary { passed: 0, failed: 1 });
    let text = common::output_text(out);
    assert!(text.contains("Test 1: A [FAIL]\n"));
    assert!(text.contains("Response: 11\n"));
    assert!(text.contains("Expected: 00ff\n"));
    Ok(())
}

#[test]
fn names_run_in_lexicographic_order() -> anyhow::Result<()> {
    let (addr, peer) = spawn_scripted_peer(vec![vec![0x0a], vec![0x0b]])?;
    let commands = Catalog::from_pairs([("B_TEST", "0B"), ("A_TEST", "0A")]);
    let expected = Catalog::from_pairs([("A_TEST", "0a"), ("B_TEST", "0b")]);
    let mut out = Vec::new();

    let summary = run(&common::target_for(addr), &commands, &expected, &mut out)?;

    assert_eq!(summary.passed, 2);
    assert_eq!(peer.join().unwrap(), vec![vec![0x0a], vec![0x0b]]);
    let text = common::output_text(out);
    let a = text.find("Test 1: A_TEST").unwrap();
    let b = text.find("Test 2: B_TEST").unwrap();
    assert!(a < b);
    Ok(())
}

#[test]
fn refused_connection_prints_no_test_line() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let mut out = Vec::new();

    let err = run(
        &common::target_for(addr),
        &common::single_command(),
        &Catalog::from_pairs([("A", "ff")]),
        &mut out,
    )
    .unwrap_err();

    assert!(matches!(err, Error::Connection { .. }));
    assert_eq!(common::output_text(out), "RUN\n");
}

#[test]
fn missing_expectation_does_not_crash() -> anyhow::Result<()> {
    let (addr, peer) = spawn_scripted_peer(vec![vec![0x22], padded(&[], 16)])?;
    let commands = Catalog::from_pairs([("A", "01"), ("B", "02")]);
    let expected = Catalog::default();
    let mut out = Vec::new();

    let summary = run(&common::target_for(addr), &commands, &expected, &mut out)?;
    peer.join().unwrap();

    assert_eq!(summary, RunSummary { passed: 1, failed: 1 });
    let text = common::output_text(out);
    assert!(text.contains("Test 1: A [FAIL]\nCommand: 01\nResponse: 22\nExpected: \n"));
    assert!(text.contains("Test 2: B [PASS]\n"));
    Ok(())
}

#[test]
fn peer_hangup_aborts_run() -> anyhow::Result<()> {
    // one reply scripted for two commands; the peer closes after the first
    let (addr, peer) = spawn_scripted_peer(vec![vec![0x01]])?;
    let commands = Catalog::from_pairs([("A", "01"), ("B", "02")]);
    let expected = Catalog::from_pairs([("A", "01"), ("B", "02")]);
    let mut out = Vec::new();

    let err = run(&common::target_for(addr), &commands, &expected, &mut out).unwrap_err();
    peer.join().unwrap();

    assert!(matches!(err, Error::ConnectionClosed | Error::Io(_)));
    let text = common::output_text(out);
    assert!(text.contains("Test 1: A [PASS]"));
    assert!(!text.contains("Test 2"));
    Ok(())
}

#[test]
fn missing_expectation_is_warned() {
    common::logging::install();
    let commands = Catalog::from_pairs([("UNRECORDED_GPIO", "01"), ("RECORDED_GPIO", "02")]);
    let expected = Catalog::from_pairs([("RECORDED_GPIO", "02")]);
    let mut mock = serial_tester::test_support::mock_with_responses(vec![vec![0x02], vec![]]);
    let mut out = Vec::new();

    let summary = serial_tester::Runner::new(&commands, &expected)
        .run(&mut mock, &mut out)
        .unwrap();

    assert_eq!(summary, RunSummary { passed: 2, failed: 0 });
    let warnings = common::logging::warnings_mentioning("UNRECORDED_GPIO");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("comparing against empty"));
    assert!(common::logging::warnings_mentioning("for RECORDED_GPIO").is_empty());
}
