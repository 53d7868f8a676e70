#[path = "../common/mod.rs"]
mod common;

use serial_tester::catalog::{BUILTIN_COMMANDS, Catalog};
use serial_tester::test_support::{mock_with_responses, spawn_scripted_peer};
use serial_tester::utils::parse_hex;
use serial_tester::{Runner, run};

#[test]
fn builtin_catalog_passes_against_recorded_replies() -> anyhow::Result<()> {
    let (addr, peer) = spawn_scripted_peer(common::builtin_passing_replies())?;
    let mut out = Vec::new();

    let summary = run(
        &common::target_for(addr),
        &Catalog::builtin_commands(),
        &Catalog::builtin_expected(),
        &mut out,
    )?;

    assert_eq!(summary.passed, BUILTIN_COMMANDS.len());
    assert_eq!(summary.failed, 0);

    let received = peer.join().unwrap();
    let commands = Catalog::builtin_commands();
    let sent_in_order: Vec<Vec<u8>> = commands
        .sorted_names()
        .into_iter()
        .map(|n| parse_hex(commands.get(n).unwrap()).unwrap())
        .collect();
    assert_eq!(received, sent_in_order);

    let text = common::output_text(out);
    assert!(text.starts_with("RUN\nTest 1: GPIO_READ_DIR [PASS]\nCommand: 000700050103001201\n"));
    assert!(text.contains("Test 11: MDIO_READ_8489_REG_2 [PASS]\n"));
    Ok(())
}

#[test]
fn builtin_catalog_flags_single_mismatch() {
    let mut replies = common::builtin_passing_replies();
    // GPIO_READ_LVL runs second
    replies[1] = vec![0x06, 0x00, 0x04, 0x01, 0x03, 0x00, 0x12, 0x00];
    let mut mock = mock_with_responses(replies);
    let commands = Catalog::builtin_commands();
    let expected = Catalog::builtin_expected();
    let mut out = Vec::new();

    let summary = Runner::new(&commands, &expected)
        .run(&mut mock, &mut out)
        .unwrap();

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.total(), BUILTIN_COMMANDS.len());
    let text = common::output_text(out);
    assert!(text.contains(
        "Test 2: GPIO_READ_LVL [FAIL]\nCommand: 000700050103001202\nResponse: 06000401030012\nExpected: 0600040103001201\n"
    ));
}
