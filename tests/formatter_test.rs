#![allow(missing_docs)]

use std::path::Path;
use tempfile::TempDir;

use deployfmt::{
    format_account, ColorMode, DeploySecrets, Formatter, FormatterConfig, Level, MapEnv, NoDelay,
    Transcript,
};

/// Integration test: a full deploy run printed through a configured formatter.
///
/// config → formatter → section/steps/command/status → sink and transcript.
#[test]
fn test_deploy_run_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let transcript_path = temp_dir.path().join(".deploy").join("output.jsonl");
    let config = FormatterConfig::parse(&format!(
        r#"
[output]
color = "always"
transcript = '{}'

[paths]
root = "/srv/protocol"
"#,
        transcript_path.display()
    ))
    .unwrap();

    let env = MapEnv::new()
        .with("PRIVATE_KEY", "0xfeedface")
        .with("RPC_URL", "https://eth-sepolia.g.alchemy.com/v2/SEPKEY");
    let secrets = DeploySecrets::from_env(&env);

    let mut fmt = Formatter::from_config(&config, Vec::new())
        .unwrap()
        .with_env(env)
        .with_delay(NoDelay);

    fmt.print_section("Deploying to sepolia");
    fmt.print_step("Running forge script");
    let echoed = fmt.print_command(
        &[
            "forge",
            "script",
            "/srv/protocol/script/FullDeployer.s.sol",
            "--rpc-url",
            "https://eth-sepolia.g.alchemy.com/v2/SEPKEY",
            "--private-key",
            "0xfeedface",
        ],
        Some(&secrets),
        Some(Path::new("/srv/protocol/script/FullDeployer.s.sol")),
        Some(Path::new("/srv/protocol")),
    );
    let deployer = format_account("0x423420Ae467df6e90291fd0252c0A8a637C1e03f");
    fmt.print_info(&format!("Deployer: {deployer}"));
    fmt.print_warning("Skipping verification");
    fmt.print_success("Deployment complete");

    assert_eq!(
        echoed,
        "forge script script/FullDeployer.s.sol \
         --rpc-url https://eth-sepolia.g.alchemy.com/v2/$ALCHEMY_API_KEY \
         --private-key $PRIVATE_KEY"
    );

    let out = String::from_utf8(fmt.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "\x1b[1;94m==> Deploying to sepolia\x1b[0m");
    assert_eq!(lines[2], format!("  {echoed}"));
    assert_eq!(lines[3], "    • Deployer: \x1b[96m0x42342...7C1e03f\x1b[0m");
    assert!(!out.contains("0xfeedface"));
    assert!(!out.contains("SEPKEY"));

    let entries = Transcript::new(&transcript_path).unwrap().read_all().unwrap();
    let levels: Vec<Level> = entries.iter().map(|e| e.level).collect();
    assert_eq!(
        levels,
        vec![
            Level::Section,
            Level::Step,
            Level::Command,
            Level::Info,
            Level::Warning,
            Level::Success,
        ]
    );
    assert!(entries.iter().all(|e| !e.message.contains("0xfeedface")));
}

#[test]
fn test_stock_formatter_never_panics_on_odd_input() {
    let mut fmt = Formatter::new(Vec::new())
        .with_color(ColorMode::Never)
        .with_env(MapEnv::new())
        .with_delay(NoDelay);

    fmt.print_info("");
    fmt.print_error("multi\nline");
    let echoed = fmt.print_command::<&str>(&[], Some(&DeploySecrets::default()), None, None);

    assert_eq!(echoed, "");
    assert_eq!(fmt.format_path("", Some(Path::new("/srv"))), "");
}

#[test]
fn test_free_functions_use_stock_formatter() {
    deployfmt::print_section("Deploying");
    deployfmt::print_subsection("Adapters");
    deployfmt::print_step("Broadcasting");
    deployfmt::print_info("Chain: 8453");
    deployfmt::print_success("Done");
    deployfmt::print_error("Reverted");
    deployfmt::print_warning("Retrying");

    let secrets = DeploySecrets {
        private_key: Some("0xfeedface".to_string()),
        ..DeploySecrets::default()
    };
    let echoed = deployfmt::print_command(
        &[
            "forge",
            "script",
            "/srv/protocol/script/Deploy.s.sol",
            "--private-key",
            "0xfeedface",
        ],
        Some(&secrets),
        Some(Path::new("/srv/protocol/script/Deploy.s.sol")),
        Some(Path::new("/srv/protocol")),
    );
    assert_eq!(
        echoed,
        "forge script script/Deploy.s.sol --private-key $PRIVATE_KEY"
    );

    assert_eq!(
        deployfmt::format_path(
            "/srv/protocol/env/base.json",
            Some(Path::new("/srv/protocol"))
        ),
        "env/base.json"
    );
    assert_eq!(
        deployfmt::format_path("/opt/other.json", Some(Path::new("/srv/protocol"))),
        "/opt/other.json"
    );
}

#[test]
fn test_free_format_account_colors_without_terminal() {
    assert_eq!(
        format_account("0x423420Ae467df6e90291fd0252c0A8a637C1e03f"),
        "\x1b[96m0x42342...7C1e03f\x1b[0m"
    );
}
