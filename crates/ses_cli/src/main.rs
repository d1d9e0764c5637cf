//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise `ses_core` end to end without a host application.
//! - Print a deterministic environment snapshot for quick sanity checks.
//!
//! Usage: `ses_cli [config.json]`

use ses_core::{CoreConfig, CoreResult, MethodTable, Owner, ScriptEnvironment, ScriptVersion};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(snapshot) => {
            println!("ses_core version={}", ses_core::core_version());
            println!("{snapshot}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ses_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<String, Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => CoreConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => CoreConfig::default(),
    };
    let mut environment = ScriptEnvironment::with_config(config);
    load_demo_script(&mut environment)?;
    Ok(environment.snapshot_json()?)
}

fn load_demo_script(environment: &mut ScriptEnvironment) -> CoreResult<()> {
    let owner = Owner::named("Scene_Map");
    let mut host = MethodTable::new();
    host.define(&owner, "start");
    host.define(&owner, "update");

    let script = environment.describe("Demo_Script", 1.0);
    environment.registry_mut().enter(script);
    environment
        .registry_mut()
        .require([("Core", ScriptVersion::new(1.0))])?;

    let mut hook = environment.hook(&host);
    hook.alias_created(&owner, "demo_start", "start");
    hook.overwrite(&owner, None)?;
    hook.method_defined(&owner, "update")?;
    log::debug!("event=demo_load module=cli status=ok");
    Ok(())
}
