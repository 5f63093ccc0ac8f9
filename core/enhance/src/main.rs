mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;
use std::sync::Arc;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::llm::resolver::{load_profiles_config, resolve_provider};
use common::ports::outbound::{now_iso8601, LogLevel, LogRecord};
use domain::{EnhanceCommand, SystemInstruction};
use ports::inbound::UseCaseRunner;
use usecase::{EnhanceUseCase, ListProfilesUseCase};
use wiring::{wire, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config);
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command started".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                Some(m)
            },
        });

        let result: Result<i32, Error> = match cmd {
            EnhanceCommand::Help => {
                print_help();
                Ok(0)
            }
            EnhanceCommand::ListProfiles => {
                let use_case = ListProfilesUseCase::new(
                    Arc::clone(&self.app.fs),
                    Arc::clone(&self.app.env_resolver),
                );
                let (names, default) = use_case.run()?;
                for name in &names {
                    if default.as_deref() == Some(name.as_str()) {
                        println!("{} (default)", name);
                    } else {
                        println!("{}", name);
                    }
                }
                Ok(0)
            }
            EnhanceCommand::Enhance {
                profile,
                model,
                instruction,
                prompt,
            } => {
                let cfg = load_profiles_config(&*self.app.fs, &*self.app.env_resolver)?;
                let resolved = resolve_provider(profile.as_ref(), cfg.as_ref())?;
                let completion = Arc::new(adapter::DriverLlmCompletion::new(
                    resolved,
                    model,
                    Arc::clone(&self.app.env_resolver),
                ));
                let use_case = EnhanceUseCase::new(completion, Arc::clone(&self.app.logger));
                let system_instruction = instruction
                    .map(SystemInstruction::new)
                    .unwrap_or_default();
                let text = use_case.run(&system_instruction, &prompt)?;
                println!("{}", text);
                Ok(0)
            }
        };
        let code = result.as_ref().copied().unwrap_or(0);
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command finished".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                m.insert("exit_code".to_string(), serde_json::json!(code));
                Some(m)
            },
        });
        if let Err(ref e) = result {
            let _ = self.app.logger.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Error,
                message: e.to_string(),
                layer: Some("cli".to_string()),
                kind: Some("error".to_string()),
                fields: None,
            });
        }
        result
    }
}

fn cmd_name_for_log(cmd: &EnhanceCommand) -> &'static str {
    match cmd {
        EnhanceCommand::Help => "help",
        EnhanceCommand::ListProfiles => "list-profiles",
        EnhanceCommand::Enhance { .. } => "enhance",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("enhance: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match &outcome {
        ParseOutcome::Config(c) => c.clone(),
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(*shell);
            return Ok(0);
        }
    };
    let app = wire();
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: enhance [options] <prompt...>");
}

fn print_help() {
    println!("Usage: enhance [options] <prompt...>");
    println!("Options:");
    println!("  -h, --help                    Show this help message");
    println!("  -L, --list-profiles           List currently available provider profiles (from profiles.json + built-ins)");
    println!("  -p, --profile <profile>        Specify LLM profile (gemini, echo, or a profiles.json entry). Default: profiles.json default, or gemini if not set.");
    println!("  -m, --model <model>            Specify model name (e.g. gemini-2.0-flash). Default: profile default from profiles.json");
    println!("  -S, --instruction <instruction> Override the enhancement system instruction for this call");
    println!("  --generate <shell>             Generate shell completion script (bash, zsh, fish). Source the output to enable tab completion.");
    println!();
    println!("Environment:");
    println!("  GEMINI_API_KEY  API key for the built-in gemini profile (profiles.json entries may name another variable via api_key_env).");
    println!("  ENHANCE_HOME    Home directory. Profiles: $ENHANCE_HOME/profiles.json; logs: $ENHANCE_HOME/log/enhance.jsonl");
    println!("                 If unset, $XDG_CONFIG_HOME/enhance (e.g. ~/.config/enhance) is used.");
    println!();
    println!("Description:");
    println!("  Send the prompt to the LLM together with a fixed enhancement instruction");
    println!("  and print the rewritten, more specific prompt. The model is asked to");
    println!("  improve the prompt, not to perform the task it describes.");
    println!();
    println!("Examples:");
    println!("  enhance write a poem about autumn");
    println!("  enhance -p echo summarize this article");
    println!("  enhance -m gemini-2.0-flash \"fix my resume\"");
}
