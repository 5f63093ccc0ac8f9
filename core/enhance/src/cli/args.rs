use crate::domain::{EnhanceCommand, UserPrompt};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::{ModelName, ProviderName};
use common::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -L / --list-profiles: 現在有効なプロファイル一覧を表示
    pub list_profiles: bool,
    pub profile: Option<ProviderName>,
    pub model: Option<ModelName>,
    /// -S / --instruction: システム指示を差し替える（未指定なら既定のメタプロンプト）
    pub instruction: Option<String>,
    pub prompt_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            list_profiles: false,
            profile: None,
            model: None,
            instruction: None,
            prompt_args: Vec::new(),
        }
    }
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("enhance")
        .about("Rewrite a rough prompt into a clearer, more specific one via the LLM")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list-profiles")
                .short('L')
                .long("list-profiles")
                .help("List currently available provider profiles")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("profile")
                .short('p')
                .long("profile")
                .value_name("profile")
                .help("Specify LLM profile (gemini, echo, or a profiles.json entry)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Specify model name (e.g. gemini-2.0-flash)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("instruction")
                .short('S')
                .long("instruction")
                .value_name("instruction")
                .help("Override the enhancement system instruction for this call")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("positional")
                .index(1)
                .help("The prompt to enhance")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let help = matches.get_flag("help");
    let list_profiles = matches.get_flag("list-profiles");
    let profile = matches
        .get_one::<String>("profile")
        .map(|s| ProviderName::new(s.clone()));
    let model = matches
        .get_one::<String>("model")
        .map(|s| ModelName::new(s.clone()));
    let instruction = matches.get_one::<String>("instruction").cloned();
    let prompt_args: Vec<String> = matches
        .get_many::<String>("positional")
        .map(|i| i.cloned().collect())
        .unwrap_or_default();

    Config {
        help,
        list_profiles,
        profile,
        model,
        instruction,
        prompt_args,
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    emit_fallback_completion(shell);
}

fn emit_fallback_completion(shell: Shell) {
    let opts = "-h --help -L --list-profiles -p --profile -m --model -S --instruction --generate";
    match shell {
        Shell::Bash => {
            println!(
                r#"# Fallback completion for enhance
_enhance() {{
  local cur="${{COMP_WORDS[COMP_CWORD]}}"
  COMPREPLY=($(compgen -W "{opts}" -- "$cur"))
}}
complete -F _enhance enhance
"#,
                opts = opts
            );
        }
        Shell::Zsh => {
            println!(
                r#"# Fallback completion for enhance
#compdef enhance
local -a reply
reply=({opts})
_describe 'enhance' reply
"#,
                opts = opts
            );
        }
        Shell::Fish => {
            println!(
                r#"# Fallback completion for enhance
complete -c enhance -l help -s h -d "Show help"
complete -c enhance -l list-profiles -s L -d "List profiles"
complete -c enhance -l profile -s p -d "LLM profile" -r
complete -c enhance -l model -s m -d "Model name" -r
complete -c enhance -l instruction -s S -d "System instruction" -r
complete -c enhance -l generate -d "Generate completion script" -r -a "bash zsh fish"
"#
            );
        }
        _ => {}
    }
}

/// Config を EnhanceCommand に変換する
pub fn config_to_command(config: Config) -> EnhanceCommand {
    if config.help {
        return EnhanceCommand::Help;
    }

    if config.list_profiles {
        return EnhanceCommand::ListProfiles;
    }

    let prompt = UserPrompt::new(config.prompt_args.join(" "));
    EnhanceCommand::Enhance {
        profile: config.profile,
        model: config.model,
        instruction: config.instruction,
        prompt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.help);
        assert!(!config.list_profiles);
        assert!(config.profile.is_none());
        assert!(config.model.is_none());
        assert!(config.instruction.is_none());
        assert_eq!(config.prompt_args.len(), 0);
    }

    #[test]
    fn test_parse_args_no_args() {
        let args = vec!["enhance".to_string()];
        let config = parse_args_from(&args).unwrap();
        assert!(!config.help);
        assert_eq!(config.prompt_args.len(), 0);
    }

    #[test]
    fn test_parse_args_help_short() {
        let args = vec!["enhance".to_string(), "-h".to_string()];
        let config = parse_args_from(&args).unwrap();
        assert!(config.help);
    }

    #[test]
    fn test_parse_args_help_long() {
        let args = vec!["enhance".to_string(), "--help".to_string()];
        let config = parse_args_from(&args).unwrap();
        assert!(config.help);
    }

    #[test]
    fn test_parse_args_unknown_option() {
        let args = vec!["enhance".to_string(), "--unknown".to_string()];
        let result = parse_args_from(&args);
        assert!(result.is_err(), "unknown long option must be rejected");
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_parse_args_unknown_option_short() {
        let args = vec!["enhance".to_string(), "-x".to_string()];
        let result = parse_args_from(&args);
        assert!(result.is_err(), "unknown short option -x must be rejected");
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_parse_args_prompt_words() {
        let args = vec![
            "enhance".to_string(),
            "write".to_string(),
            "a".to_string(),
            "poem".to_string(),
        ];
        let config = parse_args_from(&args).unwrap();
        assert_eq!(config.prompt_args.len(), 3);
        assert_eq!(config.prompt_args[0], "write");
        assert_eq!(config.prompt_args[2], "poem");
    }

    #[test]
    fn test_parse_args_profile_short() {
        let args = vec!["enhance".to_string(), "-p".to_string(), "gemini".to_string()];
        let config = parse_args_from(&args).unwrap();
        assert_eq!(config.profile.as_ref().map(|p| p.as_ref()), Some("gemini"));
    }

    #[test]
    fn test_parse_args_profile_long() {
        let args = vec![
            "enhance".to_string(),
            "--profile".to_string(),
            "echo".to_string(),
        ];
        let config = parse_args_from(&args).unwrap();
        assert_eq!(config.profile.as_ref().map(|p| p.as_ref()), Some("echo"));
    }

    #[test]
    fn test_parse_args_profile_requires_arg() {
        let args = vec!["enhance".to_string(), "-p".to_string()];
        let result = parse_args_from(&args);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("argument") || err.to_string().contains("required"));
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_parse_args_profile_with_prompt() {
        let args = vec![
            "enhance".to_string(),
            "-p".to_string(),
            "echo".to_string(),
            "Hello".to_string(),
        ];
        let config = parse_args_from(&args).unwrap();
        assert_eq!(config.profile.as_ref().map(|p| p.as_ref()), Some("echo"));
        assert_eq!(config.prompt_args, vec!["Hello".to_string()]);
    }

    #[test]
    fn test_parse_args_model_short() {
        let args = vec![
            "enhance".to_string(),
            "-m".to_string(),
            "gemini-2.0-flash".to_string(),
        ];
        let config = parse_args_from(&args).unwrap();
        assert_eq!(
            config.model.as_ref().map(|m| m.as_ref()),
            Some("gemini-2.0-flash")
        );
    }

    #[test]
    fn test_parse_args_model_requires_arg() {
        let args = vec!["enhance".to_string(), "-m".to_string()];
        let result = parse_args_from(&args);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_parse_args_instruction() {
        let args = vec![
            "enhance".to_string(),
            "-S".to_string(),
            "Rewrite as haiku.".to_string(),
            "Hello".to_string(),
        ];
        let config = parse_args_from(&args).unwrap();
        assert_eq!(config.instruction.as_deref(), Some("Rewrite as haiku."));
        assert_eq!(config.prompt_args, vec!["Hello".to_string()]);
    }

    #[test]
    fn test_parse_args_instruction_long() {
        let args = vec![
            "enhance".to_string(),
            "--instruction".to_string(),
            "Answer in Japanese.".to_string(),
            "こんにちは".to_string(),
        ];
        let config = parse_args_from(&args).unwrap();
        assert_eq!(config.instruction.as_deref(), Some("Answer in Japanese."));
        assert_eq!(config.prompt_args, vec!["こんにちは".to_string()]);
    }

    #[test]
    fn test_parse_args_list_profiles_short() {
        let args = vec!["enhance".to_string(), "-L".to_string()];
        let config = parse_args_from(&args).unwrap();
        assert!(config.list_profiles);
    }

    #[test]
    fn test_parse_args_list_profiles_long() {
        let args = vec!["enhance".to_string(), "--list-profiles".to_string()];
        let config = parse_args_from(&args).unwrap();
        assert!(config.list_profiles);
    }

    #[test]
    fn test_config_to_command_help() {
        let config = Config {
            help: true,
            ..Default::default()
        };
        let cmd = config_to_command(config);
        assert!(matches!(cmd, EnhanceCommand::Help));
    }

    #[test]
    fn test_config_to_command_list_profiles() {
        let config = Config {
            list_profiles: true,
            ..Default::default()
        };
        let cmd = config_to_command(config);
        assert!(matches!(cmd, EnhanceCommand::ListProfiles));
    }

    #[test]
    fn test_config_to_command_joins_prompt_words() {
        let config = Config {
            prompt_args: vec!["write".to_string(), "a".to_string(), "poem".to_string()],
            ..Default::default()
        };
        match config_to_command(config) {
            EnhanceCommand::Enhance { prompt, .. } => {
                assert_eq!(prompt.as_str(), "write a poem");
            }
            other => panic!("expected Enhance, got {:?}", other),
        }
    }
}
