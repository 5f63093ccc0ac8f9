use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::NoopLog;
use common::domain::HomeDir;
use common::error::Error;
use common::llm::factory::ProviderType;
use common::llm::resolver::ResolvedProvider;
use common::ports::outbound::EnvResolver;

use crate::adapter::{DriverLlmCompletion, StubLlm};
use crate::domain::instruction::DEFAULT_SYSTEM_INSTRUCTION;
use crate::domain::{SystemInstruction, UserPrompt};
use crate::usecase::EnhanceUseCase;

fn use_case_with(stub: Arc<StubLlm>) -> EnhanceUseCase {
    EnhanceUseCase::new(stub, Arc::new(NoopLog))
}

#[test]
fn test_enhance_returns_stub_text_unchanged() {
    let stub = Arc::new(StubLlm::text("A clearer, more specific prompt."));
    let use_case = use_case_with(Arc::clone(&stub));
    let result = use_case.run(
        &SystemInstruction::default(),
        &UserPrompt::new("write a poem"),
    );
    // 応答テキストは加工せずそのまま返す
    assert_eq!(result.unwrap(), "A clearer, more specific prompt.");
    assert_eq!(stub.call_count(), 1);
}

#[test]
fn test_enhance_request_is_instruction_then_prompt() {
    let stub = Arc::new(StubLlm::text("ok"));
    let use_case = use_case_with(Arc::clone(&stub));
    use_case
        .run(
            &SystemInstruction::default(),
            &UserPrompt::new("write a poem"),
        )
        .unwrap();
    let request = stub.last_request().unwrap();
    assert!(
        request.starts_with(DEFAULT_SYSTEM_INSTRUCTION),
        "request must start with the fixed instruction"
    );
    assert!(request.ends_with("\nwrite a poem"));
}

#[test]
fn test_enhance_trims_prompt_before_building_request() {
    let stub = Arc::new(StubLlm::text("ok"));
    let use_case = use_case_with(Arc::clone(&stub));
    use_case
        .run(
            &SystemInstruction::default(),
            &UserPrompt::new("  write a poem \n"),
        )
        .unwrap();
    let request = stub.last_request().unwrap();
    assert!(request.ends_with("\nwrite a poem"));
}

#[test]
fn test_enhance_empty_prompt_rejected_without_call() {
    let stub = Arc::new(StubLlm::text("never used"));
    let use_case = use_case_with(Arc::clone(&stub));
    let err = use_case
        .run(&SystemInstruction::default(), &UserPrompt::new(""))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(err.to_string().contains("No prompt provided"));
    assert_eq!(err.exit_code(), 64);
    assert_eq!(stub.call_count(), 0, "no request may be sent for an empty prompt");
}

#[test]
fn test_enhance_whitespace_prompt_rejected_without_call() {
    let stub = Arc::new(StubLlm::text("never used"));
    let use_case = use_case_with(Arc::clone(&stub));
    let err = use_case
        .run(&SystemInstruction::default(), &UserPrompt::new("   \t\n "))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(stub.call_count(), 0);
}

#[test]
fn test_enhance_transport_error_propagates_verbatim() {
    let stub = Arc::new(StubLlm::failing(Error::http(
        "API error: Resource has been exhausted (e.g. check quota).",
    )));
    let use_case = use_case_with(Arc::clone(&stub));
    let err = use_case
        .run(
            &SystemInstruction::default(),
            &UserPrompt::new("write a poem"),
        )
        .unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    assert_eq!(
        err.to_string(),
        "API error: Resource has been exhausted (e.g. check quota)."
    );
    assert_eq!(stub.call_count(), 1);
}

#[test]
fn test_enhance_empty_response_error_propagates() {
    let stub = Arc::new(StubLlm::failing(Error::empty_response(
        "The model returned no content",
    )));
    let use_case = use_case_with(Arc::clone(&stub));
    let err = use_case
        .run(
            &SystemInstruction::default(),
            &UserPrompt::new("write a poem"),
        )
        .unwrap_err();
    assert!(matches!(err, Error::EmptyResponse(_)));
    assert_eq!(err.exit_code(), 74);
}

#[test]
fn test_enhance_custom_instruction_replaces_default() {
    let stub = Arc::new(StubLlm::text("ok"));
    let use_case = use_case_with(Arc::clone(&stub));
    let custom = SystemInstruction::new("Rewrite the prompt as a haiku request.");
    use_case
        .run(&custom, &UserPrompt::new("write a poem"))
        .unwrap();
    let request = stub.last_request().unwrap();
    assert!(request.starts_with("Rewrite the prompt as a haiku request."));
    assert!(!request.contains(DEFAULT_SYSTEM_INSTRUCTION));
}

// テスト用 EnvResolver（環境変数は HashMap で差し替え）
struct FakeEnvResolver {
    vars: HashMap<String, String>,
}

impl EnvResolver for FakeEnvResolver {
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        Ok(HomeDir::new(PathBuf::from("/tmp/enhance-test")))
    }

    fn resolve_profiles_config_path(&self) -> Result<PathBuf, Error> {
        Ok(PathBuf::from("/tmp/enhance-test/profiles.json"))
    }

    fn api_key(&self, env_name: &str) -> Option<String> {
        self.vars.get(env_name).cloned()
    }
}

#[test]
fn test_missing_api_key_fails_before_any_network_call() {
    let resolved = ResolvedProvider {
        profile_name: "gemini".to_string(),
        provider_type: ProviderType::Gemini,
        model: None,
        api_key_env: None,
    };
    let env = Arc::new(FakeEnvResolver {
        vars: HashMap::new(),
    });
    let completion = DriverLlmCompletion::new(resolved, None, env);
    let use_case = EnhanceUseCase::new(Arc::new(completion), Arc::new(NoopLog));
    let err = use_case
        .run(
            &SystemInstruction::default(),
            &UserPrompt::new("write a poem"),
        )
        .unwrap_err();
    assert!(matches!(err, Error::Env(_)));
    assert!(err
        .to_string()
        .contains("GEMINI_API_KEY environment variable is not set"));
    assert_eq!(err.exit_code(), 78);
}
