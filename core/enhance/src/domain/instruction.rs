//! SystemInstruction と CombinedRequest の生成（Request Builder）
//!
//! プロセス開始後は不変。結合は純粋な文字列変換で、状態を持たない。

/// デフォルトの SystemInstruction（プロンプト強化用メタプロンプト）
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = r#"You are an expert AI prompt engineer. Your task is to transform a high-level user request into a detailed, structured, and comprehensive blueprint for another AI model. The goal is to create a prompt so clear and specific that the target AI can produce a high-quality, professional response on the first attempt, minimizing the need for further clarification.

Follow these steps for every user request:

1. **Analyze and Deconstruct**: Carefully break down the user's initial request. Identify the core objective, any implied context, and all explicit or implicit needs.

2. **Create a Structured Blueprint**: Generate a logical, step-by-step plan. This blueprint should be an itemized list of tasks and sub-tasks required to fulfill the request. Think of it as a professional project plan.

3. **Add Specificity and Technical Details**: For each task, enrich the description with crucial details. For code-related requests, specify the technology stack (e.g., Python, Node.js), frameworks (e.g., Flask, React), and other relevant libraries. For creative or writing tasks, define the tone, length, target audience, and desired format.

4. **Format the Output**: Present the final enhanced prompt using clear Markdown. Use bold headings and lists to make the blueprint easy to read and copy.

5. **Strict Constraint**: Do not perform the task described by the user; your sole function is to generate the enhanced prompt."#;

/// SystemInstruction（リモートモデルへの固定の変換指示）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInstruction(String);

impl SystemInstruction {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// SystemInstruction と UserPrompt を 1 つのリクエスト文字列に結合する
    ///
    /// 結果は必ず SystemInstruction そのもので始まり、プロンプトで終わる。
    pub fn combined_request(&self, prompt: &str) -> String {
        format!("{}\n{}", self.0, prompt)
    }
}

impl Default for SystemInstruction {
    fn default() -> Self {
        Self(DEFAULT_SYSTEM_INSTRUCTION.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_request_prefix_invariant() {
        let instruction = SystemInstruction::default();
        let request = instruction.combined_request("write a function to sort a list");
        assert!(request.starts_with(DEFAULT_SYSTEM_INSTRUCTION));
        assert!(request.ends_with("write a function to sort a list"));
    }

    #[test]
    fn test_combined_request_separator_is_newline() {
        let instruction = SystemInstruction::new("Rewrite politely.");
        let request = instruction.combined_request("gimme code");
        assert_eq!(request, "Rewrite politely.\ngimme code");
    }

    #[test]
    fn test_default_instruction_never_performs_the_task() {
        // デフォルト指示は「タスクを実行しない」制約を含む
        assert!(DEFAULT_SYSTEM_INSTRUCTION.contains("Do not perform the task"));
        assert!(DEFAULT_SYSTEM_INSTRUCTION.contains("Markdown"));
    }

    #[test]
    fn test_custom_instruction_is_injectable() {
        let instruction = SystemInstruction::new("Summarize in one line.");
        let request = instruction.combined_request("hello");
        assert!(request.starts_with("Summarize in one line."));
        assert!(!request.contains("prompt engineer"));
    }
}
