//! Prompt templates for the duel

use crate::extraction::AnswerGrammar;

/// Templates for generating prompts on each side of the duel
pub struct DuelPromptTemplate;

impl DuelPromptTemplate {
    /// Instructional prompt sent to the generator.
    ///
    /// Deterministic for a given grammar. The answer line format in the
    /// template follows the grammar so that [`crate::extract_question`] can
    /// parse the reply.
    pub fn generation(grammar: AnswerGrammar) -> String {
        let answer_format = Self::answer_format(grammar);
        format!(
            r#"You are taking part in an intelligence duel against another AI. Your job is to write one challenging question. It may come from any field or kind of intelligence: logic, mathematics, programming, history, language, social or emotional reasoning. Nothing is off limits.

Your goal is a question hard enough that your opponent fails, yet one that you can answer reliably yourself.

How a round works:

1. Question generation
   - You write one new question.
   - Its answer MUST be a single word, letter or number.
   - The question MUST tell the reader how to format the answer.
   - The answer MUST be written exactly as '{answer_format}'.
   - You must be able to solve your own question consistently: it will be put to you several times with no memory of writing it, and every answer must be correct.
2. Opponent's turn
   - Your opponent attempts the question.
   - They only succeed if they answer correctly several times in a row.
3. Iteration
   - Roles alternate between rounds until the duel ends.

Reply using exactly this template:

Question: [your question, including the instruction to answer as '{answer_format}']
Answer: {answer_placeholder}
Regex: [a regular expression that accepts the correct answer line]

The regular expression should accept the exact format '{answer_format}', tolerate differences in capitalisation and surrounding whitespace, and reject wrong answers."#,
            answer_format = answer_format,
            answer_placeholder = Self::answer_placeholder(grammar),
        )
    }

    fn answer_format(grammar: AnswerGrammar) -> &'static str {
        if grammar.expects_brackets() {
            "Answer: [ACTUAL ANSWER]"
        } else {
            "Answer: ACTUAL ANSWER"
        }
    }

    fn answer_placeholder(grammar: AnswerGrammar) -> &'static str {
        if grammar.expects_brackets() {
            "[ACTUAL ANSWER]"
        } else {
            "ACTUAL ANSWER"
        }
    }
}
