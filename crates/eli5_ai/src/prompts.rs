//! Fixed model instructions. Prompts keep the contract explicit so model
//! output stays usable without post-processing beyond readability scoring.

pub fn eli5_prompt(source_text: &str) -> String {
    format!(
        r#"You are explaining a topic to a five-year-old (ELI5).

Rules (non-negotiable):
1) First think step by step about which ideas in the source text matter most to a small child, then write your answer.
2) Use short sentences and very simple words. No jargon.
3) Do not add facts that are not in the source text.
4) Return only the explanation, with no preamble and no headings.

Source text:
{source_text}
"#
    )
}

pub fn refine_prompt(explanation: &str) -> String {
    format!(
        r#"Make this even simpler than the following text. It is still too hard for a five-year-old.

Rules (non-negotiable):
1) Think step by step about which words and sentences are still too hard, then rewrite.
2) Shorter sentences, smaller words. Keep the meaning.
3) Return only the rewritten explanation, nothing else.

Text:
{explanation}
"#
    )
}

pub fn jargon_prompt(term: &str) -> String {
    format!(
        r#"Explain the jargon term below in one simple sentence, like you're talking to a five-year-old.

Rules (non-negotiable):
1) Exactly one sentence.
2) No other jargon in the definition.
3) Return only the sentence.

Term: {term}
"#
    )
}

pub fn factual_example_prompt(topic: &str, concept: &str) -> String {
    format!(
        r#"Give 1-2 SIMPLE, FACTUAL, REAL-WORLD examples of the topic below. Do NOT provide analogies or metaphorical comparisons; only list actual named instances or types.

Rules (non-negotiable):
1) Examples must suit a five-year-old: very short, concrete, easy to understand.
2) Name real things (for "Volcanoes": "Mount Fuji in Japan", not "a volcano is like a shaken soda bottle").
3) Return only the example sentences.

Topic: {topic}

Context (a simplified core idea, for reference only):
{concept}
"#
    )
}
