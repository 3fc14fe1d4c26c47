//! Phrase concordance generator (C8): head selection, case×number product,
//! and the Russian adjective agreement rules (including the
//! animacy-dependent accusative).

use itertools::Itertools;

use crate::morph::{tag_grammeme, tag_pos, MorphEngine};

/// Russian prepositions, conjunctions and particles that phrase concordance
/// never inflects, copying them verbatim into every generated form.
pub const SERVICE_WORDS: &[&str] = &[
    "в", "во", "на", "по", "из", "за", "от", "до", "об", "обо", "при", "про", "над", "под", "без",
    "для", "через", "между", "среди", "около", "после", "перед", "вокруг", "против", "вместо",
    "кроме", "с", "со", "к", "ко", "о", "и", "или", "но", "а", "не", "ни", "как", "что", "это",
];

const CASES: [&str; 6] = ["nomn", "gent", "datv", "accs", "ablt", "loct"];
const NUMBERS: [&str; 2] = ["sing", "plur"];

fn is_service_word(token: &str) -> bool {
    SERVICE_WORDS.contains(&token)
}

struct TokenInfo {
    pos: String,
    gender: String,
    animacy: String,
}

/// Resolves the effective case/gender for an adjective agreeing with a head
/// in `(case, number)`, per the accusative agreement rule.
fn adjective_form(case: &str, number: &str, head_gender: &str, head_animacy: &str) -> (String, String) {
    let mut effective_case = case.to_owned();
    let mut effective_gender = head_gender.to_owned();

    if case == "accs" {
        let inanimate = head_animacy == "inan";
        if number == "plur" {
            effective_case = if inanimate { "nomn" } else { "gent" }.to_owned();
        } else if head_gender == "masc" {
            effective_case = if inanimate { "nomn" } else { "gent" }.to_owned();
        } else if head_gender == "neut" {
            effective_case = "nomn".to_owned();
        }
        // femn singular accusative keeps "accs" unchanged.
    }

    if number == "plur" {
        effective_gender.clear();
    }

    (effective_case, effective_gender)
}

/// Generates every grammatically concordant declension of `phrase`.
pub fn phrase_forms_concordant(engine: &MorphEngine, phrase: &str) -> Vec<String> {
    let normalized = phrase.trim().to_lowercase();
    if normalized.is_empty() {
        return Vec::new();
    }

    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    if tokens.len() == 1 {
        let mut seen = std::collections::HashSet::new();
        let mut results = Vec::new();
        let mut push_unique = |s: String| {
            if seen.insert(s.clone()) {
                results.push(s);
            }
        };
        push_unique(normalized.clone());
        for form in engine.word_forms(tokens[0]) {
            push_unique(form);
        }
        return results;
    }

    let infos: Vec<TokenInfo> = tokens
        .iter()
        .map(|&token| {
            if is_service_word(token) {
                TokenInfo {
                    pos: String::new(),
                    gender: String::new(),
                    animacy: String::new(),
                }
            } else {
                let tag = engine.tag(token);
                let pos = tag_pos(&tag).to_owned();
                let gender = tag_grammeme(&tag, &["masc", "femn", "neut"]).to_owned();
                let animacy = tag_grammeme(&tag, &["anim", "inan"]).to_owned();
                TokenInfo {
                    pos,
                    gender,
                    animacy,
                }
            }
        })
        .collect();

    let head = infos
        .iter()
        .enumerate()
        .rev()
        .find(|(_, info)| info.pos == "NOUN" || info.pos == "NPRO")
        .map(|(i, _)| i);

    let mut seen = std::collections::HashSet::new();
    let mut results = Vec::new();
    let mut push_unique = |s: String| {
        if seen.insert(s.clone()) {
            results.push(s);
        }
    };
    push_unique(normalized.clone());

    let Some(head_idx) = head else {
        for &token in &tokens {
            if is_service_word(token) {
                continue;
            }
            for form in engine.word_forms(token) {
                push_unique(form);
            }
        }
        return results;
    };

    let head_gender = infos[head_idx].gender.clone();
    let head_animacy = infos[head_idx].animacy.clone();

    for (number, case) in NUMBERS.iter().cartesian_product(CASES.iter()) {
        let mut words = Vec::with_capacity(tokens.len());
        for (i, &token) in tokens.iter().enumerate() {
            if is_service_word(token) {
                words.push(token.to_owned());
                continue;
            }
            let pos = infos[i].pos.as_str();
            if pos == "NOUN" || pos == "NPRO" {
                words.push(engine.inflect(token, case, number, "", ""));
            } else if pos == "ADJF" || pos == "PRTF" {
                let (eff_case, eff_gender) =
                    adjective_form(case, number, &head_gender, &head_animacy);
                words.push(engine.inflect(token, &eff_case, number, &eff_gender, ""));
            } else {
                words.push(token.to_owned());
            }
        }
        push_unique(words.join(" "));
    }

    results
}
