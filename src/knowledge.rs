//! Assistant knowledge lookup.
//!
//! Naive keyword scoring over the small `azhar_knowledge` table. The result
//! is the context string for the hosted completion call: the best direct
//! answer when it scores high enough, otherwise a digest of the first
//! entries.

use serde::Serialize;

use crate::content::types::KnowledgeRow;
use crate::i18n::Language;

/// Minimum score for a direct answer.
pub const MATCH_THRESHOLD: u32 = 2;
/// Entries included in the general context.
pub const GENERAL_CONTEXT_ENTRIES: usize = 10;

const KEYWORD_WEIGHT: u32 = 2;
const QUESTION_WEIGHT: u32 = 1;
/// Words this short carry no signal ("в", "на", "и").
const MIN_WORD_CHARS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantContext {
    /// `true` when `context` is a single direct answer
    pub matched: bool,
    pub context: String,
}

#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeRow>,
}

fn question(entry: &KnowledgeRow, lang: Language) -> &str {
    match lang {
        Language::Ru => &entry.question_ru,
        Language::Kz => &entry.question_kz,
    }
}

fn answer(entry: &KnowledgeRow, lang: Language) -> &str {
    match lang {
        Language::Ru => &entry.answer_ru,
        Language::Kz => &entry.answer_kz,
    }
}

impl KnowledgeBase {
    pub fn new(entries: Vec<KnowledgeRow>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn score(entry: &KnowledgeRow, words: &[String], lang: Language) -> u32 {
        let keywords: Vec<String> = entry.keywords.iter().map(|k| k.to_lowercase()).collect();
        let question = question(entry, lang).to_lowercase();

        words
            .iter()
            .map(|word| {
                let keyword_hits = keywords
                    .iter()
                    .filter(|kw| kw.contains(word.as_str()) || word.contains(kw.as_str()))
                    .count() as u32;
                let question_hit = u32::from(question.contains(word.as_str()));
                keyword_hits * KEYWORD_WEIGHT + question_hit * QUESTION_WEIGHT
            })
            .sum()
    }

    /// Best-scoring answer in `lang`, if it reaches `MATCH_THRESHOLD`.
    /// Ties keep the earliest entry.
    pub fn find_answer(&self, message: &str, lang: Language) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }

        let words: Vec<String> = message
            .to_lowercase()
            .split_whitespace()
            .filter(|w| w.chars().count() >= MIN_WORD_CHARS)
            .map(str::to_string)
            .collect();

        let mut best: Option<&KnowledgeRow> = None;
        let mut best_score = 0;
        for entry in &self.entries {
            let score = Self::score(entry, &words, lang);
            if score > best_score {
                best_score = score;
                best = Some(entry);
            }
        }

        tracing::debug!(
            "Knowledge lookup: {} words, best score {} ({:?})",
            words.len(),
            best_score,
            best.map(|e| e.category.as_str())
        );

        best.filter(|_| best_score >= MATCH_THRESHOLD)
            .map(|entry| answer(entry, lang))
    }

    /// `Q: …\nA: …` blocks of the first entries, separated by a blank line.
    pub fn general_context(&self, lang: Language) -> String {
        self.entries
            .iter()
            .take(GENERAL_CONTEXT_ENTRIES)
            .map(|entry| format!("Q: {}\nA: {}", question(entry, lang), answer(entry, lang)))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn context_for(&self, message: &str, lang: Language) -> AssistantContext {
        match self.find_answer(message, lang) {
            Some(direct) => AssistantContext { matched: true, context: direct.to_string() },
            None => AssistantContext { matched: false, context: self.general_context(lang) },
        }
    }
}

/// Welcome line shown when the assistant opens.
pub fn greeting(lang: Language) -> &'static str {
    match lang {
        Language::Ru => "Здравствуйте! Я - ИИ-помощник, я помогу ответить на вопросы о центре реабилитации.",
        Language::Kz => "Сәлеметсіз бе! Мен -ЖИ-көмекшісі, мен сізге орталық туралы сұрақтарға жауап беруге көмектесемін.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: &str, q_ru: &str, a_ru: &str, keywords: &[&str]) -> KnowledgeRow {
        KnowledgeRow {
            category: category.to_string(),
            question_ru: q_ru.to_string(),
            answer_ru: a_ru.to_string(),
            question_kz: format!("{} (kz)", q_ru),
            answer_kz: format!("{} (kz)", a_ru),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn base() -> KnowledgeBase {
        KnowledgeBase::new(vec![
            entry("hours", "Какой график работы?", "Пн-Пт с 8 до 17", &["график", "время", "часы"]),
            entry("address", "Где находится центр?", "г. Павлодар", &["адрес", "где"]),
            entry("price", "Сколько стоит курс?", "Бесплатно по направлению", &["цена", "стоимость"]),
        ])
    }

    #[test]
    fn test_keyword_match() {
        let kb = base();
        assert_eq!(kb.find_answer("Подскажите ГРАФИК работы", Language::Ru), Some("Пн-Пт с 8 до 17"));
        assert_eq!(kb.find_answer("какой график", Language::Kz), Some("Пн-Пт с 8 до 17 (kz)"));
    }

    #[test]
    fn test_partial_keyword_containment() {
        let kb = base();
        assert_eq!(kb.find_answer("стоимость лечения", Language::Ru), Some("Бесплатно по направлению"));
        // Word contains the keyword
        assert_eq!(kb.find_answer("какая цена?", Language::Ru), Some("Бесплатно по направлению"));
        // Inflected form contains neither way round
        assert_eq!(kb.find_answer("цены", Language::Ru), None);
    }

    #[test]
    fn test_short_words_ignored() {
        // "где" has three characters and still counts; "в" and "и" do not
        let kb = base();
        assert_eq!(kb.find_answer("где", Language::Ru), Some("г. Павлодар"));
        assert_eq!(kb.find_answer("в и", Language::Ru), None);
    }

    #[test]
    fn test_question_hit_alone_is_below_threshold() {
        let kb = base();
        // "курс" appears only in a question: score 1
        assert_eq!(kb.find_answer("курс", Language::Ru), None);
    }

    #[test]
    fn test_empty_base() {
        let kb = KnowledgeBase::default();
        assert!(kb.find_answer("график", Language::Ru).is_none());
        assert_eq!(kb.general_context(Language::Ru), "");
    }

    #[test]
    fn test_context_fallback_digest() {
        let entries: Vec<KnowledgeRow> = (0..12)
            .map(|i| entry("misc", &format!("Вопрос {}", i), &format!("Ответ {}", i), &[]))
            .collect();
        let kb = KnowledgeBase::new(entries);

        let ctx = kb.context_for("абракадабра", Language::Ru);
        assert!(!ctx.matched);
        assert!(ctx.context.starts_with("Q: Вопрос 0\nA: Ответ 0\n\nQ: Вопрос 1"));
        assert!(ctx.context.contains("Ответ 9"));
        assert!(!ctx.context.contains("Ответ 10"));
    }

    #[test]
    fn test_context_direct() {
        let ctx = base().context_for("адрес центра", Language::Ru);
        assert_eq!(ctx, AssistantContext { matched: true, context: "г. Павлодар".into() });
    }
}
