//! Shared fixtures: hand-annotated sentences in the upstream pipeline's
//! token shape.

use crate::{AnnotatedSentence, AnnotatedToken};

/// Build a sentence from (text, lemma, upos, ner) tuples.
pub fn sentence(text: &str, tokens: &[(&str, &str, &str, &str)]) -> AnnotatedSentence {
    AnnotatedSentence::new(
        text,
        tokens
            .iter()
            .enumerate()
            .map(|(index, (text, lemma, upos, ner))| {
                AnnotatedToken::new(index, *text, *lemma)
                    .with_upos(*upos)
                    .with_ner(*ner)
            })
            .collect(),
    )
}

/// "From the 15th to the 20th of January 2024 the annual fair was held."
pub fn annual_fair() -> AnnotatedSentence {
    sentence(
        "15 से 20 जनवरी 2024: वार्षिक मेला आयोजित किया गया।",
        &[
            ("15", "15", "NUM", ""),
            ("से", "से", "ADP", ""),
            ("20", "20", "NUM", "B-DATE"),
            ("जनवरी", "जनवरी", "PROPN", "I-DATE"),
            ("2024", "2024", "NUM", "I-DATE"),
            (":", ":", "PUNCT", ""),
            ("वार्षिक", "वार्षिक", "ADJ", ""),
            ("मेला", "मेला", "NOUN", ""),
            ("आयोजित", "आयोजित", "ADJ", ""),
            ("किया", "कर", "VERB", ""),
            ("गया", "जा", "AUX", ""),
            ("।", "।", "PUNCT", ""),
        ],
    )
}

/// "Every Monday there is a yoga class."
pub fn yoga_class() -> AnnotatedSentence {
    sentence(
        "हर सोमवार: योग कक्षा होती है।",
        &[
            ("हर", "हर", "DET", ""),
            ("सोमवार", "सोमवार", "PROPN", ""),
            (":", ":", "PUNCT", ""),
            ("योग", "योग", "NOUN", ""),
            ("कक्षा", "कक्षा", "NOUN", ""),
            ("होती", "हो", "VERB", ""),
            ("है", "है", "AUX", ""),
            ("।", "।", "PUNCT", ""),
        ],
    )
}

/// "Salary is distributed on the first date of every month."
pub fn salary_day() -> AnnotatedSentence {
    sentence(
        "हर महीने की पहली तारीख: वेतन वितरित किया जाता है।",
        &[
            ("हर", "हर", "DET", ""),
            ("महीने", "महीना", "NOUN", ""),
            ("की", "का", "ADP", ""),
            ("पहली", "पहला", "ADJ", ""),
            ("तारीख", "तारीख", "NOUN", ""),
            (":", ":", "PUNCT", ""),
            ("वेतन", "वेतन", "NOUN", ""),
            ("वितरित", "वितरित", "ADJ", ""),
            ("किया", "कर", "VERB", ""),
            ("जाता", "जा", "AUX", ""),
            ("है", "है", "AUX", ""),
            ("।", "।", "PUNCT", ""),
        ],
    )
}

/// "On January 15, 2024 the Prime Minister announced a new scheme."
pub fn scheme_announcement() -> AnnotatedSentence {
    sentence(
        "15 जनवरी 2024 को प्रधानमंत्री ने नई योजना की घोषणा की।",
        &[
            ("15", "15", "NUM", "B-DATE"),
            ("जनवरी", "जनवरी", "PROPN", "I-DATE"),
            ("2024", "2024", "NUM", "I-DATE"),
            ("को", "को", "ADP", ""),
            ("प्रधानमंत्री", "प्रधानमंत्री", "NOUN", ""),
            ("ने", "ने", "ADP", ""),
            ("नई", "नया", "ADJ", ""),
            ("योजना", "योजना", "NOUN", ""),
            ("की", "का", "ADP", ""),
            ("घोषणा", "घोषणा", "NOUN", ""),
            ("की", "कर", "VERB", ""),
            ("।", "।", "PUNCT", ""),
        ],
    )
}

/// "The opposition staged a protest." No temporal vocabulary at all.
pub fn protest() -> AnnotatedSentence {
    sentence(
        "विपक्ष ने प्रदर्शन किया।",
        &[
            ("विपक्ष", "विपक्ष", "NOUN", ""),
            ("ने", "ने", "ADP", ""),
            ("प्रदर्शन", "प्रदर्शन", "NOUN", ""),
            ("किया", "कर", "VERB", ""),
            ("।", "।", "PUNCT", ""),
        ],
    )
}

/// A recurrence phrase and an explicit date in the same sentence.
pub fn weekly_with_date() -> AnnotatedSentence {
    sentence(
        "हर सोमवार को 15 जनवरी 2024 से योग कक्षा होती है।",
        &[
            ("हर", "हर", "DET", ""),
            ("सोमवार", "सोमवार", "PROPN", ""),
            ("को", "को", "ADP", ""),
            ("15", "15", "NUM", "B-DATE"),
            ("जनवरी", "जनवरी", "PROPN", "I-DATE"),
            ("2024", "2024", "NUM", "I-DATE"),
            ("से", "से", "ADP", ""),
            ("योग", "योग", "NOUN", ""),
            ("कक्षा", "कक्षा", "NOUN", ""),
            ("होती", "हो", "VERB", ""),
            ("है", "है", "AUX", ""),
            ("।", "।", "PUNCT", ""),
        ],
    )
}
