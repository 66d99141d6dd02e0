//! Bilingual quiz page text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::scoring::Verdict;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "EN", alias = "en")]
    En,
    /// Amharic.
    #[serde(rename = "AM", alias = "am")]
    Am,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "EN"),
            Language::Am => write!(f, "AM"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "am" | "amharic" => Ok(Language::Am),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

/// Labels shown around a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiText {
    pub subheading: &'static str,
    pub loading: &'static str,
    /// Shown when a lesson has no quiz.
    pub error: &'static str,
    pub finish: &'static str,
    pub back: &'static str,
    pub retry: &'static str,
    pub score_label: &'static str,
    pub perfect: &'static str,
    pub good: &'static str,
}

const EN: UiText = UiText {
    subheading: "KNOWLEDGE CHECK • SPIRITUAL GROWTH",
    loading: "Preparing your trial...",
    error: "This lesson doesn't have a quiz yet.",
    finish: "Finish & See Results",
    back: "Back to Lessons",
    retry: "Try Again",
    score_label: "Final Score",
    perfect: "Excellent! You've mastered this lesson.",
    good: "Good job! Keep growing in faith.",
};

const AM: UiText = UiText {
    subheading: "የእውቀት ምዘና • መንፈሳዊ እድገት",
    loading: "ምዘናውን በማዘጋጀት ላይ...",
    error: "ለዚህ ትምህርት እስካሁን ጥያቄዎች አልተዘጋጁም።",
    finish: "ውጤቱን እይ",
    back: "ወደ ትምህርቶች ተመለስ",
    retry: "እንደገና ሞክር",
    score_label: "ጠቅላላ ውጤት",
    perfect: "በጣም ጥሩ! ትምህርቱን በሚገባ ተረድተውታል።",
    good: "ጥሩ ነው! በእውቀት ማደግዎን ይቀጥሉ።",
};

impl UiText {
    pub fn for_language(language: Language) -> &'static UiText {
        match language {
            Language::En => &EN,
            Language::Am => &AM,
        }
    }

    pub fn verdict_message(&self, verdict: Verdict) -> &'static str {
        match verdict {
            Verdict::Perfect => self.perfect,
            Verdict::Good => self.good,
        }
    }
}
