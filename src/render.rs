// Plain-text entry rendering for one-shot (headless) lookups
//
// Mirrors the structure of the TUI results panel without styling: word
// and optional phonetic on the header line, then each meaning in order
// with its numbered definitions and optional example lines.

use crate::lookup::Entry;
use std::fmt::Write;

/// Format an entry for stdout.
pub fn format_entry(entry: &Entry) -> String {
    let mut out = String::new();

    match entry.display_phonetic() {
        Some(phonetic) => {
            let _ = writeln!(out, "{}  {}", entry.word, phonetic);
        }
        None => {
            let _ = writeln!(out, "{}", entry.word);
        }
    }

    for meaning in &entry.meanings {
        let _ = writeln!(out);

        if let Some(pos) = &meaning.part_of_speech {
            let _ = writeln!(out, "{pos}");
        }

        for (i, definition) in meaning.definitions.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, definition.definition);
            if let Some(example) = &definition.example {
                let _ = writeln!(out, "     Example: {example}");
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_full_entry() {
        let entry: Entry = serde_json::from_value(json!({
            "word": "cat",
            "phonetic": "/kæt/",
            "meanings": [{
                "partOfSpeech": "noun",
                "definitions": [{
                    "definition": "A small domesticated carnivore.",
                    "example": "The cat slept."
                }]
            }]
        }))
        .unwrap();

        let text = format_entry(&entry);
        assert_eq!(
            text,
            "cat  /kæt/\n\nnoun\n  1. A small domesticated carnivore.\n     Example: The cat slept.\n"
        );
    }

    #[test]
    fn test_format_entry_without_optionals() {
        let entry: Entry = serde_json::from_value(json!({
            "word": "hm",
            "meanings": [{"definitions": [{"definition": "An interjection."}]}]
        }))
        .unwrap();

        assert_eq!(format_entry(&entry), "hm\n\n  1. An interjection.\n");
    }

    #[test]
    fn test_format_is_idempotent() {
        let entry: Entry = serde_json::from_value(json!({"word": "tea"})).unwrap();
        assert_eq!(format_entry(&entry), format_entry(&entry));
    }
}
