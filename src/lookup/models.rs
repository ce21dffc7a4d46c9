// Data model for dictionary API responses
//
// These types mirror the JSON shape returned by the free dictionary API
// (dictionaryapi.dev). The service returns either a single entry object or
// an array of entry variants (homographs, alternate sources); only the
// first variant is ever shown, so `first_entry` collapses both shapes.

use serde::Deserialize;

/// One dictionary record for a word.
///
/// Everything beyond `word` is optional in practice: the API omits
/// phonetics for some words and leaves `partOfSpeech` empty for others,
/// so all nested fields default rather than fail deserialization.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Entry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

/// One phonetic transcription variant.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
}

/// A part-of-speech grouping of definitions within an entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Meaning {
    #[serde(default, rename = "partOfSpeech")]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

/// One sense of a word, with an optional usage example.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

impl Entry {
    /// The phonetic transcription to display, if any.
    ///
    /// Prefers the entry-level `phonetic`, then falls back to the first
    /// element of the `phonetics` array with non-blank text. Returns
    /// `None` rather than an empty string so callers never render a
    /// blank phonetic line.
    pub fn display_phonetic(&self) -> Option<&str> {
        non_blank(self.phonetic.as_deref())
            .or_else(|| {
                self.phonetics
                    .iter()
                    .find_map(|p| non_blank(p.text.as_deref()))
            })
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

/// Coerce a response body into the first entry it describes.
///
/// The API may return a bare entry object or an array of entry variants.
/// Anything else (empty array, wrong field types, missing `word`) is a
/// shape mismatch and returns `None` - the caller surfaces it as a
/// network-level failure instead of propagating a field-access fault.
pub fn first_entry(body: serde_json::Value) -> Option<Entry> {
    let value = match body {
        serde_json::Value::Array(mut entries) => {
            if entries.is_empty() {
                return None;
            }
            entries.swap_remove(0)
        }
        other => other,
    };

    serde_json::from_value(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_entry() {
        let body = json!([{
            "word": "cat",
            "phonetic": "/kæt/",
            "meanings": [{
                "partOfSpeech": "noun",
                "definitions": [{
                    "definition": "A small domesticated carnivore.",
                    "example": "The cat slept."
                }]
            }]
        }]);

        let entry = first_entry(body).expect("entry should parse");
        assert_eq!(entry.word, "cat");
        assert_eq!(entry.display_phonetic(), Some("/kæt/"));
        assert_eq!(entry.meanings.len(), 1);
        assert_eq!(entry.meanings[0].part_of_speech.as_deref(), Some("noun"));
        assert_eq!(
            entry.meanings[0].definitions[0].definition,
            "A small domesticated carnivore."
        );
        assert_eq!(
            entry.meanings[0].definitions[0].example.as_deref(),
            Some("The cat slept.")
        );
    }

    #[test]
    fn test_parse_bare_object() {
        // Some mirrors return a single object instead of an array
        let body = json!({"word": "dog", "meanings": []});
        let entry = first_entry(body).expect("bare object should parse");
        assert_eq!(entry.word, "dog");
        assert!(entry.meanings.is_empty());
    }

    #[test]
    fn test_only_first_variant_is_used() {
        let body = json!([
            {"word": "lead", "phonetic": "/liːd/", "meanings": []},
            {"word": "lead", "phonetic": "/lɛd/", "meanings": []}
        ]);

        let entry = first_entry(body).expect("first variant should parse");
        assert_eq!(entry.display_phonetic(), Some("/liːd/"));
    }

    #[test]
    fn test_empty_array_is_shape_mismatch() {
        assert!(first_entry(json!([])).is_none());
    }

    #[test]
    fn test_missing_word_is_shape_mismatch() {
        assert!(first_entry(json!({"phonetic": "/x/"})).is_none());
        assert!(first_entry(json!("just a string")).is_none());
    }

    #[test]
    fn test_phonetic_falls_back_to_phonetics_array() {
        let body = json!({
            "word": "tea",
            "phonetics": [
                {"text": ""},
                {"audio-only": true},
                {"text": "/tiː/"}
            ]
        });

        let entry = first_entry(body).expect("entry should parse");
        assert_eq!(entry.display_phonetic(), Some("/tiː/"));
    }

    #[test]
    fn test_blank_phonetics_are_omitted() {
        let body = json!({
            "word": "tea",
            "phonetic": "   ",
            "phonetics": [{"text": null}, {"text": "  "}]
        });

        let entry = first_entry(body).expect("entry should parse");
        assert_eq!(entry.display_phonetic(), None);
    }

    #[test]
    fn test_missing_part_of_speech_is_allowed() {
        let body = json!({
            "word": "hm",
            "meanings": [{"definitions": [{"definition": "An interjection."}]}]
        });

        let entry = first_entry(body).expect("entry should parse");
        assert_eq!(entry.meanings[0].part_of_speech, None);
        assert_eq!(entry.meanings[0].definitions[0].example, None);
    }
}
