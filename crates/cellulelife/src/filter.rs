//! Screening of user-entered text (high-score names).

/// A stateless text check. Installed once by the host and shared by
/// reference with the module.
pub trait ContentFilter {
    fn contains_profanity(&self, text: &str) -> bool;
}

const DEFAULT_WORDS: &[&str] = &[
    "arse", "ass", "bastard", "bitch", "bollocks", "cock", "crap", "cunt", "damn", "dick",
    "fag", "fuck", "jerk", "nazi", "piss", "poop", "porn", "prick", "pussy", "sex", "shit",
    "slut", "tit", "tits", "turd", "twat", "wank", "whore",
];

/// Case-insensitive whole-word matcher over a word list.
#[derive(Debug, Clone)]
pub struct WordFilter {
    words: Vec<String>,
    placeholder: char,
}

impl WordFilter {
    /// A filter over `words` only.
    pub fn with_word_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = WordFilter {
            words: Vec::new(),
            placeholder: '*',
        };
        filter.extend(words);
        filter
    }

    /// Add words on top of the current list.
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extend(words);
        self
    }

    /// Remove words from the list, e.g. local place names.
    pub fn without_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let removed: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        self.words.retain(|w| !removed.contains(w));
        self
    }

    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() && !self.words.contains(&word) {
                self.words.push(word);
            }
        }
    }

    fn is_listed(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.words.iter().any(|w| *w == token)
    }

    /// Split into alternating word / separator runs, keeping every character.
    fn tokens(text: &str) -> Vec<(bool, &str)> {
        let mut out = Vec::new();
        let mut start = 0;
        let mut current: Option<bool> = None;
        for (i, ch) in text.char_indices() {
            let is_word = ch.is_alphanumeric();
            match current {
                Some(kind) if kind == is_word => {}
                Some(kind) => {
                    out.push((kind, &text[start..i]));
                    start = i;
                    current = Some(is_word);
                }
                None => current = Some(is_word),
            }
        }
        if let Some(kind) = current {
            out.push((kind, &text[start..]));
        }
        out
    }

    /// Replace every listed word with placeholders of the same length.
    pub fn clean(&self, text: &str) -> String {
        Self::tokens(text)
            .into_iter()
            .map(|(is_word, token)| {
                if is_word && self.is_listed(token) {
                    std::iter::repeat(self.placeholder)
                        .take(token.chars().count())
                        .collect()
                } else {
                    token.to_string()
                }
            })
            .collect()
    }
}

impl Default for WordFilter {
    fn default() -> Self {
        WordFilter::with_word_list(DEFAULT_WORDS)
    }
}

impl ContentFilter for WordFilter {
    fn contains_profanity(&self, text: &str) -> bool {
        Self::tokens(text)
            .into_iter()
            .any(|(is_word, token)| is_word && self.is_listed(token))
    }
}

/// Adapter for a filter object a JS page installed on the global scope
/// (anything with a `containsProfanity(string) -> boolean` method).
#[cfg(target_arch = "wasm32")]
pub struct JsFilter {
    target: wasm_bindgen::JsValue,
    method: js_sys::Function,
}

#[cfg(target_arch = "wasm32")]
impl JsFilter {
    /// Look up `global[name]`. Returns `None` if it is missing or lacks a
    /// callable `containsProfanity`.
    pub fn from_global(name: &str) -> Option<Self> {
        use wasm_bindgen::{JsCast, JsValue};

        let target = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name)).ok()?;
        if target.is_undefined() || target.is_null() {
            return None;
        }
        let method = js_sys::Reflect::get(&target, &JsValue::from_str("containsProfanity"))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()?;
        Some(JsFilter { target, method })
    }
}

#[cfg(target_arch = "wasm32")]
impl ContentFilter for JsFilter {
    /// A throwing or non-boolean filter rejects the text.
    fn contains_profanity(&self, text: &str) -> bool {
        match self
            .method
            .call1(&self.target, &wasm_bindgen::JsValue::from_str(text))
        {
            Ok(value) => value.as_bool().unwrap_or(true),
            Err(err) => {
                log::warn!("content filter failed: {err:?}");
                true
            }
        }
    }
}
