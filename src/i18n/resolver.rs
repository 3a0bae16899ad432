//! Language matching and translated-string lookup.

use super::{bundle::PathEntries, store::Catalog};

/// Options controlling [`Catalog::best_match`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions {
    /// Language used when no accepted language matches.
    pub default_lang: String,

    /// Advisory number of accepted languages expected to be searched.
    ///
    /// Every candidate is still tried; going past this many only logs a
    /// debug event. `0` means no bound.
    pub max_accepted_language_search: usize,

    /// Allow `en-US` to fall back to `en` when only the bare language
    /// code has a bundle.
    pub allow_language_code: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            default_lang: "en".to_string(),
            max_accepted_language_search: 3,
            allow_language_code: true,
        }
    }
}

impl Catalog {
    /// Pick the language to serve for an ordered list of accepted languages.
    ///
    /// The first candidate with a bundle wins, either exactly or, when
    /// `allow_language_code` is set, through its bare language code.
    /// Falls back to the default language.
    pub fn best_match<I, S>(&self, accepted: I) -> &str
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let bound = self.options.max_accepted_language_search;

        for (index, candidate) in accepted.into_iter().enumerate() {
            let candidate = candidate.as_ref();

            if bound > 0 && index == bound {
                tracing::debug!(
                    max_accepted_language_search = bound,
                    candidate,
                    "Searching past the advisory accepted-language bound"
                );
            }

            if let Some((code, _)) = self.bundles.get_key_value(candidate) {
                return code;
            }

            if self.options.allow_language_code
                && let Some((language, _region)) = candidate.split_once('-')
                && let Some((code, _)) = self.bundles.get_key_value(language)
            {
                return code;
            }
        }

        &self.options.default_lang
    }

    /// Resolve the language for `accepted` and bind a lookup to `path`.
    pub fn translator<I, S>(&self, path: impl Into<String>, accepted: I) -> Translator<'_>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let language = self.best_match(accepted);
        let path = path.into();
        let entries = self.bundles.get(language).and_then(|bundle| bundle.path(&path));

        Translator { language, path, entries }
    }

    /// One-shot lookup of `path.sub_path` for `accepted`.
    pub fn translate<I, S>(&self, path: &str, sub_path: &str, accepted: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.translator(path, accepted).get(sub_path)
    }
}

/// Lookup bound to a resolved language and path.
///
/// Missing strings come back as the `path.subPath` placeholder so gaps are
/// visible in rendered output.
#[derive(Debug, Clone)]
pub struct Translator<'a> {
    language: &'a str,
    path: String,
    entries: Option<&'a PathEntries>,
}

impl Translator<'_> {
    /// The resolved language code.
    pub fn language(&self) -> &str {
        self.language
    }

    /// The bound path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether the resolved bundle has this path at all.
    pub fn has_path(&self) -> bool {
        self.entries.is_some()
    }

    /// Get the string at `sub_path`, or the `path.sub_path` placeholder.
    pub fn get(&self, sub_path: &str) -> String {
        match self.entries.and_then(|entries| entries.get(sub_path)) {
            Some(text) => text.clone(),
            None => {
                tracing::warn!(
                    lang = self.language,
                    path = %self.path,
                    sub_path,
                    "Missing translation"
                );
                placeholder(&self.path, sub_path)
            },
        }
    }
}

/// The placeholder returned for a missing translation.
pub fn placeholder(path: &str, sub_path: &str) -> String {
    format!("{path}.{sub_path}")
}
