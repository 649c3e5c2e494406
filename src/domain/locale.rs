//! Number formatting conventions per locale.

/// Environment variables consulted for the active locale, most specific first.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

/// How integer digits are split into groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grouping {
    /// Groups of three: `1,234,567`.
    Thousands,
    /// Three, then twos: `12,34,567`.
    Indian,
}

impl Grouping {
    fn primary(&self) -> usize {
        3
    }

    fn secondary(&self) -> usize {
        match self {
            Grouping::Thousands => 3,
            Grouping::Indian => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberLocale {
    pub tag: &'static str,
    pub group: &'static str,
    pub decimal: &'static str,
    pub grouping: Grouping,
    /// Integers shorter than `3 + min_grouping_digits` are not grouped.
    pub min_grouping_digits: usize,
}

const fn preset(tag: &'static str, group: &'static str, decimal: &'static str) -> NumberLocale {
    NumberLocale {
        tag,
        group,
        decimal,
        grouping: Grouping::Thousands,
        min_grouping_digits: 1,
    }
}

pub const EN_US: NumberLocale = preset("en-US", ",", ".");

/// Known locales. The first entry for a language is its fallback.
pub const PRESETS: &[NumberLocale] = &[
    EN_US,
    preset("en-GB", ",", "."),
    preset("en-AU", ",", "."),
    preset("en-CA", ",", "."),
    NumberLocale {
        grouping: Grouping::Indian,
        ..preset("en-IN", ",", ".")
    },
    preset("en-ZA", "\u{a0}", ","),
    preset("de-DE", ".", ","),
    preset("de-AT", "\u{a0}", ","),
    preset("de-CH", "\u{2019}", "."),
    preset("fr-FR", "\u{202f}", ","),
    preset("fr-BE", "\u{202f}", ","),
    preset("fr-CA", "\u{a0}", ","),
    preset("fr-CH", "\u{202f}", ","),
    NumberLocale {
        min_grouping_digits: 2,
        ..preset("es-ES", ".", ",")
    },
    preset("es-MX", ",", "."),
    preset("es-AR", ".", ","),
    preset("it-IT", ".", ","),
    preset("it-CH", "\u{2019}", "."),
    preset("pt-BR", ".", ","),
    NumberLocale {
        min_grouping_digits: 2,
        ..preset("pt-PT", "\u{a0}", ",")
    },
    preset("nl-NL", ".", ","),
    preset("nl-BE", ".", ","),
    preset("da-DK", ".", ","),
    preset("nb-NO", "\u{a0}", ","),
    preset("sv-SE", "\u{a0}", ","),
    preset("fi-FI", "\u{a0}", ","),
    preset("is-IS", ".", ","),
    NumberLocale {
        min_grouping_digits: 2,
        ..preset("pl-PL", "\u{a0}", ",")
    },
    preset("cs-CZ", "\u{a0}", ","),
    preset("sk-SK", "\u{a0}", ","),
    preset("hu-HU", "\u{a0}", ","),
    preset("ro-RO", ".", ","),
    NumberLocale {
        min_grouping_digits: 2,
        ..preset("bg-BG", "\u{a0}", ",")
    },
    preset("hr-HR", ".", ","),
    preset("sl-SI", ".", ","),
    preset("lt-LT", "\u{a0}", ","),
    preset("lv-LV", "\u{a0}", ","),
    NumberLocale {
        min_grouping_digits: 2,
        ..preset("et-EE", "\u{a0}", ",")
    },
    preset("el-GR", ".", ","),
    preset("ru-RU", "\u{a0}", ","),
    preset("uk-UA", "\u{a0}", ","),
    preset("tr-TR", ".", ","),
    preset("he-IL", ",", "."),
    NumberLocale {
        grouping: Grouping::Indian,
        ..preset("hi-IN", ",", ".")
    },
    preset("id-ID", ".", ","),
    preset("vi-VN", ".", ","),
    preset("th-TH", ",", "."),
    preset("ko-KR", ",", "."),
    preset("ja-JP", ",", "."),
    preset("zh-CN", ",", "."),
    preset("zh-TW", ",", "."),
];

/// Legacy or macro language subtags mapped onto a preset language.
const LANGUAGE_ALIASES: [(&str, &str); 3] = [("no", "nb"), ("nn", "nb"), ("iw", "he")];

impl Default for NumberLocale {
    fn default() -> Self {
        EN_US
    }
}

impl NumberLocale {
    /// Looks up a locale by BCP-47 (`de-DE`) or POSIX (`de_DE.UTF-8`) tag.
    ///
    /// Unknown regions fall back to the language's first preset; unknown
    /// languages return `None`.
    pub fn lookup(tag: &str) -> Option<Self> {
        let normalized = normalize_tag(tag)?;
        if let Some(found) = PRESETS
            .iter()
            .find(|locale| locale.tag.eq_ignore_ascii_case(&normalized))
        {
            return Some(*found);
        }

        let language = normalized.split('-').next()?;
        let language = LANGUAGE_ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(language))
            .map_or(language, |(_, target)| *target);
        PRESETS
            .iter()
            .find(|locale| {
                locale
                    .language()
                    .eq_ignore_ascii_case(language)
            })
            .copied()
    }

    /// Like [`NumberLocale::lookup`], but never fails.
    pub fn resolve(tag: &str) -> Self {
        Self::lookup(tag).unwrap_or_else(|| {
            tracing::debug!(tag, "unknown locale, using {}", EN_US.tag);
            EN_US
        })
    }

    /// The locale the process runs under, from `LC_ALL`, `LC_NUMERIC`, then `LANG`.
    pub fn current() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    pub fn from_env_with(get: impl Fn(&str) -> Option<String>) -> Self {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|key| get(key))
            .find(|value| !value.trim().is_empty())
            .map(|value| Self::resolve(&value))
            .unwrap_or_default()
    }

    pub fn language(&self) -> &'static str {
        self.tag.split('-').next().unwrap_or(self.tag)
    }

    /// Inserts group separators into a run of ASCII digits.
    pub fn group_digits(&self, digits: &str) -> String {
        let len = digits.len();
        let primary = self.grouping.primary();
        if len < primary + self.min_grouping_digits {
            return digits.to_string();
        }

        let secondary = self.grouping.secondary();
        let mut boundaries = Vec::new();
        let mut cut = len - primary;
        while cut > 0 {
            boundaries.push(cut);
            cut = cut.saturating_sub(secondary);
        }

        let mut out = String::with_capacity(len + boundaries.len() * self.group.len());
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && boundaries.contains(&idx) {
                out.push_str(self.group);
            }
            out.push(ch);
        }
        out
    }
}

fn normalize_tag(tag: &str) -> Option<String> {
    let base = tag
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    if base.is_empty() {
        return None;
    }
    if base.eq_ignore_ascii_case("C") || base.eq_ignore_ascii_case("POSIX") {
        return Some(EN_US.tag.to_string());
    }
    Some(base.replace('_', "-"))
}
