use std::collections::BTreeMap;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Hi,
}

type Catalog = BTreeMap<String, String>;

impl Language {
    pub fn all() -> &'static [Self] {
        &[Self::En, Self::Hi]
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|language| language.code().eq_ignore_ascii_case(code.trim()))
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::En => "language.option.en",
            Self::Hi => "language.option.hi",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Self::En => include_str!("../../assets/i18n/en.json"),
            Self::Hi => include_str!("../../assets/i18n/hi.json"),
        }
    }

    fn slot(self) -> usize {
        match self {
            Self::En => 0,
            Self::Hi => 1,
        }
    }
}

/// Looks up `key`, falling back to English and then to the key itself.
pub fn tr(language: Language, key: &'static str) -> &'static str {
    lookup(language, key)
        .or_else(|| lookup(Language::En, key))
        .unwrap_or(key)
}

/// Like [`tr`], substituting `{name}` placeholders.
pub fn tr_with(language: Language, key: &'static str, args: &[(&str, String)]) -> String {
    args.iter()
        .fold(tr(language, key).to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    catalogs()[language.slot()].get(key).map(String::as_str)
}

fn catalogs() -> &'static [Catalog; 2] {
    CATALOGS.get_or_init(|| [parse_catalog(Language::En), parse_catalog(Language::Hi)])
}

fn parse_catalog(language: Language) -> Catalog {
    serde_json::from_str(language.source()).unwrap_or_else(|err| {
        panic!(
            "failed to parse i18n catalog for language '{}': {err}",
            language.code()
        )
    })
}

static CATALOGS: OnceLock<[Catalog; 2]> = OnceLock::new();
