//! Static sentiment dictionaries for English and Roman Urdu/Hindi.

/// Which base table a word was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

/// A dictionary hit: the base weight and the table it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconEntry {
    /// Base strength in `1..=10` before intensification.
    pub weight: u8,
    pub polarity: Polarity,
}

/// Keys are lowercase single words, values are strengths in `1..=10`.
pub(crate) const POSITIVE_WORDS: &[(&str, u8)] = &[
    // English
    ("good", 8),
    ("great", 9),
    ("excellent", 10),
    ("amazing", 9),
    ("awesome", 9),
    ("love", 8),
    ("perfect", 9),
    ("wonderful", 9),
    ("fantastic", 9),
    ("brilliant", 9),
    ("happy", 8),
    ("glad", 7),
    ("beautiful", 8),
    ("nice", 7),
    ("best", 9),
    ("better", 7),
    ("liked", 7),
    ("positive", 8),
    ("success", 8),
    ("successful", 8),
    ("well", 6),
    ("okay", 5),
    ("ok", 5),
    ("fine", 5),
    ("decent", 6),
    ("pretty", 6),
    ("cool", 7),
    ("lovely", 8),
    ("stunning", 9),
    ("impressive", 8),
    ("superb", 9),
    ("outstanding", 9),
    ("incredible", 9),
    ("gorgeous", 8),
    ("delighted", 9),
    ("thrilled", 9),
    ("pleased", 7),
    ("satisfied", 7),
    ("content", 6),
    ("excited", 8),
    ("hopeful", 7),
    ("inspired", 8),
    ("energetic", 7),
    ("vibrant", 7),
    // Urdu/Hindi (romanized)
    ("acha", 7),
    ("bahat", 8),
    ("behtreen", 9),
    ("khoobsurat", 8),
    ("shandar", 9),
    ("bhanda", 8),
    ("shukriya", 7),
    ("khush", 8),
    ("khushnuma", 8),
    ("pyara", 8),
    ("dilkash", 8),
    ("khub", 7),
    ("behtar", 7),
    ("banaa", 7),
    ("accha", 7),
    ("bahut", 8),
    ("sundar", 8),
    ("shaan", 8),
    ("shaandar", 9),
    ("pyaara", 8),
    ("khubsurat", 8),
    ("kamal", 8),
    ("badha", 7),
];

/// Keys are lowercase single words, values are strengths in `1..=10`.
///
/// A handful of entries ("no", "never", "nahi", ...) double as negation
/// markers; both roles apply independently.
pub(crate) const NEGATIVE_WORDS: &[(&str, u8)] = &[
    // English
    ("bad", 8),
    ("terrible", 9),
    ("awful", 9),
    ("horrible", 10),
    ("hate", 9),
    ("worst", 10),
    ("worse", 8),
    ("wrong", 7),
    ("sad", 7),
    ("angry", 8),
    ("disappointed", 8),
    ("frustrated", 7),
    ("annoyed", 6),
    ("upset", 7),
    ("poor", 7),
    ("weak", 6),
    ("stupid", 8),
    ("dumb", 8),
    ("ugly", 8),
    ("disgusting", 9),
    ("gross", 7),
    ("filthy", 8),
    ("dirty", 6),
    ("negative", 8),
    ("failure", 8),
    ("failed", 8),
    ("problem", 6),
    ("issue", 5),
    ("no", 5),
    ("nope", 7),
    ("nah", 6),
    ("never", 6),
    ("neither", 5),
    ("cannot", 6),
    ("wont", 7),
    ("incorrect", 7),
    ("false", 6),
    ("broken", 7),
    ("useless", 8),
    ("waste", 7),
    ("wasteful", 7),
    ("pointless", 7),
    ("meaningless", 7),
    ("pain", 7),
    ("hurt", 7),
    ("suffering", 8),
    ("anguish", 8),
    ("torment", 8),
    ("scary", 7),
    ("frightening", 8),
    ("terrifying", 9),
    ("fear", 7),
    ("afraid", 7),
    // Urdu/Hindi (romanized)
    ("bura", 8),
    ("kharab", 8),
    ("ghalat", 7),
    ("galat", 7),
    ("nahi", 6),
    ("nhi", 6),
    ("nahin", 6),
    ("pagal", 8),
    ("bewakoof", 8),
    ("ulloo", 7),
    ("jahil", 8),
    ("badmash", 8),
    ("shaitan", 8),
    ("bhataar", 8),
    ("khatarnak", 8),
    ("ganda", 7),
    ("gandaa", 7),
    ("azeeb", 7),
    ("bekaar", 8),
    ("kamzor", 6),
    ("dukhi", 7),
    ("udaas", 7),
    ("naraz", 8),
    ("ghussay", 8),
    ("kinna", 6),
    ("paagal", 8),
    ("bilkul", 6),
    ("chakla", 7),
    ("gandha", 7),
    ("anokha", 7),
    ("udas", 7),
    ("gussa", 8),
    ("chinta", 6),
];

/// Markers that flip the sign of a sentiment word within two tokens after
/// them. Contractions appear apostrophe-free because the tokenizer strips
/// punctuation rather than splitting on it.
pub(crate) const NEGATION_WORDS: &[&str] = &[
    // English
    "not",
    "no",
    "never",
    "neither",
    "nobody",
    "nothing",
    "nowhere",
    "nope",
    "nah",
    "noway",
    "cannot",
    "wont",
    "isnt",
    "arent",
    "wasnt",
    "werent",
    "havent",
    "hasnt",
    "hadnt",
    "doesnt",
    "dont",
    "didnt",
    "mustnt",
    "aint",
    // Urdu/Hindi (romanized)
    "nahi",
    "nhi",
    "nahin",
    "na",
    "kabhi",
    "kabi",
    "kuch",
    "kuchu",
];

/// Amplifiers that scale the weight of the single token right after them.
pub(crate) const INTENSIFIERS: &[(&str, f32)] = &[
    ("very", 1.5),
    ("really", 1.4),
    ("so", 1.3),
    ("extremely", 1.6),
    ("absolutely", 1.5),
    ("completely", 1.4),
    ("totally", 1.4),
    ("utterly", 1.5),
    ("bloody", 1.3),
];

/// Look up a lowercase token in the sentiment tables.
///
/// The positive table is consulted first, then the negative one. The two
/// tables carry disjoint keys, so order only matters if that ever changes.
#[must_use]
pub fn lookup(word: &str) -> Option<LexiconEntry> {
    if let Some(&(_, weight)) = POSITIVE_WORDS.iter().find(|&&(w, _)| w == word) {
        return Some(LexiconEntry {
            weight,
            polarity: Polarity::Positive,
        });
    }
    if let Some(&(_, weight)) = NEGATIVE_WORDS.iter().find(|&&(w, _)| w == word) {
        return Some(LexiconEntry {
            weight,
            polarity: Polarity::Negative,
        });
    }
    None
}

/// Whether a lowercase token is a negation marker.
#[must_use]
pub fn is_negation(word: &str) -> bool {
    NEGATION_WORDS.contains(&word)
}

/// The amplification factor for a lowercase token, if it is an intensifier.
#[must_use]
pub fn intensifier_multiplier(word: &str) -> Option<f32> {
    INTENSIFIERS
        .iter()
        .find(|&&(w, _)| w == word)
        .map(|&(_, multiplier)| multiplier)
}
