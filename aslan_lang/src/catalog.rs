// Aslan syllable catalog: syllable shapes, phoneme pools, and vowel subsets.
//
// A syllable is one of four shapes (V, CV, VC, CVC). Each shape has a weight
// out of ten, a set of shapes allowed to follow it, and a rendering rule that
// turns it into an alternation template by concatenating phoneme pools:
// a leading `c` uses the first-consonant pool, `v` the vowel pool, a trailing
// `c` the last-consonant pool.
//
// The phoneme pools are fixed tables. Relative phoneme frequency is expressed
// by repetition, so "a" appearing ten times in the vowel pool is ten times as
// likely as "u" once the expander picks uniformly among alternatives. Changing
// a table changes how the language sounds, not how words are assembled.
//
// `VowelSubset` restricts the vowel pool's bare single-letter vowels
// (a, e, i, o, u). The sequence builder (`sequence.rs`) assigns complementary
// subsets to two adjacent vowel-touching syllables so they can never both
// render the same bare vowel ("aa", "ee", ...).

use std::fmt;

// ---------------------------------------------------------------------------
// Phoneme pools
// ---------------------------------------------------------------------------

/// A weighted table of phonemes that renders as one alternation group.
#[derive(Debug, Clone, Copy)]
pub struct PhonemePool {
    /// `(phoneme, repetitions)` rows, in rendering order.
    pub entries: &'static [(&'static str, u8)],
    /// Whether the group ends with an empty alternative (`...|>`), allowing
    /// the slot to render as nothing.
    pub trailing_empty: bool,
}

impl PhonemePool {
    /// Render the full pool as `<(p1)|(p1)|(p2)|...>`.
    pub fn render(&self) -> String {
        self.render_filtered(|_| true)
    }

    /// Render the pool keeping only phonemes accepted by `keep`.
    pub fn render_filtered(&self, keep: impl Fn(&str) -> bool) -> String {
        let alternatives: Vec<String> = self
            .entries
            .iter()
            .filter(|(phoneme, _)| keep(phoneme))
            .flat_map(|(phoneme, reps)| {
                std::iter::repeat_n(format!("({phoneme})"), usize::from(*reps))
            })
            .collect();

        let mut out = String::from("<");
        out.push_str(&alternatives.join("|"));
        if self.trailing_empty {
            out.push('|');
        }
        out.push('>');
        out
    }

    /// Total number of alternatives the full pool renders, excluding the
    /// trailing empty one.
    pub fn alternative_count(&self) -> usize {
        self.entries.iter().map(|(_, reps)| usize::from(*reps)).sum()
    }

    /// Repetitions of one phoneme, or 0 if the pool does not contain it.
    pub fn repetitions_of(&self, phoneme: &str) -> usize {
        self.entries
            .iter()
            .find(|(p, _)| *p == phoneme)
            .map_or(0, |(_, reps)| usize::from(*reps))
    }
}

/// Consonants and clusters that can open a syllable.
pub const FIRST_CONSONANT_POOL: PhonemePool = PhonemePool {
    entries: &[
        ("f", 5),
        ("ft", 3),
        ("h", 7),
        ("hf", 2),
        ("hk", 5),
        ("hl", 3),
        ("hr", 3),
        ("ht", 5),
        ("hw", 2),
        ("k", 7),
        ("kh", 6),
        ("kht", 4),
        ("kt", 4),
        ("l", 2),
        ("r", 4),
        ("s", 4),
        ("st", 3),
        ("t", 8),
        ("tl", 2),
        ("tr", 2),
        ("w", 6),
    ],
    trailing_empty: true,
};

/// Vowels and diphthongs forming a syllable nucleus.
pub const VOWEL_POOL: PhonemePool = PhonemePool {
    entries: &[
        ("a", 10),
        ("ai", 3),
        ("ao", 2),
        ("au", 1),
        ("e", 6),
        ("ea", 6),
        ("ei", 2),
        ("i", 4),
        ("iy", 3),
        ("o", 3),
        ("oa", 1),
        ("oi", 2),
        ("ou", 1),
        ("u", 1),
        ("ua", 1),
        ("ui", 1),
        ("ya", 1),
        ("yu", 1),
    ],
    trailing_empty: true,
};

/// Consonants and clusters that can close a syllable.
pub const LAST_CONSONANT_POOL: PhonemePool = PhonemePool {
    entries: &[
        ("h", 10),
        ("kh", 4),
        ("l", 3),
        ("lr", 4),
        ("r", 5),
        ("rl", 4),
        ("s", 5),
        ("w", 6),
        ("'", 3),
    ],
    trailing_empty: false,
};

// ---------------------------------------------------------------------------
// Single vowels and vowel subsets
// ---------------------------------------------------------------------------

/// A bare single-letter vowel phoneme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SingleVowel {
    A,
    E,
    I,
    O,
    U,
}

impl SingleVowel {
    pub const ALL: [SingleVowel; 5] = [
        SingleVowel::A,
        SingleVowel::E,
        SingleVowel::I,
        SingleVowel::O,
        SingleVowel::U,
    ];

    /// The phoneme text, as it appears in the vowel pool.
    pub fn as_str(self) -> &'static str {
        match self {
            SingleVowel::A => "a",
            SingleVowel::E => "e",
            SingleVowel::I => "i",
            SingleVowel::O => "o",
            SingleVowel::U => "u",
        }
    }

    /// Parse a phoneme as a bare single vowel. Diphthongs return `None`.
    pub fn from_phoneme(phoneme: &str) -> Option<SingleVowel> {
        match phoneme {
            "a" => Some(SingleVowel::A),
            "e" => Some(SingleVowel::E),
            "i" => Some(SingleVowel::I),
            "o" => Some(SingleVowel::O),
            "u" => Some(SingleVowel::U),
            _ => None,
        }
    }
}

impl fmt::Display for SingleVowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A restriction of the vowel pool's single-letter vowels.
///
/// Multi-letter vowels ("ai", "ea", ...) are unaffected by either variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelSubset {
    /// Every single vowel except this one.
    Without(SingleVowel),
    /// This single vowel and no other.
    OnlySingle(SingleVowel),
}

impl VowelSubset {
    /// All ten subsets in draw order: the five `Without` first, then the
    /// five `OnlySingle`, each in a-e-i-o-u order.
    pub const ALL: [VowelSubset; 10] = [
        VowelSubset::Without(SingleVowel::A),
        VowelSubset::Without(SingleVowel::E),
        VowelSubset::Without(SingleVowel::I),
        VowelSubset::Without(SingleVowel::O),
        VowelSubset::Without(SingleVowel::U),
        VowelSubset::OnlySingle(SingleVowel::A),
        VowelSubset::OnlySingle(SingleVowel::E),
        VowelSubset::OnlySingle(SingleVowel::I),
        VowelSubset::OnlySingle(SingleVowel::O),
        VowelSubset::OnlySingle(SingleVowel::U),
    ];

    /// Whether this subset lets the vowel slot render `vowel`.
    pub fn allows(self, vowel: SingleVowel) -> bool {
        match self {
            VowelSubset::Without(excluded) => vowel != excluded,
            VowelSubset::OnlySingle(kept) => vowel == kept,
        }
    }

    /// The subset sharing no single vowel with `self`.
    pub fn complement(self) -> VowelSubset {
        match self {
            VowelSubset::Without(v) => VowelSubset::OnlySingle(v),
            VowelSubset::OnlySingle(v) => VowelSubset::Without(v),
        }
    }

    /// Whether the vowel pool entry `phoneme` survives this subset.
    fn keeps_phoneme(self, phoneme: &str) -> bool {
        SingleVowel::from_phoneme(phoneme).is_none_or(|v| self.allows(v))
    }
}

// ---------------------------------------------------------------------------
// Syllable shapes
// ---------------------------------------------------------------------------

/// The four syllable shapes of the Aslan language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyllableShape {
    /// A lone vowel.
    V,
    /// Consonant then vowel.
    Cv,
    /// Vowel then consonant.
    Vc,
    /// Consonant, vowel, consonant.
    Cvc,
}

impl SyllableShape {
    /// All shapes in catalog order. Weighted picks walk candidates in this
    /// order, so draws 0-2 select V, 3-5 CV, 6-7 VC and 8-9 CVC.
    pub const ALL: [SyllableShape; 4] = [
        SyllableShape::V,
        SyllableShape::Cv,
        SyllableShape::Vc,
        SyllableShape::Cvc,
    ];

    /// Relative frequency out of ten.
    pub fn weight(self) -> usize {
        match self {
            SyllableShape::V | SyllableShape::Cv => 3,
            SyllableShape::Vc | SyllableShape::Cvc => 2,
        }
    }

    pub fn starts_with_consonant(self) -> bool {
        matches!(self, SyllableShape::Cv | SyllableShape::Cvc)
    }

    pub fn ends_with_consonant(self) -> bool {
        matches!(self, SyllableShape::Vc | SyllableShape::Cvc)
    }

    /// Shapes allowed to follow this one. A consonant-ending syllable is
    /// never followed by a consonant-starting one.
    pub fn legal_successors(self) -> &'static [SyllableShape] {
        match self {
            SyllableShape::V | SyllableShape::Cv => &Self::ALL,
            SyllableShape::Vc | SyllableShape::Cvc => &[SyllableShape::V, SyllableShape::Vc],
        }
    }

    /// Uppercase tag used in diagnostics ("V", "CV", "VC", "CVC").
    pub fn key(self) -> &'static str {
        match self {
            SyllableShape::V => "V",
            SyllableShape::Cv => "CV",
            SyllableShape::Vc => "VC",
            SyllableShape::Cvc => "CVC",
        }
    }

    /// Slot pattern, one letter per slot.
    pub fn letters(self) -> &'static str {
        match self {
            SyllableShape::V => "v",
            SyllableShape::Cv => "cv",
            SyllableShape::Vc => "vc",
            SyllableShape::Cvc => "cvc",
        }
    }

    /// Render this shape as an alternation template, optionally restricting
    /// the vowel slot to `vowels`.
    pub fn render(self, vowels: Option<VowelSubset>) -> String {
        let mut out = String::new();
        for (i, slot) in self.letters().chars().enumerate() {
            match slot {
                'c' if i == 0 => out.push_str(&FIRST_CONSONANT_POOL.render()),
                'c' => out.push_str(&LAST_CONSONANT_POOL.render()),
                _ => out.push_str(&render_vowel_slot(vowels)),
            }
        }
        out
    }
}

impl fmt::Display for SyllableShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn render_vowel_slot(vowels: Option<VowelSubset>) -> String {
    match vowels {
        None => VOWEL_POOL.render(),
        Some(subset) => VOWEL_POOL.render_filtered(|p| subset.keeps_phoneme(p)),
    }
}

/// Single vowels a vowel slot restricted by `vowels` can render.
pub fn single_vowels_allowed(vowels: Option<VowelSubset>) -> Vec<SingleVowel> {
    SingleVowel::ALL
        .into_iter()
        .filter(|v| VOWEL_POOL.repetitions_of(v.as_str()) > 0)
        .filter(|v| vowels.is_none_or(|subset| subset.allows(*v)))
        .collect()
}
