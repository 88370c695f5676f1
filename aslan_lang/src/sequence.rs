// Syllable sequence builder.
//
// Grows a sequence of N syllables one position at a time. The first shape is
// picked by weight among all four shapes; every later shape is picked by
// weight among the legal successors of the previous one. All randomness comes
// from an injected `IntegerSource`, called in a fixed order:
//
//   shape pick for position 1,
//   shape pick for position 2, [vowel subset draw for the 1|2 boundary],
//   shape pick for position 3, [vowel subset draw for the 2|3 boundary],
//   ...
//
// The subset draw only happens across a vowel-adjacent boundary (the previous
// syllable does not end with a consonant and the next does not start with
// one) whose left syllable has no subset yet. The right syllable then gets the
// complement, so the two can never both render the same bare vowel. A
// syllable's subset is settled before the syllable is materialized: the
// builder holds the newest syllable as "pending" until its successor has been
// picked.
//
// Weighted picks are a discrete inverse-CDF: draw in `[0, total_weight)`, walk
// the candidates in order, return the first one whose cumulative weight
// exceeds the draw. Same draw and same candidate order give the same result.

use aslan_prng::IntegerSource;

use crate::catalog::{SingleVowel, SyllableShape, VowelSubset, single_vowels_allowed};

/// Anything that can be chosen by weight.
pub trait Weighted {
    fn weight(&self) -> usize;
}

impl Weighted for SyllableShape {
    fn weight(&self) -> usize {
        SyllableShape::weight(*self)
    }
}

impl Weighted for VowelSubset {
    fn weight(&self) -> usize {
        1
    }
}

/// Pick one candidate by weight with a single draw from `source`.
///
/// A draw at or past the total weight (a misbehaving source) selects the last
/// candidate. Panics if `candidates` is empty.
pub fn pick_weighted<T, S>(candidates: &[T], source: &mut S) -> T
where
    T: Weighted + Copy,
    S: IntegerSource + ?Sized,
{
    let total: usize = candidates.iter().map(Weighted::weight).sum();
    let mut draw = source.next_below(total);
    if draw >= total {
        log::warn!("integer source returned {draw} for bound {total}, using last candidate");
    }
    for candidate in candidates {
        let weight = candidate.weight();
        if draw < weight {
            return *candidate;
        }
        draw -= weight;
    }
    candidates[candidates.len() - 1]
}

/// One syllable of a generated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyllableInstance {
    shape: SyllableShape,
    vowels: Option<VowelSubset>,
}

impl SyllableInstance {
    pub fn new(shape: SyllableShape, vowels: Option<VowelSubset>) -> Self {
        Self { shape, vowels }
    }

    pub fn shape(&self) -> SyllableShape {
        self.shape
    }

    /// Restriction on the vowel slot, if one was assigned.
    pub fn vowels(&self) -> Option<VowelSubset> {
        self.vowels
    }

    /// The alternation template for this syllable.
    pub fn rendered_template(&self) -> String {
        self.shape.render(self.vowels)
    }

    /// Bare single vowels this syllable's vowel slot can render.
    pub fn single_vowels(&self) -> Vec<SingleVowel> {
        single_vowels_allowed(self.vowels)
    }
}

/// An ordered, immutable run of syllables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyllableSequence {
    syllables: Vec<SyllableInstance>,
}

impl SyllableSequence {
    pub fn syllables(&self) -> &[SyllableInstance] {
        &self.syllables
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SyllableInstance> {
        self.syllables.iter()
    }
}

impl<'a> IntoIterator for &'a SyllableSequence {
    type Item = &'a SyllableInstance;
    type IntoIter = std::slice::Iter<'a, SyllableInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.syllables.iter()
    }
}

/// Whether the boundary between `prev` and `next` touches vowels on both
/// sides, so both could render the same bare vowel back to back.
pub fn is_vowel_boundary(prev: SyllableShape, next: SyllableShape) -> bool {
    !prev.ends_with_consonant() && !next.starts_with_consonant()
}

/// Build a sequence of exactly `n` syllables.
///
/// `n < 1` yields an empty sequence without touching `source`; callers that
/// require at least one syllable validate before calling.
pub fn build_sequence<S>(n: i32, source: &mut S) -> SyllableSequence
where
    S: IntegerSource + ?Sized,
{
    if n < 1 {
        return SyllableSequence::default();
    }
    let count = n as usize;
    let mut syllables = Vec::with_capacity(count);

    let mut pending_shape = pick_weighted(&SyllableShape::ALL, source);
    let mut pending_vowels: Option<VowelSubset> = None;

    for _ in 1..count {
        let next_shape = pick_weighted(pending_shape.legal_successors(), source);
        let mut next_vowels = None;

        if is_vowel_boundary(pending_shape, next_shape) {
            let prev_vowels = match pending_vowels {
                Some(subset) => subset,
                None => pick_weighted(&VowelSubset::ALL, source),
            };
            pending_vowels = Some(prev_vowels);
            next_vowels = Some(prev_vowels.complement());
        }

        syllables.push(SyllableInstance::new(pending_shape, pending_vowels));
        pending_shape = next_shape;
        pending_vowels = next_vowels;
    }
    syllables.push(SyllableInstance::new(pending_shape, pending_vowels));

    let sequence = SyllableSequence { syllables };
    log::debug!(
        "built {}-syllable sequence {:?}",
        sequence.len(),
        crate::template::shape_key_sequence(&sequence)
    );
    sequence
}
