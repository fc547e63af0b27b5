//! Traditional grammatical terms and their compact tag codes.
//!
//! The vocabulary is keyed on `(term, category)` because several Devanagari
//! terms are reused across grammatical categories with different codes:
//! एकवचनम् is `np-sg` on a finite verb but `sg` on a nominal, and प्राथमिकः
//! is `v-cj-prim` for a conjugated verb but `kr-cj-prim` for a krdanta.
//! A flat map would silently collapse these to whichever entry came last.
//!
//! The splitter never reads this table; it exists for rendering tag codes
//! back into traditional terminology and for interpreting user-supplied
//! filter terms.

/// The grammatical category a term is being used in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagCategory {
    /// Nominal morphology: case, number, gender.
    Nominal,
    /// Finite verb morphology: conjugation class, tense/mood, person, number.
    Verbal,
    /// Participles and other primary derivatives.
    Krdanta,
    /// Indeclinables and their derivational subtypes.
    Avyaya,
}

/// `(term, category, code)` rows. Terms may repeat across categories; a
/// `(term, category)` pair is unique.
const VOCABULARY: &[(&str, TagCategory, &str)] = &[
    // Finite verb: conjugation class.
    ("प्राथमिकः", TagCategory::Verbal, "v-cj-prim"),
    ("णिजन्तः", TagCategory::Verbal, "v-cj-ca"),
    ("यङन्तः", TagCategory::Verbal, "v-cj-int"),
    ("सन्नन्तः", TagCategory::Verbal, "v-cj-des"),
    // Finite verb: present-system moods, active and passive.
    ("लट्", TagCategory::Verbal, "sys-prs-md-pr"),
    ("लोट्", TagCategory::Verbal, "sys-prs-md-ip"),
    ("विधिलिङ्", TagCategory::Verbal, "sys-prs-md-op"),
    ("लङ्", TagCategory::Verbal, "sys-prs-md-im"),
    ("लट्-कर्मणि", TagCategory::Verbal, "sys-pas-md-pr"),
    ("लोट्-कर्मणि", TagCategory::Verbal, "sys-pas-md-ip"),
    ("विधिलिङ्-कर्मणि", TagCategory::Verbal, "sys-pas-md-op"),
    ("लङ्-कर्मणि", TagCategory::Verbal, "sys-pas-md-im"),
    // Finite verb: other tense systems.
    ("लृट्", TagCategory::Verbal, "sys-tp-fut"),
    ("लिट्", TagCategory::Verbal, "sys-tp-prf"),
    ("लुङ्", TagCategory::Verbal, "sys-tp-aor"),
    ("आगमाभावयुक्तलुङ्", TagCategory::Verbal, "sys-tp-inj"),
    ("लृङ्", TagCategory::Verbal, "sys-tp-cnd"),
    ("आशीर्लिङ्", TagCategory::Verbal, "sys-tp-ben"),
    ("लुट्", TagCategory::Verbal, "sys-pef"),
    // Finite verb: number and person.
    ("एकवचनम्", TagCategory::Verbal, "np-sg"),
    ("द्विवचनम्", TagCategory::Verbal, "np-du"),
    ("बहुवचनम्", TagCategory::Verbal, "np-pl"),
    ("उत्तमपुरुषः", TagCategory::Verbal, "fst"),
    ("मध्यमपुरुषः", TagCategory::Verbal, "snd"),
    ("प्रथमपुरुषः", TagCategory::Verbal, "trd"),
    // Nominal: case.
    ("प्रथमाविभक्तिः", TagCategory::Nominal, "na-nom"),
    ("संबोधनविभक्तिः", TagCategory::Nominal, "na-voc"),
    ("द्वितीयाविभक्तिः", TagCategory::Nominal, "na-acc"),
    ("तृतीयाविभक्तिः", TagCategory::Nominal, "na-ins"),
    ("चतुर्थीविभक्तिः", TagCategory::Nominal, "na-dat"),
    ("पञ्चमीविभक्तिः", TagCategory::Nominal, "na-abl"),
    ("षष्ठीविभक्तिः", TagCategory::Nominal, "na-gen"),
    ("सप्तमीविभक्तिः", TagCategory::Nominal, "na-loc"),
    // Nominal: number and gender.
    ("एकवचनम्", TagCategory::Nominal, "sg"),
    ("द्विवचनम्", TagCategory::Nominal, "du"),
    ("बहुवचनम्", TagCategory::Nominal, "pl"),
    ("पुंल्लिङ्गम्", TagCategory::Nominal, "mas"),
    ("स्त्रीलिङ्गम्", TagCategory::Nominal, "fem"),
    ("नपुंसकलिङ्गम्", TagCategory::Nominal, "neu"),
    ("सङ्ख्या", TagCategory::Nominal, "dei"),
    // Indeclinables.
    ("अव्ययम्", TagCategory::Avyaya, "uf"),
    ("क्रियाविशेषणम्", TagCategory::Avyaya, "ind"),
    ("उद्गारः", TagCategory::Avyaya, "interj"),
    ("निपातम्", TagCategory::Avyaya, "parti"),
    ("चादिः", TagCategory::Avyaya, "prep"),
    ("संयोजकः", TagCategory::Avyaya, "conj"),
    ("तसिल्", TagCategory::Avyaya, "tasil"),
    ("उपसर्गः", TagCategory::Avyaya, "upsrg"),
    ("अव्ययधातुरूप-प्राथमिकः", TagCategory::Avyaya, "vu-cj-prim"),
    ("अव्ययधातुरूप-णिजन्तः", TagCategory::Avyaya, "vu-cj-ca"),
    ("अव्ययधातुरूप-यङन्तः", TagCategory::Avyaya, "vu-cj-int"),
    ("अव्ययधातुरूप-सन्नन्तः", TagCategory::Avyaya, "vu-cj-des"),
    ("तुमुन्", TagCategory::Avyaya, "iv-inf"),
    ("क्त्वा", TagCategory::Avyaya, "iv-abs"),
    ("क्त्वा-प्राथमिकः", TagCategory::Avyaya, "ab-cj-prim"),
    ("क्त्वा-णिजन्तः", TagCategory::Avyaya, "ab-cj-ca"),
    ("क्त्वा-यङन्तः", TagCategory::Avyaya, "ab-cj-int"),
    ("क्त्वा-सन्नन्तः", TagCategory::Avyaya, "ab-cj-des"),
    // Krdanta: conjugation class of the underlying stem.
    ("प्राथमिकः", TagCategory::Krdanta, "kr-cj-prim"),
    ("णिजन्तः", TagCategory::Krdanta, "kr-cj-ca"),
    ("यङन्तः", TagCategory::Krdanta, "kr-cj-int"),
    ("सन्नन्तः", TagCategory::Krdanta, "kr-cj-des"),
    // Krdanta: participle kinds.
    ("कर्मणिभूतकृदन्तः", TagCategory::Krdanta, "ppp"),
    ("कर्तरिभूतकृदन्तः", TagCategory::Krdanta, "ppa"),
    ("कर्मणिवर्तमानकृदन्तः", TagCategory::Krdanta, "pprp"),
    ("कर्तरिवर्तमानकृदन्त-परस्मैपदी", TagCategory::Krdanta, "ppr-para"),
    ("कर्तरिवर्तमानकृदन्त-आत्मनेपदी", TagCategory::Krdanta, "ppr-atma"),
    ("पूर्णभूतकृदन्त-परस्मैपदी", TagCategory::Krdanta, "ppft-para"),
    ("पूर्णभूतकृदन्त-आत्मनेपदी", TagCategory::Krdanta, "ppft-atma"),
    ("कर्मणिभविष्यत्कृदन्तः", TagCategory::Krdanta, "pfutp"),
    ("कर्तरिभविष्यत्कृदन्त-परस्मैपदी", TagCategory::Krdanta, "pfut-para"),
    ("कर्तरिभविष्यत्कृदन्त-आत्मनेपदी", TagCategory::Krdanta, "pfut-atma"),
    // Krdanta: gerundive suffixes, voice, compound positions.
    ("य", TagCategory::Krdanta, "gya"),
    ("ईय", TagCategory::Krdanta, "iya"),
    ("तव्य", TagCategory::Krdanta, "tav"),
    ("परस्मैपदी", TagCategory::Krdanta, "para"),
    ("आत्मनेपदी", TagCategory::Krdanta, "atma"),
    ("कर्मणि", TagCategory::Krdanta, "pass"),
    ("कृदन्तः", TagCategory::Krdanta, "pa"),
    ("समासपूर्वपदनामपदम्", TagCategory::Nominal, "iic"),
    ("समासपूर्वपदकृदन्तः", TagCategory::Krdanta, "iip"),
    ("समासपूर्वपदधातुः", TagCategory::Verbal, "iiv"),
];

/// The code for a term used in the given category.
pub fn code_for(term: &str, category: TagCategory) -> Option<&'static str> {
    VOCABULARY
        .iter()
        .find(|(t, c, _)| *t == term && *c == category)
        .map(|(_, _, code)| *code)
}

/// The traditional term behind a code, with the category it belongs to.
pub fn term_for(code: &str) -> Option<(&'static str, TagCategory)> {
    VOCABULARY
        .iter()
        .find(|(_, _, k)| *k == code)
        .map(|(term, category, _)| (*term, *category))
}
