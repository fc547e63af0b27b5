use unicode_normalization::UnicodeNormalization;

use crate::scheme::{LipiError, Scheme};

// =============================================================================
// Latin-scheme tables: (source, SLP1), longest source first so greedy
// matching consumes digraphs before their prefixes.
// =============================================================================

const IAST_SLP1: &[(&str, &str)] = &[
    ("ai", "E"),
    ("au", "O"),
    ("kh", "K"),
    ("gh", "G"),
    ("ch", "C"),
    ("jh", "J"),
    ("ṭh", "W"),
    ("ḍh", "Q"),
    ("th", "T"),
    ("dh", "D"),
    ("ph", "P"),
    ("bh", "B"),
    ("ā", "A"),
    ("ī", "I"),
    ("ū", "U"),
    ("ṛ", "f"),
    ("ṝ", "F"),
    ("ḷ", "x"),
    ("ḹ", "X"),
    ("ṃ", "M"),
    ("ḥ", "H"),
    ("ṅ", "N"),
    ("ñ", "Y"),
    ("ṭ", "w"),
    ("ḍ", "q"),
    ("ṇ", "R"),
    ("ś", "S"),
    ("ṣ", "z"),
    ("ḻ", "L"),
];

const HK_SLP1: &[(&str, &str)] = &[
    ("lRR", "X"),
    ("RR", "F"),
    ("lR", "x"),
    ("ai", "E"),
    ("au", "O"),
    ("kh", "K"),
    ("gh", "G"),
    ("ch", "C"),
    ("jh", "J"),
    ("Th", "W"),
    ("Dh", "Q"),
    ("th", "T"),
    ("dh", "D"),
    ("ph", "P"),
    ("bh", "B"),
    ("A", "A"),
    ("I", "I"),
    ("U", "U"),
    ("R", "f"),
    ("M", "M"),
    ("H", "H"),
    ("G", "N"),
    ("J", "Y"),
    ("T", "w"),
    ("D", "q"),
    ("N", "R"),
    ("z", "S"),
    ("S", "z"),
    ("L", "L"),
];

/// Letters identical in SLP1 and both Latin source schemes.
const LATIN_PASSTHROUGH: &str = "aiueokgcjtdnpbmyrlvsh";

/// Longest source token in the Latin tables, in chars.
const MAX_TOKEN: usize = 3;

fn table_lookup(table: &[(&'static str, &'static str)], token: &str) -> Option<&'static str> {
    table.iter().find(|(src, _)| *src == token).map(|(_, dst)| *dst)
}

/// Greedy longest-first conversion for the alphabet schemes.
fn latin_to_slp1(
    input: &str,
    table: &[(&'static str, &'static str)],
    scheme: Scheme,
) -> Result<String, LipiError> {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while i < chars.len() {
        let mut matched = None;
        for len in (1..=MAX_TOKEN.min(chars.len() - i)).rev() {
            let token: String = chars[i..i + len].iter().collect();
            if let Some(dst) = table_lookup(table, &token) {
                matched = Some((dst, len));
                break;
            }
        }
        match matched {
            Some((dst, len)) => {
                out.push_str(dst);
                i += len;
            }
            None if LATIN_PASSTHROUGH.contains(chars[i]) => {
                out.push(chars[i]);
                i += 1;
            }
            None => return Err(LipiError::UnmappableChar { c: chars[i], scheme }),
        }
    }
    Ok(out)
}

// =============================================================================
// Devanagari
// =============================================================================

/// Independent vowel (svara) forms.
fn deva_svara(c: char) -> Option<&'static str> {
    let v = match c {
        'अ' => "a",
        'आ' => "A",
        'इ' => "i",
        'ई' => "I",
        'उ' => "u",
        'ऊ' => "U",
        'ऋ' => "f",
        'ॠ' => "F",
        'ऌ' => "x",
        'ॡ' => "X",
        'ए' => "e",
        'ऐ' => "E",
        'ओ' => "o",
        'औ' => "O",
        _ => return None,
    };
    Some(v)
}

/// Dependent vowel signs (matras).
fn deva_matra(c: char) -> Option<&'static str> {
    let v = match c {
        'ा' => "A",
        'ि' => "i",
        'ी' => "I",
        'ु' => "u",
        'ू' => "U",
        'ृ' => "f",
        'ॄ' => "F",
        'ॢ' => "x",
        'ॣ' => "X",
        'े' => "e",
        'ै' => "E",
        'ो' => "o",
        'ौ' => "O",
        _ => return None,
    };
    Some(v)
}

fn deva_consonant(c: char) -> Option<&'static str> {
    let v = match c {
        'क' => "k",
        'ख' => "K",
        'ग' => "g",
        'घ' => "G",
        'ङ' => "N",
        'च' => "c",
        'छ' => "C",
        'ज' => "j",
        'झ' => "J",
        'ञ' => "Y",
        'ट' => "w",
        'ठ' => "W",
        'ड' => "q",
        'ढ' => "Q",
        'ण' => "R",
        'त' => "t",
        'थ' => "T",
        'द' => "d",
        'ध' => "D",
        'न' => "n",
        'प' => "p",
        'फ' => "P",
        'ब' => "b",
        'भ' => "B",
        'म' => "m",
        'य' => "y",
        'र' => "r",
        'ल' => "l",
        'व' => "v",
        'श' => "S",
        'ष' => "z",
        'स' => "s",
        'ह' => "h",
        'ळ' => "L",
        _ => return None,
    };
    Some(v)
}

const VIRAMA: char = '\u{094d}';

/// Abugida-aware conversion: a consonant carries inherent `a` unless a matra
/// follows or a virama suppresses it.
fn devanagari_to_slp1(input: &str) -> Result<String, LipiError> {
    let mut out = String::with_capacity(input.len());
    let mut iter = input.chars().peekable();
    while let Some(c) = iter.next() {
        if let Some(v) = deva_svara(c) {
            out.push_str(v);
            continue;
        }
        if let Some(k) = deva_consonant(c) {
            out.push_str(k);
            match iter.peek() {
                Some(&VIRAMA) => {
                    iter.next();
                }
                Some(&m) if deva_matra(m).is_some() => {
                    out.push_str(deva_matra(m).unwrap_or_default());
                    iter.next();
                }
                _ => out.push('a'),
            }
            continue;
        }
        match c {
            'ं' => out.push('M'),
            'ः' => out.push('H'),
            _ => {
                return Err(LipiError::UnmappableChar {
                    c,
                    scheme: Scheme::Devanagari,
                });
            }
        }
    }
    Ok(out)
}

pub(crate) fn to_slp1_impl(input: &str, from: Scheme) -> Result<String, LipiError> {
    // Compose combining diacritics (IAST) and conjunct sequences up front.
    let input: String = input.nfc().collect();
    match from {
        Scheme::Devanagari => devanagari_to_slp1(&input),
        Scheme::Iast => latin_to_slp1(&input, IAST_SLP1, Scheme::Iast),
        Scheme::HarvardKyoto => latin_to_slp1(&input, HK_SLP1, Scheme::HarvardKyoto),
        Scheme::Slp1 => {
            for c in input.chars() {
                if !padaccheda_varna::is_slp1(c) {
                    return Err(LipiError::UnmappableChar {
                        c,
                        scheme: Scheme::Slp1,
                    });
                }
            }
            Ok(input)
        }
    }
}
