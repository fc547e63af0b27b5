/// Stops (sparsha), velar through labial rows, without the nasals.
pub const STOPS: &str = "kKgGcCjJwWqQtTdDpPbB";

/// Class nasals: velar N, palatal Y, retroflex R, dental n, labial m.
pub const CLASS_NASALS: &str = "NYRnm";

/// Semivowels (antahstha): y, r, l, v.
pub const SEMIVOWELS: &str = "yrlv";

/// Sibilants (ushman): dental s, palatal S, retroflex z.
pub const SIBILANTS: &str = "sSz";

/// Every SLP1 consonant, including h and retroflex L.
pub const CONSONANTS: &str = "kKgGNcCjJYwWqQRtTdDnpPbBmyrlvSzshL";

pub fn is_stop(c: char) -> bool {
    STOPS.contains(c)
}

pub fn is_class_nasal(c: char) -> bool {
    CLASS_NASALS.contains(c)
}

/// Check for any nasal sound: a class nasal or the anusvara.
pub fn is_nasal(c: char) -> bool {
    is_class_nasal(c) || is_anusvara(c)
}

pub fn is_semivowel(c: char) -> bool {
    SEMIVOWELS.contains(c)
}

pub fn is_sibilant(c: char) -> bool {
    SIBILANTS.contains(c)
}

pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(c)
}

/// The anusvara M, assimilable to a class nasal before stops.
pub fn is_anusvara(c: char) -> bool {
    c == 'M'
}

/// The visarga H, the word-final aspirate written for underlying s or r.
pub fn is_visarga(c: char) -> bool {
    c == 'H'
}
