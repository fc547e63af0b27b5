//! The built-in reverse sandhi rule set.
//!
//! Each rule names the surface character it triggers on, optional
//! single-character class patterns for the neighboring characters, and the
//! `left_right` expansions that could underlie the surface character in that
//! context. A right context of `$` matches only at the end of the input.
//!
//! Coverage follows the classical vowel, visarga, and nasal rules plus a
//! partial jhalāṁ jaśo 'nte. Still missing: eco 'yavāyāvaḥ, the remaining
//! jhalāṁ jaśo pairs, lopaḥ śākalyasya, and most consonant-cluster sandhi.

use crate::table::RuleSpec;

/// Short constructors keep the rule list tabular.
const fn ctx(
    left: Option<&'static str>,
    trigger: char,
    right: Option<&'static str>,
    expansions: &'static [&'static str],
    citation: &'static str,
) -> RuleSpec {
    RuleSpec::Context {
        left,
        trigger,
        right,
        expansions,
        citation,
    }
}

const fn plain(
    trigger: char,
    expansions: &'static [&'static str],
    citation: &'static str,
) -> RuleSpec {
    RuleSpec::Plain {
        trigger,
        expansions,
        citation,
    }
}

pub const CLASSICAL_RULES: &[RuleSpec] = &[
    // Like vowels merge long.
    ctx(None, 'A', Some("[^ieouEOfFxX]"), &["a_a", "a_A", "A_a", "A_A"], "akaḥ savarṇe dīrghaḥ (6.1.101)"),
    ctx(None, 'I', Some("[^ieouEOfFxX]"), &["i_i", "i_I", "I_i", "I_I"], "akaḥ savarṇe dīrghaḥ (6.1.101)"),
    ctx(None, 'U', Some("[^ieouEOfFxX]"), &["u_u", "u_U", "U_u", "U_U"], "akaḥ savarṇe dīrghaḥ (6.1.101)"),
    ctx(
        None,
        'F',
        Some("[^ieouEOfFxX]"),
        &["f_f", "f_x", "x_f", "F_x", "x_F", "F_F"],
        "akaḥ savarṇe dīrghaḥ (6.1.101)",
    ),
    // Final As/as before voiced sounds.
    ctx(None, 'A', Some("[^kKcCtTwWSzs]"), &["As_"], "bho bhago agho apūrvasya yo 'śi (8.3.17), lopaḥ śākalyasya (8.3.19)"),
    ctx(None, 'a', Some("[^akKcCtTwWSzs]"), &["as_"], "ato ror aplutād aplute (6.1.113)"),
    // a/A + i/u-class gives guna.
    ctx(None, 'e', Some("[^ieouEOfFxX]"), &["e_a", "a_i", "a_I", "A_i", "A_I"], "ād guṇaḥ (6.1.87)"),
    ctx(None, 'o', Some("[^ieouEOfFxX]"), &["o_o", "a_u", "a_U", "A_u", "A_U"], "ād guṇaḥ (6.1.87)"),
    ctx(
        None,
        'o',
        Some("[^ieouEOfFxXkKpP]"),
        &["as_", "as_a"],
        "sasajuṣo ruḥ (8.2.66), ato ror aplutād aplute (6.1.113), haśi ca (6.1.114)",
    ),
    // a/A + e/o-class gives vrddhi.
    ctx(None, 'E', Some("[^ieouEOfFxX]"), &["E_E", "a_e", "A_e", "a_E", "A_E"], "vṛddhir eci (6.1.88)"),
    ctx(None, 'O', Some("[^ieouEOfFxX]"), &["O_O", "a_o", "A_o", "a_O", "A_O"], "vṛddhir eci (6.1.88)"),
    // Vocalic r/l resurface as r/l after a.
    ctx(Some("a"), 'r', Some("[^ieouEOfFxX]"), &["f_"], "uraṇ raparaḥ (1.1.51)"),
    ctx(Some("a"), 'l', Some("[^ieouEOfFxX]"), &["x_"], "uraṇ raparaḥ (1.1.51)"),
    // r from underlying s after non-a vowels.
    ctx(Some("[iIuUeEoO]"), 'r', None, &["s_"], "sasajuṣo ruḥ (8.2.66)"),
    // Word-final deaspiration/voicing alternations.
    plain('d', &["t_", "d_"], "jhalāṁ jaśo 'nte (8.2.39), partial"),
    plain('g', &["k_", "g_"], "jhalāṁ jaśo 'nte (8.2.39), partial"),
    // Visarga before voiceless stops.
    ctx(None, 'H', Some("[kKpPtTwW]"), &["s_", "r_"], "kupvoḥ kaḥ pau ca (8.3.37)"),
    ctx(None, 's', Some("[tTkKpP]"), &["s_", "r_"], "visarjanīyasya saḥ (8.3.36)"),
    ctx(None, 'z', Some("[wWkKpP]"), &["s_", "r_"], "visarjanīyasya saḥ (8.3.36), ṣṭunā ṣṭuḥ (8.4.41)"),
    ctx(None, 'S', Some("[cC]"), &["s_", "r_"], "visarjanīyasya saḥ (8.3.36), ścunā ścuḥ (8.4.40)"),
    ctx(Some("[iIuUfFxX]"), 'S', None, &["s_"], "apadāntasya mūrdhanyaḥ (8.3.55), iṇkoḥ (8.3.57)"),
    // Final m becomes anusvara.
    plain('M', &["m_", "M_"], "mo 'nusvāraḥ (8.3.23)"),
    // Semivowels from i/u before dissimilar vowels.
    ctx(None, 'y', Some("[aAuUeEoO]"), &["i_", "I_"], "iko yaṇ aci (6.1.77)"),
    ctx(None, 'v', Some("[aAuUeEoO]"), &["u_", "U_"], "iko yaṇ aci (6.1.77)"),
    // Anusvara assimilated to a class nasal.
    plain('N', &["N_", "M_"], "anusvārasya yayi parasavarṇaḥ (8.4.58)"),
    plain('Y', &["Y_", "M_"], "anusvārasya yayi parasavarṇaḥ (8.4.58)"),
    plain('R', &["R_", "M_"], "anusvārasya yayi parasavarṇaḥ (8.4.58)"),
    plain('n', &["n_", "M_"], "anusvārasya yayi parasavarṇaḥ (8.4.58)"),
    plain('m', &["m_", "M_"], "anusvārasya yayi parasavarṇaḥ (8.4.58)"),
    // Visarga at the end of the input.
    ctx(None, 'H', Some("$"), &["s_", "r_"], "kharavasānayor visarjanīyaḥ (8.3.15)"),
    // Sibilants license no boundary outside the contexts above.
    RuleSpec::Forbidden { trigger: 's' },
    RuleSpec::Forbidden { trigger: 'S' },
    RuleSpec::Forbidden { trigger: 'z' },
];
