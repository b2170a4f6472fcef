//! Closed-class Spanish word lists.
//!
//! Five fixed tables of lowercase tokens: determiners, prepositions,
//! pronouns, conjunctions, and common adverbs. Gendered and plural forms are
//! listed explicitly; nothing here inflects words.
//!
//! Some tokens appear in more than one table (`la`, `este`, `que`, ...), and
//! a few pronoun entries span two words (`cada uno`). Both are kept as-is.

/// Determiners: articles, possessives, demonstratives, quantifiers,
/// numerals, and interrogatives.
pub static DETERMINERS: &[&str] = &[
    "el", "la", "los", "las", "un", "una", "unos", "unas", "mi", "mis", "tu", "tus", "su", "sus",
    "nuestro", "nuestra", "nuestros", "nuestras", "vuestro", "vuestra", "vuestros", "vuestras",
    "este", "esta", "estos", "estas", "ese", "esa", "esos", "esas", "aquel", "aquella",
    "aquellos", "aquellas", "algún", "alguna", "algunos", "algunas", "ningún", "ninguna",
    "ningunos", "ningunas", "cada", "otro", "otra", "otros", "otras", "varios", "varias", "mucho",
    "mucha", "muchos", "muchas", "poco", "poca", "pocos", "pocas", "demasiado", "demasiada",
    "demasiados", "demasiadas", "bastante", "bastantes", "todo", "toda", "todos", "todas",
    "cierto", "cierta", "ciertos", "ciertas", "uno", "una", "dos", "tres", "cuatro", "cinco",
    "seis", "siete", "ocho", "nueve", "diez", "primer", "primero", "primera", "segundo",
    "segunda", "tercer", "tercero", "tercera", "medio", "media", "medios", "medias", "qué",
    "cuál", "cuánto", "cuánta", "cuántos", "cuántas",
];

/// Prepositions.
pub static PREPOSITIONS: &[&str] = &[
    "a", "ante", "bajo", "cabe", "con", "contra", "de", "desde", "en", "entre", "hacia", "hasta",
    "para", "por", "según", "sin", "so", "sobre", "tras",
];

/// Personal, demonstrative, relative, indefinite, and interrogative pronouns.
pub static PRONOUNS: &[&str] = &[
    "yo", "tú", "usted", "él", "ella", "nosotros", "nosotras", "vosotros", "vosotras", "ustedes",
    "ellos", "ellas", "me", "te", "se", "nos", "os", "lo", "la", "los", "las", "le", "les",
    "este", "esta", "estos", "estas", "ese", "esa", "esos", "esas", "aquel", "aquella",
    "aquellos", "aquellas", "que", "quien", "quienes", "cual", "cuales", "cuyo", "cuya", "cuyos",
    "cuyas", "alguien", "algo", "nadie", "nada", "cada uno", "cada una", "uno", "una", "unos",
    "unas", "otro", "otra", "otros", "otras", "cierto", "cierta", "ciertos", "ciertas", "varios",
    "varias", "mucho", "mucha", "muchos", "muchas", "poco", "poca", "pocos", "pocas", "quién",
    "qué", "cuál", "cuánto", "cuánta", "cuántos", "cuántas",
];

/// Coordinating and subordinating conjunctions.
pub static CONJUNCTIONS: &[&str] = &[
    "y", "e", "ni", "que", "o", "u", "pero", "aunque", "sino", "mas", "porque", "pues", "como",
    "si",
];

/// Common adverbs of place, time, degree, and manner.
pub static COMMON_ADVERBS: &[&str] = &[
    "aquí", "allí", "ahí", "allá", "ayer", "hoy", "mañana", "antes", "después", "luego",
    "siempre", "nunca", "jamás", "quizás", "quizá", "muy", "más", "menos", "tan", "así", "bien",
    "mal", "casi", "ya", "todavía", "pronto", "temprano",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tables() -> [&'static [&'static str]; 5] {
        [
            DETERMINERS,
            PREPOSITIONS,
            PRONOUNS,
            CONJUNCTIONS,
            COMMON_ADVERBS,
        ]
    }

    #[test]
    fn tables_are_lowercase() {
        for table in all_tables() {
            for word in table {
                assert_eq!(*word, word.to_lowercase(), "not lowercase: {word}");
            }
        }
    }

    #[test]
    fn tables_have_no_blank_entries() {
        for table in all_tables() {
            assert!(table.iter().all(|w| !w.trim().is_empty()));
        }
    }

    #[test]
    fn shared_entries_are_kept() {
        assert!(DETERMINERS.contains(&"la"));
        assert!(PRONOUNS.contains(&"la"));
        assert!(PRONOUNS.contains(&"que"));
        assert!(CONJUNCTIONS.contains(&"que"));
    }

    #[test]
    fn multi_word_pronouns_are_listed() {
        assert!(PRONOUNS.contains(&"cada uno"));
        assert!(PRONOUNS.contains(&"cada una"));
    }

    #[test]
    fn content_words_from_sample_are_absent() {
        for word in ["perro", "gato", "corre", "duerme", "párrafo"] {
            for table in all_tables() {
                assert!(!table.contains(&word), "{word} should be a content word");
            }
        }
    }
}
