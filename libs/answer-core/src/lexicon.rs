//! Word lists used by vocabulary validation.

use crate::normalize::strip_accents;
use crate::types::Language;

/// British spellings and their American equivalents.
pub const REGIONAL_VARIATIONS: &[(&str, &str)] = &[
    ("grey", "gray"),
    ("colour", "color"),
    ("flavour", "flavor"),
    ("analyse", "analyze"),
    ("centre", "center"),
    ("theatre", "theater"),
    ("programme", "program"),
    ("practise", "practice"),
    ("licence", "license"),
    ("defence", "defense"),
    ("offence", "offense"),
    ("realise", "realize"),
    ("organise", "organize"),
    ("recognise", "recognize"),
    ("criticise", "criticize"),
    ("emphasise", "emphasize"),
    ("specialise", "specialize"),
    ("travelling", "traveling"),
    ("modelling", "modeling"),
    ("cancelled", "canceled"),
    ("jewellery", "jewelry"),
    ("marvellous", "marvelous"),
    ("honour", "honor"),
    ("favour", "favor"),
    ("neighbour", "neighbor"),
    ("behaviour", "behavior"),
    ("rumour", "rumor"),
    ("humour", "humor"),
    ("labour", "labor"),
    ("parlour", "parlor"),
];

const EN_SYNONYMS: &[(&str, &[&str])] = &[
    ("happy", &["joyful", "cheerful", "glad", "pleased", "content"]),
    ("sad", &["unhappy", "miserable", "down", "upset"]),
    ("big", &["large", "huge", "enormous", "giant", "massive", "great"]),
    ("small", &["little", "tiny", "mini"]),
    ("good", &["great", "excellent", "wonderful", "fantastic", "amazing"]),
    ("bad", &["awful", "terrible", "horrible", "dreadful"]),
    ("fast", &["quick", "rapid", "speedy", "swift"]),
    ("slow", &["sluggish", "gradual", "leisurely"]),
    ("smart", &["intelligent", "clever", "bright", "brilliant"]),
    ("beautiful", &["pretty", "lovely", "gorgeous", "attractive"]),
    ("rich", &["wealthy", "affluent"]),
    ("poor", &["broke", "impoverished", "needy"]),
    ("old", &["elderly", "aged", "ancient"]),
    ("easy", &["simple", "effortless"]),
    ("difficult", &["hard", "challenging", "tough", "complex"]),
    ("funny", &["hilarious", "amusing", "comical", "humorous"]),
    ("angry", &["mad", "furious", "annoyed", "irritated"]),
    ("tired", &["exhausted", "weary", "sleepy", "fatigued"]),
    ("clean", &["spotless", "pristine", "tidy"]),
    ("dirty", &["filthy", "messy", "grimy"]),
    ("loud", &["noisy", "deafening"]),
    ("quiet", &["silent", "peaceful"]),
    ("strong", &["powerful", "mighty"]),
    ("weak", &["feeble", "frail"]),
    ("brave", &["courageous", "fearless", "bold"]),
    ("scared", &["afraid", "frightened", "terrified"]),
    ("kind", &["nice", "gentle", "caring", "compassionate"]),
    ("mean", &["cruel", "nasty", "unkind"]),
];

const ES_SYNONYMS: &[(&str, &[&str])] = &[
    ("bonito", &["hermoso", "lindo", "bello"]),
    ("rápido", &["veloz", "ligero"]),
    ("casa", &["hogar", "vivienda"]),
    ("coche", &["carro", "auto", "automóvil"]),
    ("trabajo", &["empleo", "ocupación"]),
    ("dinero", &["plata"]),
    ("comida", &["alimento"]),
    ("grande", &["enorme", "gigante"]),
    ("pequeño", &["chico", "diminuto"]),
    ("bueno", &["excelente", "estupendo"]),
    ("malo", &["terrible", "horrible"]),
    ("feliz", &["contento", "alegre"]),
    ("triste", &["deprimido", "melancólico"]),
];

const FR_SYNONYMS: &[(&str, &[&str])] = &[
    ("bon", &["bien", "excellent"]),
    ("mauvais", &["terrible"]),
    ("grand", &["énorme", "immense"]),
    ("petit", &["minuscule"]),
    ("beau", &["joli", "magnifique"]),
    ("laid", &["horrible", "affreux"]),
    ("rapide", &["vite", "véloce"]),
    ("heureux", &["content", "joyeux"]),
    ("triste", &["malheureux", "déprimé"]),
];

/// Contractions and their expansions.
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("i'm", "i am"),
    ("you're", "you are"),
    ("he's", "he is"),
    ("she's", "she is"),
    ("it's", "it is"),
    ("we're", "we are"),
    ("they're", "they are"),
    ("i'll", "i will"),
    ("you'll", "you will"),
    ("he'll", "he will"),
    ("she'll", "she will"),
    ("it'll", "it will"),
    ("we'll", "we will"),
    ("they'll", "they will"),
    ("won't", "will not"),
    ("can't", "cannot"),
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("didn't", "did not"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("haven't", "have not"),
    ("hasn't", "has not"),
    ("hadn't", "had not"),
];

/// Single number words (accents stripped) and their values.
const NUMBER_WORDS: &[(&str, u32)] = &[
    // Spanish
    ("cero", 0),
    ("uno", 1),
    ("una", 1),
    ("dos", 2),
    ("tres", 3),
    ("cuatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("siete", 7),
    ("ocho", 8),
    ("nueve", 9),
    ("diez", 10),
    ("once", 11),
    ("doce", 12),
    ("trece", 13),
    ("catorce", 14),
    ("quince", 15),
    ("dieciseis", 16),
    ("diecisiete", 17),
    ("dieciocho", 18),
    ("diecinueve", 19),
    ("veinte", 20),
    ("veintiuno", 21),
    ("veintiuna", 21),
    ("veintidos", 22),
    ("veintitres", 23),
    ("veinticuatro", 24),
    ("veinticinco", 25),
    ("veintiseis", 26),
    ("veintisiete", 27),
    ("veintiocho", 28),
    ("veintinueve", 29),
    ("treinta", 30),
    ("cuarenta", 40),
    ("cincuenta", 50),
    ("sesenta", 60),
    ("setenta", 70),
    ("ochenta", 80),
    ("noventa", 90),
    ("cien", 100),
    ("ciento", 100),
    // English
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
    ("hundred", 100),
];

const ENGLISH_TENS: &[(&str, u32)] = &[
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

const ENGLISH_UNITS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

/// Synonyms for a word in the given language.
pub fn synonyms(word: &str, language: Language) -> &'static [&'static str] {
    let table = match language {
        Language::En => EN_SYNONYMS,
        Language::Es => ES_SYNONYMS,
        Language::Fr => FR_SYNONYMS,
        Language::Other => return &[],
    };

    let word = word.trim().to_lowercase();
    lookup(table, &word).unwrap_or_default()
}

/// American spelling for a British word, if there is one.
pub fn american_spelling(word: &str) -> Option<&'static str> {
    lookup(REGIONAL_VARIATIONS, word)
}

/// Expansion of a contraction, if `word` is one.
pub fn expand_contraction(word: &str) -> Option<&'static str> {
    lookup(CONTRACTIONS, word)
}

/// Canonical digit form of a number written as digits or words.
///
/// Handles `"24"`, `"twenty-four"`, `"twenty four"` and `"veinticuatro"`.
/// Digit strings are returned unchanged, so `"007"` and `"7"` differ.
pub fn number_value(text: &str) -> Option<String> {
    let cleaned = text.trim().to_lowercase();
    if cleaned.is_empty() {
        return None;
    }

    if cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Some(cleaned);
    }

    let plain = strip_accents(&cleaned);
    if let Some(value) = lookup(NUMBER_WORDS, plain.as_str()) {
        return Some(value.to_string());
    }

    let parts: Vec<&str> = plain
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();

    match parts.as_slice() {
        [tens, unit] => {
            let tens = lookup(ENGLISH_TENS, tens)?;
            let unit = lookup(ENGLISH_UNITS, unit)?;
            Some((tens + unit).to_string())
        }
        _ => None,
    }
}

fn lookup<V: Copy>(table: &[(&str, V)], key: &str) -> Option<V> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
