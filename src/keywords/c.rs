use once_cell::sync::Lazy;

use super::table::KeywordTable;

/// C (C99/C11) reserved words and their Spanish translations.
pub const C_KEYWORD_PAIRS: [(&str, &str); 37] = [
    ("auto", "automatico"),
    ("break", "romper"),
    ("case", "caso"),
    ("char", "caracter"),
    ("const", "constante"),
    ("continue", "continuar"),
    ("default", "defecto"),
    ("do", "hacer"),
    ("double", "doble"),
    ("else", "si_no"),
    ("enum", "enumeracion"),
    ("extern", "externo"),
    ("float", "flotante"),
    ("for", "para"),
    ("goto", "ir_a"),
    ("if", "si"),
    ("inline", "en_linea"),
    ("int", "entero"),
    ("long", "largo"),
    ("register", "registro"),
    ("restrict", "restringido"),
    ("return", "retornar"),
    ("short", "corto"),
    ("signed", "con_signo"),
    ("sizeof", "tamano_de"),
    ("static", "estatico"),
    ("struct", "estructura"),
    ("switch", "segun"),
    ("typedef", "definir_tipo"),
    ("union", "union"),
    ("unsigned", "sin_signo"),
    ("void", "vacio"),
    ("volatile", "volatil"),
    ("while", "mientras"),
    ("_Bool", "_Booleano"),
    ("_Complex", "_Complejo"),
    ("_Imaginary", "_Imaginario"),
];

/// Shared, read-only copy of the C keyword table.
pub static C_KEYWORDS: Lazy<KeywordTable> = Lazy::new(c_keywords);

/// Build a new C keyword table.
pub fn c_keywords() -> KeywordTable {
    match KeywordTable::new(C_KEYWORD_PAIRS) {
        Ok(table) => table,
        Err(err) => panic!("Built-in C keyword table is invalid: {err}"),
    }
}
