//! # Form fields and their validation rules
//!
//! [`Field`] names the five inputs of the credential form. Each field has a
//! normaliser (applied to every keystroke before the value is stored) and a
//! rule (a pure `fn(&str) -> Validation`). Rules are looked up in [`RULES`]
//! rather than branched on, so every rule can be exercised on its own.
//!
//! | Field | Normalised | Valid iff |
//! |-------|------------|-----------|
//! | `username` | lowercased, whitespace removed, first 10 chars | non-empty, ASCII letters/digits only |
//! | `password` | none | ≥ 6 chars with at least one digit |
//! | `email` | none | `local@domain.tld` syntax |
//! | `birthDate` | none | a real calendar date, `YYYY-MM-DD` or `YYYY/MM/DD` |
//! | `fullName` | none (trimmed only for the check) | ≥ 2 chars after trimming |
//!
//! Error texts are shown to end users and stay in Spanish.

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Longest username the form keeps.
pub const USERNAME_MAX_CHARS: usize = 10;
/// Shortest accepted password.
pub const PASSWORD_MIN_CHARS: usize = 6;
/// Shortest accepted full name, after trimming.
pub const FULL_NAME_MIN_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Username,
    Password,
    Email,
    BirthDate,
    FullName,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Username,
        Field::Password,
        Field::Email,
        Field::BirthDate,
        Field::FullName,
    ];

    /// Wire/form name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Password => "password",
            Field::Email => "email",
            Field::BirthDate => "birthDate",
            Field::FullName => "fullName",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Password => "Password",
            Field::Email => "Email",
            Field::BirthDate => "Birth Date",
            Field::FullName => "Full Name",
        }
    }

    /// HTML `type` attribute of the input.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Password => "password",
            Field::BirthDate => "date",
            _ => "text",
        }
    }

    /// Value as it should be stored for raw user input.
    pub fn normalize(self, raw: &str) -> String {
        match self {
            Field::Username => normalize_username(raw),
            _ => raw.to_string(),
        }
    }

    pub fn validate(self, value: &str) -> Validation {
        rule_for(self)(value)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a field is invalid, plus remediation hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub message: String,
    pub details: Vec<String>,
}

impl FieldError {
    pub fn new(message: &str, details: &[&str]) -> Self {
        Self {
            message: message.to_string(),
            details: details.iter().map(|d| d.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(FieldError),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    pub fn error(&self) -> Option<&FieldError> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(err) => Some(err),
        }
    }
}

pub type Rule = fn(&str) -> Validation;

/// Validation rule of every field.
pub const RULES: [(Field, Rule); 5] = [
    (Field::Username, validate_username),
    (Field::Password, validate_password),
    (Field::Email, validate_email),
    (Field::BirthDate, validate_birth_date),
    (Field::FullName, validate_full_name),
];

/// Rules are stored in [`Field::ALL`] order.
pub fn rule_for(field: Field) -> Rule {
    RULES[field as usize].1
}

fn invalid(message: &str, details: &[&str]) -> Validation {
    Validation::Invalid(FieldError::new(message, details))
}

pub fn normalize_username(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .take(USERNAME_MAX_CHARS)
        .collect()
}

pub fn validate_username(value: &str) -> Validation {
    if value.is_empty() {
        return invalid(
            "El nombre de usuario es obligatorio",
            &["No puede estar vacío", "Máximo 10 caracteres", "Solo letras y números"],
        );
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return invalid(
            "Formato de nombre de usuario inválido",
            &[
                "Solo se permiten letras y números",
                "Sin espacios",
                "Sin caracteres especiales",
            ],
        );
    }
    Validation::Valid
}

pub fn validate_password(value: &str) -> Validation {
    if value.is_empty() {
        return invalid(
            "La contraseña es obligatoria",
            &[
                "Mínimo 6 caracteres",
                "Al menos un número",
                "Combinación de letras y números",
            ],
        );
    }
    let long_enough = value.chars().count() >= PASSWORD_MIN_CHARS;
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if !long_enough || !has_digit {
        return invalid(
            "Contraseña débil",
            &[
                "Mínimo 6 caracteres",
                "Al menos un número",
                "Combina mayúsculas, minúsculas y símbolos",
            ],
        );
    }
    Validation::Valid
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@([A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern compiles")
});

pub fn is_email(value: &str) -> bool {
    let Some((local, _)) = value.rsplit_once('@') else {
        return false;
    };
    local.len() <= 64 && value.len() <= 254 && EMAIL_RE.is_match(value)
}

pub fn validate_email(value: &str) -> Validation {
    if value.is_empty() {
        return invalid(
            "El correo electrónico es obligatorio",
            &[
                "No puede estar vacío",
                "Formato válido requerido",
                "Ejemplo: nombre@dominio.com",
            ],
        );
    }
    if !is_email(value) {
        return invalid(
            "Correo electrónico inválido",
            &[
                "Debe contener @ y dominio",
                "Sin espacios",
                "Formato correcto: nombre@dominio.com",
            ],
        );
    }
    Validation::Valid
}

pub fn is_calendar_date(value: &str) -> bool {
    ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .any(|format| NaiveDate::parse_from_str(value, format).is_ok())
}

pub fn validate_birth_date(value: &str) -> Validation {
    if value.is_empty() {
        return invalid(
            "Fecha de nacimiento requerida",
            &["Selecciona una fecha válida", "Debes ser mayor de edad"],
        );
    }
    if !is_calendar_date(value) {
        return invalid(
            "Fecha de nacimiento inválida",
            &["Formato de fecha incorrecto", "Selecciona una fecha real"],
        );
    }
    Validation::Valid
}

pub fn validate_full_name(value: &str) -> Validation {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return invalid(
            "Nombre completo es obligatorio",
            &[
                "Mínimo 2 caracteres",
                "Incluye nombre y apellido",
                "Sin números ni caracteres especiales",
            ],
        );
    }
    if trimmed.chars().count() < FULL_NAME_MIN_CHARS {
        return invalid(
            "Nombre muy corto",
            &["Mínimo 2 caracteres", "Incluye nombre y apellido"],
        );
    }
    Validation::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(v: &Validation) -> usize {
        v.error().map(|e| e.details.len()).unwrap_or(0)
    }

    #[test]
    fn test_rules_are_in_field_order() {
        for (i, field) in Field::ALL.into_iter().enumerate() {
            assert_eq!(RULES[i].0, field);
        }
    }

    #[test]
    fn test_username_is_lowercased_stripped_and_truncated() {
        assert_eq!(normalize_username("  AB cd!!"), "abcd!!");
        assert_eq!(normalize_username("Juan\tPerez Lopez"), "juanperezl");
        assert_eq!(normalize_username("   "), "");
    }

    #[test]
    fn test_username_with_symbols_is_rejected() {
        let stored = Field::Username.normalize("  AB cd!!");
        let result = Field::Username.validate(&stored);
        let err = result.error().expect("non-alphanumeric username");
        assert_eq!(err.message, "Formato de nombre de usuario inválido");
        assert_eq!(err.details.len(), 3);
        assert!(Field::Username.validate("abcd").is_valid());
        assert_eq!(details(&Field::Username.validate("")), 3);
    }

    #[test]
    fn test_username_allows_only_ascii_alphanumerics() {
        assert!(!validate_username("josé").is_valid());
        assert!(validate_username("user01").is_valid());
    }

    #[test]
    fn test_password_needs_length_and_a_digit() {
        assert!(validate_password("abc123").is_valid());
        assert!(!validate_password("abc12").is_valid());
        assert!(!validate_password("abcdef").is_valid());
        let empty = validate_password("");
        assert_eq!(empty.error().unwrap().message, "La contraseña es obligatoria");
        assert_eq!(details(&empty), 3);
        assert_eq!(details(&validate_password("abcdef")), 3);
    }

    #[test]
    fn test_email_syntax() {
        for good in ["ana@example.com", "a.b+tag@sub.domain.io", "x_y@d-1.org"] {
            assert!(is_email(good), "{good}");
        }
        for bad in [
            "ana",
            "ana@",
            "@example.com",
            "ana@example",
            "ana @example.com",
            ".ana@example.com",
            "a..b@example.com",
            "ana@-example.com",
            "ana@example.c",
        ] {
            assert!(!is_email(bad), "{bad}");
        }
        assert_eq!(details(&validate_email("")), 3);
        assert_eq!(details(&validate_email("nope")), 3);
    }

    #[test]
    fn test_birth_date_must_exist_on_the_calendar() {
        assert!(validate_birth_date("1990-04-01").is_valid());
        assert!(validate_birth_date("2000/02/29").is_valid());
        assert!(!validate_birth_date("2001-02-29").is_valid());
        assert!(!validate_birth_date("1990-13-01").is_valid());
        assert!(!validate_birth_date("01-04-1990").is_valid());
        assert_eq!(details(&validate_birth_date("")), 2);
        assert_eq!(details(&validate_birth_date("mañana")), 2);
    }

    #[test]
    fn test_full_name_is_checked_trimmed() {
        assert!(validate_full_name("  Al ").is_valid());
        assert_eq!(details(&validate_full_name("   ")), 3);
        let short = validate_full_name(" A ");
        assert_eq!(short.error().unwrap().message, "Nombre muy corto");
        assert_eq!(details(&short), 2);
    }

    #[test]
    fn test_only_username_is_normalized() {
        assert_eq!(Field::FullName.normalize("  Ana  "), "  Ana  ");
        assert_eq!(Field::Password.normalize(" A1 b2 "), " A1 b2 ");
    }
}
