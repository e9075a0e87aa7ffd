//! Error presenter content: a [`ServerError`] turned into something a person
//! can act on. Lookup is keyed by [`ErrorKind`], never by message text.

use api::{ErrorKind, ServerError};

pub const SUGGESTIONS_HEADING: &str = "Sugerencias:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub title: &'static str,
    pub description: &'static str,
    pub suggestions: &'static [&'static str],
}

impl Presentation {
    pub fn for_kind(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::UsernameTaken => Presentation {
                title: "Nombre de usuario no disponible",
                description: "El nombre de usuario que has elegido ya está en uso. Por favor, elige otro.",
                suggestions: &[
                    "Intenta con un nombre de usuario diferente",
                    "Agrega números o caracteres especiales",
                    "Usa una variación de tu nombre original",
                ],
            },
            ErrorKind::InvalidCredentials => Presentation {
                title: "Inicio de sesión fallido",
                description: "Las credenciales proporcionadas no son válidas. Verifica tu usuario y contraseña.",
                suggestions: &[
                    "Revisa que no haya errores de escritura",
                    "Asegúrate de usar mayúsculas/minúsculas correctamente",
                    "Restablece tu contraseña si es necesario",
                ],
            },
            ErrorKind::Unknown => Presentation {
                title: "Error en la solicitud",
                description: "Ha ocurrido un problema inesperado. Inténtalo de nuevo más tarde.",
                suggestions: &[
                    "Verifica tu conexión a internet",
                    "Recarga la página",
                    "Contacta al soporte técnico si el problema persiste",
                ],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedError {
    pub presentation: Presentation,
    pub status_code: Option<u16>,
}

impl PresentedError {
    /// "Código de error: N", when the server sent a code.
    pub fn status_line(&self) -> Option<String> {
        self.status_code.map(|code| format!("Código de error: {code}"))
    }
}

/// Nothing to show without an error.
pub fn present(error: Option<&ServerError>) -> Option<PresentedError> {
    let error = error?;
    Some(PresentedError {
        presentation: Presentation::for_kind(error.kind()),
        status_code: error.status_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_error_presents_nothing() {
        assert_eq!(present(None), None);
    }

    #[test]
    fn test_username_conflict_has_its_own_entry() {
        let shown = present(Some(&ServerError::new("Username already exists", 409))).unwrap();
        assert_eq!(shown.presentation.title, "Nombre de usuario no disponible");
        assert_eq!(shown.presentation.suggestions.len(), 3);
        assert_eq!(shown.status_line().as_deref(), Some("Código de error: 409"));
    }

    #[test]
    fn test_unknown_messages_fall_back_to_generic_entry() {
        let shown = present(Some(&ServerError::connection())).unwrap();
        assert_eq!(shown.presentation.title, "Error en la solicitud");
        assert_eq!(shown.status_code, Some(500));

        let no_code = ServerError {
            message: "Invalid credentials".into(),
            status_code: None,
        };
        let shown = present(Some(&no_code)).unwrap();
        assert_eq!(shown.presentation.title, "Inicio de sesión fallido");
        assert_eq!(shown.status_line(), None);
    }
}
