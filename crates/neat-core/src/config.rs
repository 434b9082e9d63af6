//! Configuración de las descripciones autogeneradas.
//! Se carga una sola vez desde variables de entorno (.env opcional).

use std::env;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

/// Prefijo por defecto de cada entrada de la cadena de documentación.
pub const DEFAULT_DOC_PREFIX: &str = "\n@ Decorated by:\t{repr}\n";
/// Longitud máxima por defecto de un argumento renderizado.
pub const DEFAULT_MAX_ARG_REPR: usize = 80;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Configuración global de descripciones, evaluada una sola vez.
pub static DESCRIBE_CONFIG: Lazy<DescribeConfig> = Lazy::new(DescribeConfig::from_env);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeConfig {
    /// Plantilla con el marcador `{repr}`.
    pub doc_prefix: String,
    pub max_arg_repr: usize,
}

impl Default for DescribeConfig {
    fn default() -> Self {
        Self { doc_prefix: DEFAULT_DOC_PREFIX.to_string(),
               max_arg_repr: DEFAULT_MAX_ARG_REPR }
    }
}

impl DescribeConfig {
    /// Lee `NEATCODE_DOC_PREFIX` y `NEATCODE_MAX_ARG_REPR`; valores ausentes o
    /// inválidos caen a los defaults.
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let doc_prefix = env::var("NEATCODE_DOC_PREFIX").ok()
                                                        .filter(|p| p.contains("{repr}"))
                                                        .unwrap_or_else(|| DEFAULT_DOC_PREFIX.to_string());
        let max_arg_repr = env::var("NEATCODE_MAX_ARG_REPR").ok()
                                                            .and_then(|v| v.parse().ok())
                                                            .filter(|n: &usize| *n > 0)
                                                            .unwrap_or(DEFAULT_MAX_ARG_REPR);
        Self { doc_prefix, max_arg_repr }
    }

    /// Formatea una entrada de la cadena de documentación.
    pub fn doc_entry(&self, repr: &str) -> String {
        self.doc_prefix.replace("{repr}", repr)
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
