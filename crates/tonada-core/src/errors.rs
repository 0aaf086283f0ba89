// crates/tonada-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo de Tonada.
///
/// Las capas superiores (CLI de humo, harness, etc.) deberían mapear este
/// error a mensajes de usuario o logs.
#[derive(Debug, Error)]
pub enum CoreError {
  /// El almacén de datos rechazó la consulta o no es alcanzable.
  /// Se propaga tal cual desde la capa de persistencia; fatal solo para
  /// esa invocación.
  #[error("repository error: {0}")]
  Repository(String),

  /// Nombre de reporte desconocido para el catálogo.
  #[error("unknown report: {0}")]
  UnknownReport(String),
}
