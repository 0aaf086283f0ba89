use crate::domain::report::{
  ArtistCustomerSpend, ArtistTrackCount, CityRevenue, CountryInvoiceCount, CountryTopGenre,
  CountryTopSpender, CustomerSpend, GenreListener, InvoiceTotal, SeniorEmployee, TrackDuration,
};
use crate::errors::CoreError;

/// Puerto de persistencia del catálogo de reportes.
///
/// Cada método ejecuta una consulta de solo lectura contra el almacén y
/// devuelve sus filas ya ordenadas. Ningún método muta datos; un filtro
/// sin coincidencias devuelve una secuencia vacía (o `None`), nunca un
/// error. Los errores de acceso a datos se propagan como
/// [`CoreError::Repository`].
pub trait ReportCatalog {
  /// Empleado con el nivel máximo; `None` si no hay empleados.
  /// Ante empate el ganador es el primero que produzca el almacén.
  fn senior_employee(&self) -> Result<Option<SeniorEmployee>, CoreError>;

  /// Facturas por país de facturación, descendente por conteo.
  fn invoices_by_country(&self) -> Result<Vec<CountryInvoiceCount>, CoreError>;

  /// Los 3 totales de factura más altos, descendente.
  fn top_invoice_totals(&self) -> Result<Vec<InvoiceTotal>, CoreError>;

  /// Ciudad de facturación con mayor total acumulado.
  fn best_revenue_city(&self) -> Result<Option<CityRevenue>, CoreError>;

  /// Cliente con mayor total acumulado sobre todas sus facturas.
  fn best_customer(&self) -> Result<Option<CustomerSpend>, CoreError>;

  /// Clientes con al menos una pista del género "Rock" (coincidencia
  /// exacta, sensible a mayúsculas), ascendente por email, sin duplicados.
  fn rock_listeners(&self) -> Result<Vec<GenreListener>, CoreError>;

  /// Los 10 artistas con más pistas de Rock (vía álbum → pista).
  fn top_rock_bands(&self) -> Result<Vec<ArtistTrackCount>, CoreError>;

  /// Pistas estrictamente más largas que la duración promedio.
  fn above_average_tracks(&self) -> Result<Vec<TrackDuration>, CoreError>;

  /// Gasto por cliente sobre el único artista más vendido del catálogo.
  fn spend_on_top_artist(&self) -> Result<Vec<ArtistCustomerSpend>, CoreError>;

  /// Por país del cliente, el/los género(s) con más compras.
  /// Empates: se devuelven todos (máximo inclusivo).
  fn top_genre_per_country(&self) -> Result<Vec<CountryTopGenre>, CoreError>;

  /// Por país de facturación, el/los cliente(s) con mayor gasto.
  /// Empates: se devuelven todos (máximo inclusivo).
  fn top_spender_per_country(&self) -> Result<Vec<CountryTopSpender>, CoreError>;
}
