use serde::{Deserialize, Serialize};

/// El empleado de mayor jerarquía según su nivel (`L1`..`L7`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeniorEmployee {
  pub first_name: String,
  pub last_name: String,
  /// Cargo legible ("General Manager", etc.).
  pub title: String,
  /// Nivel de jerarquía; el orden lexicográfico coincide con el numérico.
  pub level: String,
}

/// Facturas emitidas por país de facturación.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryInvoiceCount {
  pub country: String,
  pub invoice_count: i64,
}

/// Una factura, vista por su total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotal {
  pub invoice_id: i32,
  pub billing_country: String,
  pub total: f64,
}

/// Ciudad con su facturación acumulada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRevenue {
  pub city: String,
  pub revenue: f64,
}

/// Gasto total de un cliente sobre todas sus facturas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSpend {
  pub customer_id: i32,
  pub first_name: String,
  pub last_name: String,
  pub total_spent: f64,
}

/// Un cliente que compró al menos una pista de un género dado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreListener {
  pub email: String,
  pub first_name: String,
  pub last_name: String,
}

/// Un artista con la cantidad de pistas que aporta a un género.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistTrackCount {
  pub artist_name: String,
  pub track_count: i64,
}

/// Una pista con su duración en milisegundos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackDuration {
  pub track_name: String,
  pub milliseconds: i32,
}

/// Gasto de un cliente sobre las pistas del artista más vendido.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistCustomerSpend {
  pub customer_id: i32,
  pub first_name: String,
  pub last_name: String,
  pub artist_name: String,
  pub amount_spent: f64,
}

/// Género más comprado dentro de un país (todos los empates incluidos).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryTopGenre {
  pub country: String,
  pub genre_name: String,
  pub purchase_count: i64,
}

/// Cliente que más gastó dentro de un país (todos los empates incluidos).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryTopSpender {
  pub country: String,
  pub customer_id: i32,
  pub first_name: String,
  pub last_name: String,
  pub total_spent: f64,
}

/// Resultado tipado de un reporte del catálogo.
///
/// Cada variante corresponde uno a uno con [`super::ReportKind`]; las
/// consultas de "ganador único" devuelven `Option` (tabla vacía => `None`),
/// el resto una secuencia ordenada de filas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Report {
  SeniorEmployee(Option<SeniorEmployee>),
  InvoicesByCountry(Vec<CountryInvoiceCount>),
  TopInvoiceTotals(Vec<InvoiceTotal>),
  BestRevenueCity(Option<CityRevenue>),
  BestCustomer(Option<CustomerSpend>),
  RockListeners(Vec<GenreListener>),
  TopRockBands(Vec<ArtistTrackCount>),
  AboveAverageTracks(Vec<TrackDuration>),
  SpendOnTopArtist(Vec<ArtistCustomerSpend>),
  TopGenrePerCountry(Vec<CountryTopGenre>),
  TopSpenderPerCountry(Vec<CountryTopSpender>),
}

impl Report {
  /// Cantidad de filas del resultado, sin importar la variante.
  pub fn row_count(&self) -> usize {
    match self {
      Report::SeniorEmployee(r) => usize::from(r.is_some()),
      Report::BestRevenueCity(r) => usize::from(r.is_some()),
      Report::BestCustomer(r) => usize::from(r.is_some()),
      Report::InvoicesByCountry(rows) => rows.len(),
      Report::TopInvoiceTotals(rows) => rows.len(),
      Report::RockListeners(rows) => rows.len(),
      Report::TopRockBands(rows) => rows.len(),
      Report::AboveAverageTracks(rows) => rows.len(),
      Report::SpendOnTopArtist(rows) => rows.len(),
      Report::TopGenrePerCountry(rows) => rows.len(),
      Report::TopSpenderPerCountry(rows) => rows.len(),
    }
  }
}
